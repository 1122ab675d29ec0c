use super::{SeaOrmStorage, map_write_error};
use crate::entity::contacts::{ActiveModel, Entity as Contacts};
use crate::entity::student_contacts::{
    ActiveModel as LinkActiveModel, Column as LinkColumn, Entity as StudentContacts,
};
use crate::errors::{Result, SchoolError};
use crate::models::contacts::entities::{Contact, NewContact, UpdateContact};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};

impl SeaOrmStorage {
    /// 创建联系人并关联到学生（同一事务）
    pub async fn create_student_contact_impl(
        &self,
        sid: &str,
        req: NewContact,
    ) -> Result<Contact> {
        let now = chrono::Utc::now().timestamp();
        let id = uuid::Uuid::new_v4().to_string();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ActiveModel {
            id: Set(id.clone()),
            first_name: Set(req.first_name),
            middle_name: Set(req.middle_name),
            last_name: Set(req.last_name),
            home_phone: Set(req.home_phone),
            work_phone: Set(req.work_phone),
            email: Set(req.email),
            province: Set(req.address.province),
            city: Set(req.address.city),
            address: Set(req.address.address),
            postal: Set(req.address.postal),
            relation: Set(req.relation),
            priority: Set(req.priority),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let contact = model
            .insert(&txn)
            .await
            .map_err(|e| map_write_error(e, "创建联系人失败"))?;

        let link = LinkActiveModel {
            sid: Set(sid.to_string()),
            contact_id: Set(id),
            created_at: Set(now),
        };
        link.insert(&txn)
            .await
            .map_err(|e| map_write_error(e, "关联联系人失败"))?;

        txn.commit()
            .await
            .map_err(|e| SchoolError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(contact.into_contact())
    }

    /// 通过 ID 获取联系人
    pub async fn get_contact_impl(&self, id: &str) -> Result<Option<Contact>> {
        let result = Contacts::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询联系人失败: {e}")))?;

        Ok(result.map(|m| m.into_contact()))
    }

    /// 更新联系人
    pub async fn update_contact_impl(
        &self,
        id: &str,
        update: UpdateContact,
    ) -> Result<Option<Contact>> {
        if self.get_contact_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }
        if let Some(middle_name) = update.middle_name {
            model.middle_name = Set(middle_name);
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }
        if let Some(home_phone) = update.home_phone {
            model.home_phone = Set(home_phone);
        }
        if let Some(work_phone) = update.work_phone {
            model.work_phone = Set(Some(work_phone));
        }
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(address) = update.address {
            model.province = Set(address.province);
            model.city = Set(address.city);
            model.address = Set(address.address);
            model.postal = Set(address.postal);
        }
        if let Some(priority) = update.priority {
            model.priority = Set(priority);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新联系人失败: {e}")))?;

        Ok(Some(result.into_contact()))
    }

    /// 删除联系人及其学生关联
    pub async fn delete_contact_impl(&self, id: &str) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolError::database_operation(format!("开启事务失败: {e}")))?;

        StudentContacts::delete_many()
            .filter(LinkColumn::ContactId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除联系人关联失败: {e}")))?;

        let result = Contacts::delete_by_id(id.to_string())
            .exec(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除联系人失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SchoolError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
