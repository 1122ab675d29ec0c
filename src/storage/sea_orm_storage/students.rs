use super::{SeaOrmStorage, map_write_error};
use crate::entity::contacts::{Column as ContactColumn, Entity as Contacts};
use crate::entity::student_contacts::{
    ActiveModel as LinkActiveModel, Column as LinkColumn, Entity as StudentContacts,
};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SchoolError};
use crate::models::{
    contacts::entities::Contact,
    students::entities::{NewStudent, Student, UpdateStudent},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: NewStudent) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            sid: Set(req.sid),
            first_name: Set(req.first_name),
            middle_name: Set(req.middle_name),
            last_name: Set(req.last_name),
            age: Set(req.age),
            dob: Set(req.dob),
            email: Set(req.email),
            province: Set(req.address.province),
            city: Set(req.address.city),
            address: Set(req.address.address),
            postal: Set(req.address.postal),
            photo: Set(None),
            grade_level: Set(req.grade_level),
            yog: Set(req.yog),
            homeroom: Set(None),
            locker: Set(None),
            school_email: Set(req.school_email),
            password_hash: Set(req.password_hash),
            temp_password: Set(true),
            attempts: Set(0),
            disabled: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, "创建学生失败"))?;

        Ok(result.into_student())
    }

    /// 通过 sid 获取学生
    pub async fn get_student_impl(&self, sid: &str) -> Result<Option<Student>> {
        let result = Students::find_by_id(sid.to_string())
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        sid: &str,
        update: UpdateStudent,
    ) -> Result<Option<Student>> {
        if self.get_student_impl(sid).await?.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            sid: Set(sid.to_string()),
            updated_at: Set(now),
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
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(grade_level) = update.grade_level {
            model.grade_level = Set(grade_level);
        }
        if let Some(yog) = update.yog {
            model.yog = Set(yog);
        }
        if let Some(homeroom) = update.homeroom {
            model.homeroom = Set(Some(homeroom));
        }
        if let Some(locker) = update.locker {
            model.locker = Set(Some(locker));
        }
        if let Some(address) = update.address {
            model.province = Set(address.province);
            model.city = Set(address.city);
            model.address = Set(address.address);
            model.postal = Set(address.postal);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| map_write_error(e, "更新学生失败"))?;

        Ok(Some(result.into_student()))
    }

    /// 查询占用储物柜的学生
    pub async fn get_student_by_locker_impl(&self, locker_id: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Locker.eq(locker_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询储物柜归属失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 关联联系人
    pub async fn link_contact_impl(&self, sid: &str, contact_id: &str) -> Result<bool> {
        let existing = StudentContacts::find_by_id((sid.to_string(), contact_id.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询联系人关联失败: {e}")))?;
        if existing > 0 {
            return Ok(false);
        }

        let link = LinkActiveModel {
            sid: Set(sid.to_string()),
            contact_id: Set(contact_id.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
        };
        link.insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, "关联联系人失败"))?;

        Ok(true)
    }

    /// 解除联系人关联
    pub async fn unlink_contact_impl(&self, sid: &str, contact_id: &str) -> Result<bool> {
        let result = StudentContacts::delete_many()
            .filter(LinkColumn::Sid.eq(sid))
            .filter(LinkColumn::ContactId.eq(contact_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("解除联系人关联失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按优先级列出学生的联系人
    pub async fn list_student_contacts_impl(&self, sid: &str) -> Result<Vec<Contact>> {
        let contacts = Contacts::find()
            .join(
                JoinType::InnerJoin,
                crate::entity::contacts::Relation::StudentContacts.def(),
            )
            .filter(LinkColumn::Sid.eq(sid))
            .order_by_asc(ContactColumn::Priority)
            .order_by_asc(ContactColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生联系人失败: {e}")))?;

        Ok(contacts.into_iter().map(|m| m.into_contact()).collect())
    }
}
