use super::SeaOrmStorage;
use crate::entity::photos::{ActiveModel, Entity as Photos};
use crate::entity::{students, teachers};
use crate::errors::{Result, SchoolError};
use crate::models::{accounts::AccountRole, photos::entities::Photo};
use sea_orm::{
    ActiveModelTrait, DatabaseTransaction, EntityTrait, IntoActiveModel, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 替换账号头像：写入新记录、更新账号引用并删除旧记录（同一事务）
    ///
    /// 账号不存在时返回 `None`，不写入任何数据。
    pub async fn replace_photo_impl(
        &self,
        owner_role: AccountRole,
        owner_id: &str,
        url: &str,
    ) -> Result<Option<Photo>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolError::database_operation(format!("开启事务失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();
        let photo_id = uuid::Uuid::new_v4().to_string();

        let (previous, photo) = match owner_role {
            AccountRole::Student => {
                let Some(student) = students::Entity::find_by_id(owner_id.to_string())
                    .one(&txn)
                    .await
                    .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?
                else {
                    return Ok(None);
                };
                let previous = student.photo.clone();
                let mut model = student.into_active_model();
                model.photo = Set(Some(photo_id.clone()));
                model.updated_at = Set(now);
                let photo = insert_photo(&txn, &photo_id, owner_role, owner_id, url, now).await?;
                model
                    .update(&txn)
                    .await
                    .map_err(|e| SchoolError::database_operation(format!("更新学生头像失败: {e}")))?;
                (previous, photo)
            }
            AccountRole::Teacher => {
                let Some(teacher) = teachers::Entity::find_by_id(owner_id.to_string())
                    .one(&txn)
                    .await
                    .map_err(|e| SchoolError::database_operation(format!("查询教师失败: {e}")))?
                else {
                    return Ok(None);
                };
                let previous = teacher.photo.clone();
                let mut model = teacher.into_active_model();
                model.photo = Set(Some(photo_id.clone()));
                model.updated_at = Set(now);
                let photo = insert_photo(&txn, &photo_id, owner_role, owner_id, url, now).await?;
                model
                    .update(&txn)
                    .await
                    .map_err(|e| SchoolError::database_operation(format!("更新教师头像失败: {e}")))?;
                (previous, photo)
            }
            // 管理员没有头像
            AccountRole::Admin => return Ok(None),
        };

        if let Some(previous) = previous {
            Photos::delete_by_id(previous)
                .exec(&txn)
                .await
                .map_err(|e| SchoolError::database_operation(format!("删除旧头像失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(photo))
    }

    /// 查询头像记录
    pub async fn get_photo_impl(&self, id: &str) -> Result<Option<Photo>> {
        let result = Photos::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询头像失败: {e}")))?;

        Ok(result.map(|m| m.into_photo()))
    }
}

async fn insert_photo(
    txn: &DatabaseTransaction,
    id: &str,
    owner_role: AccountRole,
    owner_id: &str,
    url: &str,
    now: i64,
) -> Result<Photo> {
    let model = ActiveModel {
        id: Set(id.to_string()),
        owner_role: Set(owner_role.to_string()),
        owner_id: Set(owner_id.to_string()),
        url: Set(url.to_string()),
        created_at: Set(now),
    };
    let result = model
        .insert(txn)
        .await
        .map_err(|e| SchoolError::database_operation(format!("创建头像记录失败: {e}")))?;
    Ok(result.into_photo())
}
