use super::{SeaOrmStorage, map_write_error};
use crate::entity::admins::{ActiveModel, Entity as Admins};
use crate::errors::{Result, SchoolError};
use crate::models::admins::entities::{Admin, NewAdmin};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

impl SeaOrmStorage {
    /// 创建管理员
    pub async fn create_admin_impl(&self, req: NewAdmin) -> Result<Admin> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            aid: Set(req.aid),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            dob: Set(req.dob),
            email: Set(req.email),
            password_hash: Set(req.password_hash),
            temp_password: Set(req.temp_password),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, "创建管理员失败"))?;

        Ok(result.into_admin())
    }

    /// 通过 aid 获取管理员
    pub async fn get_admin_impl(&self, aid: &str) -> Result<Option<Admin>> {
        let result = Admins::find_by_id(aid.to_string())
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询管理员失败: {e}")))?;

        Ok(result.map(|m| m.into_admin()))
    }

    /// 管理员数量
    pub async fn count_admins_impl(&self) -> Result<u64> {
        Admins::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计管理员失败: {e}")))
    }
}
