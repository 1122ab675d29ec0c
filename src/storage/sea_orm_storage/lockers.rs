use super::{SeaOrmStorage, map_write_error};
use crate::entity::lockers::{ActiveModel, Column, Entity as Lockers};
use crate::errors::{Result, SchoolError};
use crate::models::lockers::entities::Locker;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建储物柜
    pub async fn create_locker_impl(&self, locker_number: &str, combo: &str) -> Result<Locker> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            locker_number: Set(locker_number.to_string()),
            combo: Set(combo.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, "创建储物柜失败"))?;

        Ok(result.into_locker())
    }

    /// 通过 ID 获取储物柜
    pub async fn get_locker_impl(&self, id: &str) -> Result<Option<Locker>> {
        let result = Lockers::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询储物柜失败: {e}")))?;

        Ok(result.map(|m| m.into_locker()))
    }

    /// 通过柜号获取储物柜
    pub async fn get_locker_by_number_impl(&self, locker_number: &str) -> Result<Option<Locker>> {
        let result = Lockers::find()
            .filter(Column::LockerNumber.eq(locker_number))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询储物柜失败: {e}")))?;

        Ok(result.map(|m| m.into_locker()))
    }

    /// 更新储物柜密码
    pub async fn update_locker_combo_impl(
        &self,
        locker_number: &str,
        combo: &str,
    ) -> Result<Option<Locker>> {
        let Some(existing) = self.get_locker_by_number_impl(locker_number).await? else {
            return Ok(None);
        };

        let model = ActiveModel {
            id: Set(existing.id),
            combo: Set(combo.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新储物柜失败: {e}")))?;

        Ok(Some(result.into_locker()))
    }
}
