use super::{SeaOrmStorage, map_write_error};
use crate::entity::teachers::{ActiveModel, Entity as Teachers};
use crate::errors::{Result, SchoolError};
use crate::models::teachers::entities::{NewTeacher, Teacher, UpdateTeacher};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_teacher_impl(&self, req: NewTeacher) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            tid: Set(req.tid),
            first_name: Set(req.first_name),
            middle_name: Set(req.middle_name),
            last_name: Set(req.last_name),
            dob: Set(req.dob),
            email: Set(req.email),
            school_email: Set(req.school_email),
            homeroom: Set(None),
            province: Set(None),
            city: Set(None),
            address: Set(None),
            postal: Set(None),
            photo: Set(None),
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
            .map_err(|e| map_write_error(e, "创建教师失败"))?;

        Ok(result.into_teacher())
    }

    /// 通过 tid 获取教师
    pub async fn get_teacher_impl(&self, tid: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(tid.to_string())
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 更新教师信息
    pub async fn update_teacher_impl(
        &self,
        tid: &str,
        update: UpdateTeacher,
    ) -> Result<Option<Teacher>> {
        if self.get_teacher_impl(tid).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            tid: Set(tid.to_string()),
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
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(homeroom) = update.homeroom {
            model.homeroom = Set(Some(homeroom));
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
            .map_err(|e| map_write_error(e, "更新教师失败"))?;

        Ok(Some(result.into_teacher()))
    }
}
