use super::SeaOrmStorage;
use crate::entity::{admins, students, teachers};
use crate::errors::{Result, SchoolError};
use crate::models::accounts::{AccountCredentials, AccountRole};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, sea_query::Expr};

impl SeaOrmStorage {
    /// ID 在三张账号表中是否已存在
    pub async fn identifier_exists_impl(&self, id: &str) -> Result<bool> {
        let students = students::Entity::find_by_id(id.to_string())
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生 ID 失败: {e}")))?;
        if students > 0 {
            return Ok(true);
        }

        let teachers = teachers::Entity::find_by_id(id.to_string())
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师 ID 失败: {e}")))?;
        if teachers > 0 {
            return Ok(true);
        }

        let admins = admins::Entity::find_by_id(id.to_string())
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询管理员 ID 失败: {e}")))?;

        Ok(admins > 0)
    }

    /// 校内邮箱是否已被学生或教师占用
    pub async fn school_email_exists_impl(&self, school_email: &str) -> Result<bool> {
        let students = students::Entity::find()
            .filter(students::Column::SchoolEmail.eq(school_email))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询校内邮箱失败: {e}")))?;
        if students > 0 {
            return Ok(true);
        }

        let teachers = teachers::Entity::find()
            .filter(teachers::Column::SchoolEmail.eq(school_email))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询校内邮箱失败: {e}")))?;

        Ok(teachers > 0)
    }

    /// 获取账号凭据
    pub async fn get_account_impl(
        &self,
        role: AccountRole,
        id: &str,
    ) -> Result<Option<AccountCredentials>> {
        let id = id.to_string();
        let account = match role {
            AccountRole::Student => students::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .map(|m| m.map(|m| m.into_credentials())),
            AccountRole::Teacher => teachers::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .map(|m| m.map(|m| m.into_credentials())),
            AccountRole::Admin => admins::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .map(|m| m.map(|m| m.into_credentials())),
        };

        account.map_err(|e| SchoolError::database_operation(format!("查询账号失败: {e}")))
    }

    /// 更新失败计数与禁用状态
    pub async fn update_login_state_impl(
        &self,
        role: AccountRole,
        id: &str,
        attempts: i32,
        disabled: bool,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = match role {
            AccountRole::Student => {
                students::Entity::update_many()
                    .col_expr(students::Column::Attempts, Expr::value(attempts))
                    .col_expr(students::Column::Disabled, Expr::value(disabled))
                    .col_expr(students::Column::UpdatedAt, Expr::value(now))
                    .filter(students::Column::Sid.eq(id))
                    .exec(&self.db)
                    .await
            }
            AccountRole::Teacher => {
                teachers::Entity::update_many()
                    .col_expr(teachers::Column::Attempts, Expr::value(attempts))
                    .col_expr(teachers::Column::Disabled, Expr::value(disabled))
                    .col_expr(teachers::Column::UpdatedAt, Expr::value(now))
                    .filter(teachers::Column::Tid.eq(id))
                    .exec(&self.db)
                    .await
            }
            // 管理员账号不记录登录失败
            AccountRole::Admin => return Ok(false),
        }
        .map_err(|e| SchoolError::database_operation(format!("更新登录状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新密码
    pub async fn update_password_impl(
        &self,
        role: AccountRole,
        id: &str,
        password_hash: &str,
        temp_password: bool,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = match role {
            AccountRole::Student => {
                students::Entity::update_many()
                    .col_expr(students::Column::PasswordHash, Expr::value(password_hash))
                    .col_expr(students::Column::TempPassword, Expr::value(temp_password))
                    .col_expr(students::Column::UpdatedAt, Expr::value(now))
                    .filter(students::Column::Sid.eq(id))
                    .exec(&self.db)
                    .await
            }
            AccountRole::Teacher => {
                teachers::Entity::update_many()
                    .col_expr(teachers::Column::PasswordHash, Expr::value(password_hash))
                    .col_expr(teachers::Column::TempPassword, Expr::value(temp_password))
                    .col_expr(teachers::Column::UpdatedAt, Expr::value(now))
                    .filter(teachers::Column::Tid.eq(id))
                    .exec(&self.db)
                    .await
            }
            AccountRole::Admin => {
                admins::Entity::update_many()
                    .col_expr(admins::Column::PasswordHash, Expr::value(password_hash))
                    .col_expr(admins::Column::TempPassword, Expr::value(temp_password))
                    .col_expr(admins::Column::UpdatedAt, Expr::value(now))
                    .filter(admins::Column::Aid.eq(id))
                    .exec(&self.db)
                    .await
            }
        }
        .map_err(|e| SchoolError::database_operation(format!("更新密码失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
