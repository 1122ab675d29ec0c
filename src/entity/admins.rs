//! 管理员实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub aid: String,
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    pub password_hash: String,
    pub temp_password: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_admin(self) -> crate::models::admins::entities::Admin {
        use crate::models::admins::entities::Admin;
        use chrono::{DateTime, Utc};

        Admin {
            aid: self.aid,
            first_name: self.first_name,
            last_name: self.last_name,
            dob: self.dob,
            email: self.email,
            password_hash: self.password_hash,
            temp_password: self.temp_password,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }

    // 管理员表没有失败计数与禁用列，恒为 0 / false
    pub fn into_credentials(self) -> crate::models::accounts::AccountCredentials {
        use crate::models::accounts::{AccountCredentials, AccountRole, AccountStatus};

        AccountCredentials {
            id: self.aid,
            role: AccountRole::Admin,
            first_name: self.first_name,
            email: self.email,
            password_hash: self.password_hash,
            status: AccountStatus {
                temp_password: self.temp_password,
                attempts: 0,
                disabled: false,
            },
        }
    }
}
