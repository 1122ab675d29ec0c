//! 教师实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tid: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    #[sea_orm(unique)]
    pub school_email: String,
    pub homeroom: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub postal: Option<String>,
    pub photo: Option<String>,
    pub password_hash: String,
    pub temp_password: bool,
    pub attempts: i32,
    pub disabled: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_teacher(self) -> crate::models::teachers::entities::Teacher {
        use crate::models::accounts::AccountStatus;
        use crate::models::common::PostalAddress;
        use crate::models::teachers::entities::Teacher;
        use chrono::{DateTime, Utc};

        Teacher {
            tid: self.tid,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            dob: self.dob,
            email: self.email,
            school_email: self.school_email,
            homeroom: self.homeroom,
            address: PostalAddress {
                province: self.province,
                city: self.city,
                address: self.address,
                postal: self.postal,
            },
            photo: self.photo,
            password_hash: self.password_hash,
            account: AccountStatus {
                temp_password: self.temp_password,
                attempts: self.attempts,
                disabled: self.disabled,
            },
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }

    pub fn into_credentials(self) -> crate::models::accounts::AccountCredentials {
        use crate::models::accounts::{AccountCredentials, AccountRole, AccountStatus};

        AccountCredentials {
            id: self.tid,
            role: AccountRole::Teacher,
            first_name: self.first_name,
            email: self.email,
            password_hash: self.password_hash,
            status: AccountStatus {
                temp_password: self.temp_password,
                attempts: self.attempts,
                disabled: self.disabled,
            },
        }
    }
}
