//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub sid: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub age: i32,
    pub dob: String,
    pub email: String,
    pub province: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub postal: Option<String>,
    pub photo: Option<String>,
    pub grade_level: i32,
    pub yog: i32,
    pub homeroom: Option<String>,
    pub locker: Option<String>,
    #[sea_orm(unique)]
    pub school_email: String,
    pub password_hash: String,
    pub temp_password: bool,
    pub attempts: i32,
    pub disabled: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_contacts::Entity")]
    StudentContacts,
}

impl Related<super::student_contacts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentContacts.def()
    }
}

impl Related<super::contacts::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_contacts::Relation::Contact.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_contacts::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::accounts::AccountStatus;
        use crate::models::common::PostalAddress;
        use crate::models::students::entities::Student;
        use chrono::{DateTime, Utc};

        Student {
            sid: self.sid,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            age: self.age,
            dob: self.dob,
            email: self.email,
            address: PostalAddress {
                province: self.province,
                city: self.city,
                address: self.address,
                postal: self.postal,
            },
            photo: self.photo,
            grade_level: self.grade_level,
            yog: self.yog,
            homeroom: self.homeroom,
            locker: self.locker,
            school_email: self.school_email,
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
            id: self.sid,
            role: AccountRole::Student,
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
