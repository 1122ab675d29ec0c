//! 联系人实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub home_phone: String,
    pub work_phone: Option<String>,
    pub email: String,
    pub province: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub postal: Option<String>,
    pub relation: String,
    pub priority: i32,
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

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_contact(self) -> crate::models::contacts::entities::Contact {
        use crate::models::common::PostalAddress;
        use crate::models::contacts::entities::Contact;
        use chrono::{DateTime, Utc};

        Contact {
            id: self.id,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            home_phone: self.home_phone,
            work_phone: self.work_phone,
            email: self.email,
            address: PostalAddress {
                province: self.province,
                city: self.city,
                address: self.address,
                postal: self.postal,
            },
            relation: self.relation,
            priority: self.priority,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
