//! 头像实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "photos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub owner_role: String,
    pub owner_id: String,
    pub url: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_photo(self) -> crate::models::photos::entities::Photo {
        use crate::models::accounts::AccountRole;
        use crate::models::photos::entities::Photo;
        use chrono::{DateTime, Utc};

        Photo {
            id: self.id,
            owner_role: self
                .owner_role
                .parse::<AccountRole>()
                .unwrap_or(AccountRole::Student),
            owner_id: self.owner_id,
            url: self.url,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
