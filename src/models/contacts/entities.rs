use serde::{Deserialize, Serialize};

use crate::models::common::PostalAddress;

// 紧急联系人
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub home_phone: String,
    pub work_phone: Option<String>,
    pub email: String,
    #[serde(flatten)]
    pub address: PostalAddress,
    pub relation: String,
    /// 数值越小越先联系
    pub priority: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContact {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub home_phone: String,
    pub work_phone: Option<String>,
    pub email: String,
    pub address: PostalAddress,
    pub relation: String,
    pub priority: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateContact {
    pub first_name: Option<String>,
    pub middle_name: Option<Option<String>>,
    pub last_name: Option<String>,
    pub home_phone: Option<String>,
    pub work_phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<PostalAddress>,
    pub priority: Option<i32>,
}
