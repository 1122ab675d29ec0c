use serde::{Deserialize, Serialize};

use crate::models::accounts::AccountStatus;
use crate::models::common::PostalAddress;

// 教师实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub tid: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    pub school_email: String,
    pub homeroom: Option<String>,
    #[serde(flatten)]
    pub address: PostalAddress,
    pub photo: Option<String>,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub account: AccountStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTeacher {
    pub tid: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    pub school_email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTeacher {
    pub first_name: Option<String>,
    pub middle_name: Option<Option<String>>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub homeroom: Option<String>,
    pub address: Option<PostalAddress>,
}
