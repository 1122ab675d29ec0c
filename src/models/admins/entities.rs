use serde::{Deserialize, Serialize};

// 管理员实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub aid: String,
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub temp_password: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub aid: String,
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    pub password_hash: String,
    pub temp_password: bool,
}
