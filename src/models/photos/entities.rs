use serde::{Deserialize, Serialize};

use crate::models::accounts::AccountRole;

// 头像记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub owner_role: AccountRole,
    pub owner_id: String,
    pub url: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
