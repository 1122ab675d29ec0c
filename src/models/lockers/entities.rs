use serde::{Deserialize, Serialize};

// 储物柜
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Locker {
    pub id: String,
    pub locker_number: String,
    pub combo: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
