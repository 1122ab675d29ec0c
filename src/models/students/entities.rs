use serde::{Deserialize, Serialize};

use crate::models::accounts::AccountStatus;
use crate::models::common::PostalAddress;

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub sid: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub age: i32,
    pub dob: String,
    /// 个人邮箱
    pub email: String,
    #[serde(flatten)]
    pub address: PostalAddress,
    pub photo: Option<String>,
    pub grade_level: i32,
    /// 毕业年份
    pub yog: i32,
    pub homeroom: Option<String>,
    /// 储物柜 ID
    pub locker: Option<String>,
    pub school_email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub account: AccountStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 入学时写入存储层的数据
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub sid: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub age: i32,
    pub dob: String,
    pub email: String,
    pub address: PostalAddress,
    pub grade_level: i32,
    pub yog: i32,
    pub school_email: String,
    pub password_hash: String,
}

// 学生字段更新，None 表示不修改
#[derive(Debug, Clone, Default)]
pub struct UpdateStudent {
    pub first_name: Option<String>,
    pub middle_name: Option<Option<String>>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub grade_level: Option<i32>,
    pub yog: Option<i32>,
    pub homeroom: Option<String>,
    pub locker: Option<String>,
    pub address: Option<PostalAddress>,
}

/// 毕业年份：(12 - 年级) + 当前年份 + 1
pub fn year_of_graduation(grade_level: i32, current_year: i32) -> i32 {
    (12 - grade_level) + current_year + 1
}
