use crate::models::accounts::AccountRole;
use serde::Serialize;

// 登录响应
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: String,
    pub role: AccountRole,
    pub access_token: String,
    pub expires_in: i64,
    /// 为 true 时客户端应引导用户修改密码
    pub temp_password: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
