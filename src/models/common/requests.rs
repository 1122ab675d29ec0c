//! 各角色共用的表单请求
//!
//! 账号 ID 字段在不同路由下分别叫 `sid`、`tid`、`aid` 或 `id`，统一收进 `id`。

use serde::Deserialize;

// 登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default, alias = "sid", alias = "tid", alias = "aid")]
    pub id: String,
    #[serde(default)]
    pub password: String,
}

// 修改密码请求（本人）
#[derive(Debug, Deserialize)]
pub struct UpdatePasswordRequest {
    #[serde(default, rename = "currentPassword")]
    pub current_password: String,
    #[serde(default, rename = "newPassword1")]
    pub new_password1: String,
    #[serde(default, rename = "newPassword2")]
    pub new_password2: String,
}

// 重置密码请求：ID + 个人邮箱
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default, alias = "sid", alias = "tid", alias = "aid")]
    pub id: String,
    #[serde(default)]
    pub email: String,
}

// 只携带账号 ID 的请求
#[derive(Debug, Deserialize)]
pub struct AccountIdRequest {
    #[serde(default, alias = "sid", alias = "tid", alias = "aid")]
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNameRequest {
    #[serde(default, alias = "sid", alias = "tid")]
    pub id: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub middlename: String,
    #[serde(default)]
    pub lastname: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAddressRequest {
    #[serde(default, alias = "sid", alias = "tid")]
    pub id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub postal: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEmailRequest {
    #[serde(default, alias = "sid", alias = "tid")]
    pub id: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateHomeroomRequest {
    #[serde(default, alias = "sid", alias = "tid")]
    pub id: String,
    #[serde(default)]
    pub homeroom: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePhotoRequest {
    #[serde(default, alias = "sid", alias = "tid")]
    pub id: String,
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_specific_id_keys() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"sid": "123456", "password": "pw"}"#).unwrap();
        assert_eq!(req.id, "123456");
        let req: LoginRequest = serde_json::from_str(r#"{"aid": "654321"}"#).unwrap();
        assert_eq!(req.id, "654321");
        assert!(req.password.is_empty());
        let req: UpdateEmailRequest =
            serde_json::from_str(r#"{"id": "c-1", "email": "a@b.org"}"#).unwrap();
        assert_eq!(req.id, "c-1");
    }

    #[test]
    fn test_password_keys() {
        let req: UpdatePasswordRequest = serde_json::from_str(
            r#"{"currentPassword": "a", "newPassword1": "b", "newPassword2": "c"}"#,
        )
        .unwrap();
        assert_eq!(req.current_password, "a");
        assert_eq!(req.new_password1, "b");
        assert_eq!(req.new_password2, "c");
    }
}
