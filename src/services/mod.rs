pub mod admins;
pub mod auth;
pub mod contacts;
pub mod credentials;
pub mod identifiers;
pub mod students;
pub mod teachers;

pub use admins::AdminService;
pub use auth::AuthService;
pub use contacts::ContactService;
pub use students::StudentService;
pub use teachers::TeacherService;

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;
use tracing::error;

use crate::errors::SchoolError;
use crate::mail::Mailer;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, accounts::Principal};
use crate::storage::Storage;
use crate::utils::validate::missing_fields;

// 从 app_data 取存储实例
pub(crate) fn storage_from(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

// 从 app_data 取邮件发送器
pub(crate) fn mailer_from(request: &HttpRequest) -> Arc<dyn Mailer> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Mailer>>>()
        .expect("Mailer not found in app data")
        .get_ref()
        .clone()
}

/// 校验必填字段，缺失时返回 400 并列出字段名
pub(crate) fn require_fields(fields: &[(&str, &str)]) -> Result<(), HttpResponse> {
    let missing = missing_fields(fields);
    if missing.is_empty() {
        return Ok(());
    }
    Err(HttpResponse::BadRequest().json(ApiResponse::error(
        ErrorCode::MissingFields,
        missing,
        "missing required fields",
    )))
}

/// 取当前账号，未经 RequireJWT 时返回 401
pub(crate) fn current_principal(request: &HttpRequest) -> Result<Principal, HttpResponse> {
    RequireJWT::extract_principal(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        ))
    })
}

pub(crate) fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn not_found(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

pub(crate) fn forbidden() -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::Forbidden,
        "Access denied.",
    ))
}

/// 将内部错误映射为响应；服务端错误只记录日志，不把细节返回给客户端
pub(crate) fn error_response(context: &str, err: SchoolError) -> HttpResponse {
    match err {
        SchoolError::Validation(msg) => bad_request(ErrorCode::InvalidField, msg),
        SchoolError::NotFound(msg) => not_found(ErrorCode::NotFound, msg),
        SchoolError::Conflict(msg) => {
            tracing::info!("{}: {}", context, msg);
            HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "resource already exists",
            ))
        }
        SchoolError::MailTransport(_) | SchoolError::MailMessage(_) => {
            error!("{}: {}", context, err);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::MailDeliveryFailed,
                "failed to send email",
            ))
        }
        other => {
            error!("{}: {}", context, other);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Internal server error",
            ))
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode};

    #[actix_web::test]
    async fn test_require_fields_lists_missing() {
        let resp = require_fields(&[("sid", "123456"), ("email", ""), ("url", " ")]).unwrap_err();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], ErrorCode::MissingFields as i32);
        assert_eq!(json["message"], "missing required fields");
        assert_eq!(json["data"], serde_json::json!(["email", "url"]));

        assert!(require_fields(&[("sid", "123456")]).is_ok());
    }

    #[test]
    fn test_error_response_status() {
        assert_eq!(
            error_response("ctx", SchoolError::conflict("dup")).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            error_response("ctx", SchoolError::mail_transport("down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            error_response("ctx", SchoolError::validation("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_response("ctx", SchoolError::database_operation("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        // 哈希失败属于服务端错误
        assert_eq!(
            error_response("ctx", SchoolError::password_hashing("argon2")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
