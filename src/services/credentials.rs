//! 临时密码生命周期：签发、本人修改、忘记密码重置、解除禁用
//!
//! 三种角色共用，按 `AccountRole` 区分存储表。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{info, warn};

use super::{bad_request, current_principal, error_response, not_found, require_fields};
use crate::errors::Result;
use crate::mail::{Mailer, temp_password_mail};
use crate::models::{
    ApiResponse, ErrorCode,
    accounts::AccountRole,
    common::requests::{AccountIdRequest, ResetPasswordRequest, UpdatePasswordRequest},
};
use crate::storage::Storage;
use crate::utils::password::{generate_temp_password, hash_password, verify_password};
use crate::utils::validate::validate_password;

/// 生成临时密码并发送到个人邮箱，返回密码哈希
///
/// 邮件发送失败时返回错误，调用方不得写入任何记录。
pub async fn issue_temp_password(
    mailer: &Arc<dyn Mailer>,
    to: &str,
    first_name: &str,
    role: AccountRole,
    id: &str,
) -> Result<String> {
    let password = generate_temp_password();
    let password_hash = hash_password(&password)?;

    mailer
        .send(temp_password_mail(to, first_name, role, id, &password))
        .await?;

    Ok(password_hash)
}

/// 本人修改密码
pub async fn handle_update_password(
    storage: Arc<dyn Storage>,
    req: UpdatePasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = match current_principal(request) {
        Ok(principal) => principal,
        Err(resp) => return Ok(resp),
    };

    if let Err(resp) = require_fields(&[
        ("currentPassword", req.current_password.as_str()),
        ("newPassword1", req.new_password1.as_str()),
        ("newPassword2", req.new_password2.as_str()),
    ]) {
        return Ok(resp);
    }

    let account = match storage.get_account(principal.role, &principal.id).await {
        Ok(Some(account)) => account,
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Account not found",
            )));
        }
        Err(e) => return Ok(error_response("Failed to load account", e)),
    };

    if !verify_password(&req.current_password, &account.password_hash) {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::IncorrectPassword,
            "incorrect password",
        )));
    }

    if req.new_password1 != req.new_password2 {
        return Ok(bad_request(
            ErrorCode::PasswordMismatch,
            "new passwords do not match",
        ));
    }

    let policy = validate_password(&req.new_password1);
    if !policy.is_valid {
        return Ok(bad_request(
            ErrorCode::PasswordInvalid,
            policy.error_message(),
        ));
    }

    let password_hash = match hash_password(&req.new_password1) {
        Ok(hash) => hash,
        Err(e) => return Ok(error_response("Password hashing failed", e)),
    };

    match storage
        .update_password(principal.role, &principal.id, &password_hash, false)
        .await
    {
        Ok(_) => {
            info!("{} {} changed their password", principal.role, principal.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("password updated")))
        }
        Err(e) => Ok(error_response("Failed to update password", e)),
    }
}

/// 忘记密码：ID 与个人邮箱匹配时重新签发临时密码
pub async fn handle_reset_password(
    storage: Arc<dyn Storage>,
    mailer: Arc<dyn Mailer>,
    role: AccountRole,
    req: ResetPasswordRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        (role.id_field(), req.id.as_str()),
        ("email", req.email.as_str()),
    ]) {
        return Ok(resp);
    }

    let account = match storage.get_account(role, req.id.trim()).await {
        Ok(Some(account)) => account,
        Ok(None) => return Ok(account_not_found(role)),
        Err(e) => return Ok(error_response("Failed to load account", e)),
    };

    if !account.email.eq_ignore_ascii_case(req.email.trim()) {
        warn!("Password reset for {} {} with mismatched email", role, account.id);
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::PersonalEmailMismatch,
            "email does not match our records",
        )));
    }

    let password_hash = match issue_temp_password(
        &mailer,
        &account.email,
        &account.first_name,
        role,
        &account.id,
    )
    .await
    {
        Ok(hash) => hash,
        Err(e) => return Ok(error_response("Failed to issue temporary password", e)),
    };

    match storage
        .update_password(role, &account.id, &password_hash, true)
        .await
    {
        Ok(_) => {
            info!("Temporary password reissued for {} {}", role, account.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "a temporary password has been sent to your email",
            )))
        }
        Err(e) => Ok(error_response("Failed to store temporary password", e)),
    }
}

/// 解除禁用并清零失败计数
pub async fn handle_renable(
    storage: Arc<dyn Storage>,
    role: AccountRole,
    req: AccountIdRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[(role.id_field(), req.id.as_str())]) {
        return Ok(resp);
    }

    match storage
        .update_login_state(role, req.id.trim(), 0, false)
        .await
    {
        Ok(true) => {
            info!("{} {} re-enabled", role, req.id.trim());
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("account re-enabled")))
        }
        Ok(false) => Ok(account_not_found(role)),
        Err(e) => Ok(error_response("Failed to re-enable account", e)),
    }
}

pub(crate) fn account_not_found(role: AccountRole) -> HttpResponse {
    match role {
        AccountRole::Student => not_found(ErrorCode::StudentNotFound, "student not found"),
        AccountRole::Teacher => not_found(ErrorCode::TeacherNotFound, "teacher not found"),
        AccountRole::Admin => not_found(ErrorCode::AdminNotFound, "admin not found"),
    }
}
