use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::AuthService;
use crate::models::{
    ApiResponse, ErrorCode,
    accounts::AccountRole,
    auth::responses::LoginResponse,
    common::requests::LoginRequest,
};
use crate::services::{error_response, require_fields};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

const DISABLED_MESSAGE: &str = "Account is Disabled, contact an Admin";

fn disabled_response() -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::AccountDisabled,
        DISABLED_MESSAGE,
    ))
}

pub async fn handle_login(
    service: &AuthService,
    role: AccountRole,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        (role.id_field(), login_request.id.as_str()),
        ("password", login_request.password.as_str()),
    ]) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);
    let config = service.get_config();
    let max_attempts = config.auth.max_login_attempts;
    let id = login_request.id.trim();

    // 1. 获取账号
    let account = match storage.get_account(role, id).await {
        Ok(Some(account)) => account,
        Ok(None) => {
            info!("Login attempt for unknown {} {}", role, id);
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                "invalid credentials",
            )));
        }
        Err(e) => return Ok(error_response("Login failed", e)),
    };

    // 2. 已禁用
    if account.status.disabled {
        return Ok(disabled_response());
    }

    let locks = role.locks_on_failed_login();

    // 3. 历史失败次数已达上限
    if locks && account.status.attempts >= max_attempts {
        if let Err(e) = storage.update_login_state(role, &account.id, 0, true).await {
            return Ok(error_response("Failed to disable account", e));
        }
        warn!("{} {} disabled after too many failed logins", role, account.id);
        return Ok(disabled_response());
    }

    // 4. 密码错误
    if !verify_password(&login_request.password, &account.password_hash) {
        if locks {
            let attempts = account.status.attempts + 1;
            // 达到上限：禁用并清零计数
            let (attempts, disabled) = if attempts >= max_attempts {
                (0, true)
            } else {
                (attempts, false)
            };
            if let Err(e) = storage
                .update_login_state(role, &account.id, attempts, disabled)
                .await
            {
                return Ok(error_response("Failed to record login attempt", e));
            }
            if disabled {
                warn!("{} {} disabled after too many failed logins", role, account.id);
                return Ok(disabled_response());
            }
        }
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::IncorrectPassword,
            "incorrect password",
        )));
    }

    // 5. 成功：清零计数并签发令牌
    if locks
        && account.status.attempts != 0
        && let Err(e) = storage.update_login_state(role, &account.id, 0, false).await
    {
        return Ok(error_response("Failed to reset login attempts", e));
    }

    let token = match JwtUtils::generate_token(&account.id, role) {
        Ok(token) => token,
        Err(e) => {
            error!("Failed to generate JWT token: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            );
        }
    };

    info!("{} {} logged in successfully", role, account.id);

    let cookie = JwtUtils::create_token_cookie(&token);
    let response = LoginResponse {
        id: account.id,
        role,
        access_token: token,
        expires_in: config.jwt.token_expiry_hours * 3600,
        temp_password: account.status.temp_password,
        created_at: chrono::Utc::now(),
    };

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::success(response, "Login successful")))
}
