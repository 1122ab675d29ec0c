/*!
 * JWT 认证中间件
 *
 * 验证请求携带的令牌，并确认令牌对应的账号仍然存在且未被禁用。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::RequireJWT;
 *
 * web::scope("/api/v1")
 *     .wrap(RequireJWT)
 *     .route("/student", web::get().to(profile_handler))
 * ```
 *
 * 处理程序中通过 `RequireJWT::extract_principal(&req)` 取得当前账号。
 *
 * ## 认证流程
 *
 * 1. 从 `jwt` Cookie 或 `Authorization: Bearer <JWT_TOKEN>` 头中读取令牌
 * 2. 校验签名与过期时间
 * 3. 按 `(role, sub)` 查询账号，不存在或已禁用则返回 401
 * 4. 将 `Principal` 放入请求扩展，继续处理请求
 */

use crate::models::ErrorCode;
use crate::models::accounts::Principal;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, error, info};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireJWT;

// 认证失败：状态码、业务码与提示信息
struct AuthRejection {
    status: StatusCode,
    code: ErrorCode,
    message: &'static str,
}

impl AuthRejection {
    fn unauthorized(message: &'static str) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            code: ErrorCode::Unauthorized,
            message,
        }
    }
}

// 辅助函数：提取并验证令牌，加载账号
async fn authenticate(req: &ServiceRequest) -> Result<Principal, AuthRejection> {
    let token = JwtUtils::extract_token(req.request())
        .ok_or_else(|| AuthRejection::unauthorized("Missing authentication token"))?;

    let claims = JwtUtils::verify_token(&token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        AuthRejection::unauthorized("Invalid or expired token")
    })?;

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            error!("Storage not found in app data");
            AuthRejection {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: ErrorCode::InternalServerError,
                message: "Internal server error",
            }
        })?;

    let account = storage
        .get_account(claims.role, &claims.sub)
        .await
        .map_err(|err| {
            error!("Failed to load account {} ({}): {}", claims.sub, claims.role, err);
            AuthRejection {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: ErrorCode::InternalServerError,
                message: "Internal server error",
            }
        })?
        .ok_or_else(|| AuthRejection::unauthorized("Account not found"))?;

    if account.status.disabled {
        return Err(AuthRejection {
            status: StatusCode::UNAUTHORIZED,
            code: ErrorCode::AccountDisabled,
            message: "Account is Disabled, contact an Admin",
        });
    }

    Ok(Principal {
        id: account.id,
        role: account.role,
        temp_password: account.status.temp_password,
    })
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            match authenticate(&req).await {
                Ok(principal) => {
                    debug!(
                        "JWT authentication successful for {} {}",
                        principal.role, principal.id
                    );
                    req.extensions_mut().insert(principal);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(rejection) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        rejection.message
                    );
                    Ok(req.into_response(
                        create_error_response(rejection.status, rejection.code, rejection.message)
                            .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取账号信息
impl RequireJWT {
    /// 从请求扩展中提取当前账号
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_principal(req: &actix_web::HttpRequest) -> Option<Principal> {
        req.extensions().get::<Principal>().cloned()
    }
}
