/*!
 * 请求期限中间件
 *
 * 每个请求必须在期限内处理完毕，否则放弃处理并返回 504。
 *
 * ```rust,ignore
 * App::new().wrap(RequestDeadline::from_config())
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
    error::InternalError,
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::config::AppConfig;
use crate::models::ErrorCode;

use super::create_error_response;

#[derive(Clone)]
pub struct RequestDeadline {
    deadline: Duration,
}

impl RequestDeadline {
    pub fn new(deadline: Duration) -> Self {
        Self { deadline }
    }

    /// 期限取自 `server.timeouts.request_deadline`（秒）
    pub fn from_config() -> Self {
        Self::new(Duration::from_secs(
            AppConfig::get().server.timeouts.request_deadline,
        ))
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestDeadline
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestDeadlineMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestDeadlineMiddleware {
            service: Rc::new(service),
            deadline: self.deadline,
        }))
    }
}

pub struct RequestDeadlineMiddleware<S> {
    service: Rc<S>,
    deadline: Duration,
}

impl<S, B> Service<ServiceRequest> for RequestDeadlineMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
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
        let deadline = self.deadline;

        Box::pin(async move {
            // 路由匹配需要独占 HttpRequest，这里不能持有它的克隆
            let path = req.path().to_string();

            match tokio::time::timeout(deadline, srv.call(req)).await {
                Ok(res) => res,
                Err(_) => {
                    warn!("Request to {} exceeded deadline of {:?}", path, deadline);
                    let response = create_error_response(
                        StatusCode::GATEWAY_TIMEOUT,
                        ErrorCode::RequestTimeout,
                        "Request timed out",
                    );
                    Err(InternalError::from_response("request timed out", response).into())
                }
            }
        })
    }
}
