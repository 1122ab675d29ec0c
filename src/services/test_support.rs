//! 处理器测试用的公共设施：内存 SQLite 存储 + 内存邮件发送器

use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test,
};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::mail::{Mailer, MemoryMailer};
use crate::models::admins::entities::NewAdmin;
use crate::services::identifiers::allocate_identifier;
use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use crate::utils::password::hash_password;

pub(crate) const ADMIN_PASSWORD: &str = "Registrar#2024";

// 限流计数是全局的，每个测试使用独立的来源地址
static NEXT_PEER: AtomicU32 = AtomicU32::new(1);

pub(crate) struct TestContext {
    pub storage: Arc<dyn Storage>,
    pub mailer: Arc<MemoryMailer>,
    peer: SocketAddr,
}

impl TestContext {
    pub async fn new() -> Self {
        let storage = SeaOrmStorage::new_in_memory()
            .await
            .expect("in-memory storage");
        let n = NEXT_PEER.fetch_add(1, Ordering::SeqCst);
        let peer = SocketAddr::from(([10, (n >> 16) as u8, (n >> 8) as u8, n as u8], 40000));
        Self {
            storage: Arc::new(storage),
            mailer: Arc::new(MemoryMailer::default()),
            peer,
        }
    }

    pub fn mailer_dyn(&self) -> Arc<dyn Mailer> {
        self.mailer.clone()
    }

    /// 直接写入一个已知密码的管理员，返回 aid
    pub async fn seed_admin(&self) -> String {
        let aid = allocate_identifier(&self.storage).await.expect("aid");
        self.storage
            .create_admin(NewAdmin {
                aid: aid.clone(),
                first_name: "Grace".into(),
                last_name: "Hopper".into(),
                dob: "1906-12-09".into(),
                email: "grace.hopper@mail.test".into(),
                password_hash: hash_password(ADMIN_PASSWORD).expect("hash"),
                temp_password: false,
            })
            .await
            .expect("admin");
        aid
    }

    pub fn post(&self, path: &str, body: Value) -> test::TestRequest {
        test::TestRequest::post()
            .uri(path)
            .peer_addr(self.peer)
            .set_json(body)
    }

    pub fn post_as(&self, token: &str, path: &str, body: Value) -> test::TestRequest {
        self.post(path, body)
            .insert_header(("Authorization", format!("Bearer {token}")))
    }

    pub fn get_as(&self, token: &str, path: &str) -> test::TestRequest {
        test::TestRequest::get()
            .uri(path)
            .peer_addr(self.peer)
            .insert_header(("Authorization", format!("Bearer {token}")))
    }

    pub fn login(&self, role: &str, id: &str, password: &str) -> test::TestRequest {
        self.post(
            &format!("/api/v1/{role}/login"),
            serde_json::json!({ "id": id, "password": password }),
        )
    }
}

/// 构建挂载全部路由的测试应用，中间件与服务端一致
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap($crate::middlewares::RequestDeadline::new(
                    std::time::Duration::from_secs(30),
                ))
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler($crate::utils::json_error_handler),
                )
                .app_data(actix_web::web::Data::new($ctx.storage.clone()))
                .app_data(actix_web::web::Data::new($ctx.mailer_dyn()))
                .configure($crate::routes::configure_routes),
        )
        .await
    };
}
pub(crate) use init_app;

/// 发送请求，返回状态码与 JSON 响应体
pub(crate) async fn send<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// 从登录响应中取出令牌
pub(crate) fn token_from(body: &Value) -> String {
    body["data"]["access_token"]
        .as_str()
        .expect("access token in login response")
        .to_string()
}
