use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::auth::admin_login;
use crate::middlewares;
use crate::models::{
    accounts::AccountRole,
    admins::requests::{CreateAdminRequest, CreateLockerRequest, UpdateLockerComboRequest},
    common::requests::{AccountIdRequest, ResetPasswordRequest, UpdatePasswordRequest},
};
use crate::services::AdminService;

// 懒加载的全局 AdminService 实例
static ADMIN_SERVICE: Lazy<AdminService> = Lazy::new(AdminService::new_lazy);

// HTTP处理程序
pub async fn profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.profile(&req).await
}

pub async fn create(
    req: HttpRequest,
    data: web::Json<CreateAdminRequest>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.create(data.into_inner(), &req).await
}

pub async fn update_password(
    req: HttpRequest,
    data: web::Json<UpdatePasswordRequest>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.update_password(data.into_inner(), &req).await
}

pub async fn reset_password(
    req: HttpRequest,
    data: web::Json<ResetPasswordRequest>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.reset_password(data.into_inner(), &req).await
}

pub async fn create_locker(
    req: HttpRequest,
    data: web::Json<CreateLockerRequest>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.create_locker(data.into_inner(), &req).await
}

pub async fn update_locker_combo(
    req: HttpRequest,
    data: web::Json<UpdateLockerComboRequest>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .update_locker_combo(data.into_inner(), &req)
        .await
}

pub async fn renable_student(
    req: HttpRequest,
    data: web::Json<AccountIdRequest>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .renable(AccountRole::Student, data.into_inner(), &req)
        .await
}

pub async fn renable_teacher(
    req: HttpRequest,
    data: web::Json<AccountIdRequest>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .renable(AccountRole::Teacher, data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin")
            .service(
                web::resource("/login")
                    .wrap(middlewares::RateLimit::login())
                    .route(web::post().to(admin_login)),
            )
            .service(
                web::resource("/resetPassword")
                    .wrap(middlewares::RateLimit::reset_password())
                    .route(web::post().to(reset_password)),
            )
            .service(
                web::scope("")
                    // 后注册的中间件先执行：先认证，再校验角色
                    .wrap(middlewares::RequireRole::new_any(AccountRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("", web::get().to(profile))
                    .route("/create", web::post().to(create))
                    .route("/updatePassword", web::post().to(update_password))
                    .route("/createLocker", web::post().to(create_locker))
                    .route("/updateLockerCombo", web::post().to(update_locker_combo))
                    .route("/renableStudent", web::post().to(renable_student))
                    .route("/renableTeacher", web::post().to(renable_teacher)),
            ),
    );
}
