use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::auth::teacher_login;
use crate::middlewares;
use crate::models::{
    accounts::AccountRole,
    common::requests::{
        ResetPasswordRequest, UpdateAddressRequest, UpdateEmailRequest, UpdateHomeroomRequest,
        UpdateNameRequest, UpdatePasswordRequest, UpdatePhotoRequest,
    },
    teachers::requests::RegisterTeacherRequest,
};
use crate::services::TeacherService;

// 懒加载的全局 TeacherService 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

// HTTP处理程序
pub async fn profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.profile(&req).await
}

pub async fn register(
    req: HttpRequest,
    data: web::Json<RegisterTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.register(data.into_inner(), &req).await
}

pub async fn update_password(
    req: HttpRequest,
    data: web::Json<UpdatePasswordRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.update_password(data.into_inner(), &req).await
}

pub async fn reset_password(
    req: HttpRequest,
    data: web::Json<ResetPasswordRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.reset_password(data.into_inner(), &req).await
}

pub async fn update_address(
    req: HttpRequest,
    data: web::Json<UpdateAddressRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.update_address(data.into_inner(), &req).await
}

pub async fn update_photo(
    req: HttpRequest,
    data: web::Json<UpdatePhotoRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.update_photo(data.into_inner(), &req).await
}

pub async fn update_name(
    req: HttpRequest,
    data: web::Json<UpdateNameRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.update_name(data.into_inner(), &req).await
}

pub async fn update_homeroom(
    req: HttpRequest,
    data: web::Json<UpdateHomeroomRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.update_homeroom(data.into_inner(), &req).await
}

pub async fn update_email(
    req: HttpRequest,
    data: web::Json<UpdateEmailRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.update_email(data.into_inner(), &req).await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teacher")
            .service(
                web::resource("/login")
                    .wrap(middlewares::RateLimit::login())
                    .route(web::post().to(teacher_login)),
            )
            .service(
                web::resource("/resetPassword")
                    .wrap(middlewares::RateLimit::reset_password())
                    .route(web::post().to(reset_password)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .service(
                        web::resource("")
                            .wrap(middlewares::RequireRole::new(&AccountRole::Teacher))
                            .route(web::get().to(profile)),
                    )
                    .service(
                        web::resource("/updatePassword")
                            .wrap(middlewares::RequireRole::new(&AccountRole::Teacher))
                            .route(web::post().to(update_password)),
                    )
                    .service(
                        web::resource("/updatePhoto")
                            .wrap(middlewares::RequireRole::new_any(
                                AccountRole::teacher_or_admin(),
                            ))
                            .route(web::post().to(update_photo)),
                    )
                    .service(
                        web::resource("/updateEmail")
                            .wrap(middlewares::RequireRole::new_any(
                                AccountRole::teacher_or_admin(),
                            ))
                            .route(web::post().to(update_email)),
                    )
                    .service(
                        web::scope("")
                            .wrap(middlewares::RequireRole::new_any(AccountRole::admin_roles()))
                            .route("/register", web::post().to(register))
                            .route("/updateAddress", web::post().to(update_address))
                            .route("/updateName", web::post().to(update_name))
                            .route("/updateHomeroom", web::post().to(update_homeroom)),
                    ),
            ),
    );
}
