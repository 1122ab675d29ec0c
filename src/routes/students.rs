use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::auth::student_login;
use crate::middlewares;
use crate::models::{
    accounts::AccountRole,
    common::requests::{
        AccountIdRequest, ResetPasswordRequest, UpdateAddressRequest, UpdateEmailRequest,
        UpdateHomeroomRequest, UpdateNameRequest, UpdatePasswordRequest, UpdatePhotoRequest,
    },
    contacts::requests::{CreateContactRequest, UpdatePhoneRequest, UpdatePriorityRequest},
    students::requests::{
        EnrollStudentRequest, StudentContactRequest, UpdateGradeLevelRequest, UpdateLockerRequest,
    },
};
use crate::services::{ContactService, StudentService};

// 懒加载的全局服务实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);
static CONTACT_SERVICE: Lazy<ContactService> = Lazy::new(ContactService::new_lazy);

// HTTP处理程序
pub async fn profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.profile(&req).await
}

pub async fn enroll(
    req: HttpRequest,
    data: web::Json<EnrollStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.enroll(data.into_inner(), &req).await
}

pub async fn update_name(
    req: HttpRequest,
    data: web::Json<UpdateNameRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.update_name(data.into_inner(), &req).await
}

pub async fn update_grade_level(
    req: HttpRequest,
    data: web::Json<UpdateGradeLevelRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.update_grade_level(data.into_inner(), &req).await
}

pub async fn update_homeroom(
    req: HttpRequest,
    data: web::Json<UpdateHomeroomRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.update_homeroom(data.into_inner(), &req).await
}

pub async fn update_locker(
    req: HttpRequest,
    data: web::Json<UpdateLockerRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.update_locker(data.into_inner(), &req).await
}

pub async fn update_yog(
    req: HttpRequest,
    data: web::Json<AccountIdRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.update_yog(data.into_inner(), &req).await
}

pub async fn add_contact(
    req: HttpRequest,
    data: web::Json<StudentContactRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.add_contact(data.into_inner(), &req).await
}

pub async fn remove_contact(
    req: HttpRequest,
    data: web::Json<StudentContactRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.remove_contact(data.into_inner(), &req).await
}

pub async fn update_password(
    req: HttpRequest,
    data: web::Json<UpdatePasswordRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.update_password(data.into_inner(), &req).await
}

pub async fn reset_password(
    req: HttpRequest,
    data: web::Json<ResetPasswordRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.reset_password(data.into_inner(), &req).await
}

pub async fn update_address(
    req: HttpRequest,
    data: web::Json<UpdateAddressRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.update_address(data.into_inner(), &req).await
}

pub async fn update_photo(
    req: HttpRequest,
    data: web::Json<UpdatePhotoRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.update_photo(data.into_inner(), &req).await
}

pub async fn update_email(
    req: HttpRequest,
    data: web::Json<UpdateEmailRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.update_email(data.into_inner(), &req).await
}

// 联系人
pub async fn create_contact(
    req: HttpRequest,
    data: web::Json<CreateContactRequest>,
) -> ActixResult<HttpResponse> {
    CONTACT_SERVICE.create(data.into_inner(), &req).await
}

pub async fn contact_update_name(
    req: HttpRequest,
    data: web::Json<UpdateNameRequest>,
) -> ActixResult<HttpResponse> {
    CONTACT_SERVICE.update_name(data.into_inner(), &req).await
}

pub async fn contact_update_address(
    req: HttpRequest,
    data: web::Json<UpdateAddressRequest>,
) -> ActixResult<HttpResponse> {
    CONTACT_SERVICE.update_address(data.into_inner(), &req).await
}

pub async fn contact_update_home_phone(
    req: HttpRequest,
    data: web::Json<UpdatePhoneRequest>,
) -> ActixResult<HttpResponse> {
    CONTACT_SERVICE.update_home_phone(data.into_inner(), &req).await
}

pub async fn contact_update_work_phone(
    req: HttpRequest,
    data: web::Json<UpdatePhoneRequest>,
) -> ActixResult<HttpResponse> {
    CONTACT_SERVICE.update_work_phone(data.into_inner(), &req).await
}

pub async fn contact_update_email(
    req: HttpRequest,
    data: web::Json<UpdateEmailRequest>,
) -> ActixResult<HttpResponse> {
    CONTACT_SERVICE.update_email(data.into_inner(), &req).await
}

pub async fn contact_update_priority(
    req: HttpRequest,
    data: web::Json<UpdatePriorityRequest>,
) -> ActixResult<HttpResponse> {
    CONTACT_SERVICE.update_priority(data.into_inner(), &req).await
}

pub async fn contact_delete(
    req: HttpRequest,
    data: web::Json<AccountIdRequest>,
) -> ActixResult<HttpResponse> {
    CONTACT_SERVICE.delete(data.into_inner(), &req).await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/student")
            // 公开端点，按 IP 限流
            .service(
                web::resource("/login")
                    .wrap(middlewares::RateLimit::login())
                    .route(web::post().to(student_login)),
            )
            .service(
                web::resource("/resetPassword")
                    .wrap(middlewares::RateLimit::reset_password())
                    .route(web::post().to(reset_password)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    // 学生本人
                    .service(
                        web::resource("")
                            .wrap(middlewares::RequireRole::new(&AccountRole::Student))
                            .route(web::get().to(profile)),
                    )
                    .service(
                        web::resource("/updatePassword")
                            .wrap(middlewares::RequireRole::new(&AccountRole::Student))
                            .route(web::post().to(update_password)),
                    )
                    // 管理员或学生本人
                    .service(
                        web::resource("/updatePhoto")
                            .wrap(middlewares::RequireRole::new_any(
                                AccountRole::student_or_admin(),
                            ))
                            .route(web::post().to(update_photo)),
                    )
                    .service(
                        web::resource("/updateEmail")
                            .wrap(middlewares::RequireRole::new_any(
                                AccountRole::student_or_admin(),
                            ))
                            .route(web::post().to(update_email)),
                    )
                    // 仅管理员
                    .service(
                        web::scope("")
                            .wrap(middlewares::RequireRole::new_any(AccountRole::admin_roles()))
                            .route("/enroll", web::post().to(enroll))
                            .route("/updateName", web::post().to(update_name))
                            .route("/updateGradeLevel", web::post().to(update_grade_level))
                            .route("/updateHomeroom", web::post().to(update_homeroom))
                            .route("/updateLocker", web::post().to(update_locker))
                            .route("/updateYOG", web::post().to(update_yog))
                            .route("/addContact", web::post().to(add_contact))
                            .route("/removeContact", web::post().to(remove_contact))
                            .route("/updateAddress", web::post().to(update_address))
                            .route("/createContact", web::post().to(create_contact))
                            .route("/contact/updateName", web::post().to(contact_update_name))
                            .route(
                                "/contact/updateAddress",
                                web::post().to(contact_update_address),
                            )
                            .route(
                                "/contact/updateHomePhone",
                                web::post().to(contact_update_home_phone),
                            )
                            .route(
                                "/contact/updateWorkPhone",
                                web::post().to(contact_update_work_phone),
                            )
                            .route("/contact/updateEmail", web::post().to(contact_update_email))
                            .route(
                                "/contact/updatePriority",
                                web::post().to(contact_update_priority),
                            )
                            .route("/contact/deleteContact", web::post().to(contact_delete)),
                    ),
            ),
    );
}
