pub mod admins;
pub mod auth;
pub mod students;
pub mod teachers;

pub use admins::configure_admin_routes;
pub use auth::configure_auth_routes;
pub use students::configure_student_routes;
pub use teachers::configure_teacher_routes;

use actix_web::web;

// 注册全部 API 路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_student_routes)
        .configure(configure_teacher_routes)
        .configure(configure_admin_routes);
}
