pub mod accounts;
pub mod admins;
pub mod auth;
pub mod common;
pub mod contacts;
pub mod lockers;
pub mod photos;
pub mod students;
pub mod teachers;

pub use common::response::ApiResponse;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误代码
///
/// 0 表示成功；千位表示大类，与 HTTP 状态码大致对应。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 请求错误
    BadRequest = 1000,
    MissingFields = 1001,
    InvalidField = 1002,
    EmailInvalid = 1003,

    // 认证错误
    Unauthorized = 2000,
    AuthFailed = 2001,
    AccountDisabled = 2002,
    IncorrectPassword = 2003,
    PasswordMismatch = 2004,
    PasswordInvalid = 2005,
    PersonalEmailMismatch = 2006,

    // 权限错误
    Forbidden = 3000,

    // 资源不存在
    NotFound = 4000,
    StudentNotFound = 4001,
    TeacherNotFound = 4002,
    AdminNotFound = 4003,
    ContactNotFound = 4004,
    LockerNotFound = 4005,

    // 资源冲突
    Conflict = 4090,
    LockerAlreadyAssigned = 4091,
    LockerAlreadyExists = 4092,
    ContactAlreadyLinked = 4093,

    RateLimitExceeded = 4290,

    // 服务端错误
    InternalServerError = 5000,
    MailDeliveryFailed = 5001,
    RequestTimeout = 5040,
}
