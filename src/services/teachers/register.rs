use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode,
    accounts::AccountRole,
    common::non_empty,
    teachers::{entities::NewTeacher, requests::RegisterTeacherRequest},
};
use crate::services::{
    bad_request, credentials::issue_temp_password, error_response,
    identifiers::{allocate_identifier, allocate_school_email},
    require_fields,
};
use crate::utils::validate::validate_email;

pub async fn register_teacher(
    service: &TeacherService,
    req: RegisterTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("firstname", req.firstname.as_str()),
        ("lastname", req.lastname.as_str()),
        ("dob", req.dob.as_str()),
        ("email", req.email.as_str()),
    ]) {
        return Ok(resp);
    }

    let email = req.email.trim().to_string();
    if let Err(msg) = validate_email(&email) {
        return Ok(bad_request(ErrorCode::EmailInvalid, msg));
    }

    let storage = service.get_storage(request);
    let mailer = service.get_mailer(request);
    let first_name = req.firstname.trim().to_string();
    let last_name = req.lastname.trim().to_string();

    let tid = match allocate_identifier(&storage).await {
        Ok(tid) => tid,
        Err(e) => return Ok(error_response("Failed to allocate teacher id", e)),
    };
    let school_email = match allocate_school_email(
        &storage,
        &first_name,
        &last_name,
        &AppConfig::get().school.email_domain,
    )
    .await
    {
        Ok(school_email) => school_email,
        Err(e) => return Ok(error_response("Failed to allocate school email", e)),
    };

    // 邮件发送失败则不创建记录
    let password_hash =
        match issue_temp_password(&mailer, &email, &first_name, AccountRole::Teacher, &tid).await
        {
            Ok(hash) => hash,
            Err(e) => return Ok(error_response("Failed to issue temporary password", e)),
        };

    let new_teacher = NewTeacher {
        tid,
        first_name,
        middle_name: non_empty(Some(req.middlename)),
        last_name,
        dob: req.dob.trim().to_string(),
        email,
        school_email,
        password_hash,
    };

    match storage.create_teacher(new_teacher).await {
        Ok(teacher) => {
            info!("Teacher {} registered ({})", teacher.tid, teacher.school_email);
            Ok(HttpResponse::Created().json(ApiResponse::success(teacher, "teacher registered")))
        }
        Err(e) => Ok(error_response("Failed to register teacher", e)),
    }
}
