use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Datelike;
use tracing::info;

use super::StudentService;
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode,
    accounts::AccountRole,
    common::{PostalAddress, non_empty},
    students::{
        entities::{NewStudent, year_of_graduation},
        requests::EnrollStudentRequest,
    },
};
use crate::services::{
    bad_request, credentials::issue_temp_password, error_response,
    identifiers::{allocate_identifier, allocate_school_email},
    require_fields,
};
use crate::utils::validate::{parse_age, parse_grade_level, validate_email};

pub async fn enroll_student(
    service: &StudentService,
    req: EnrollStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("firstname", req.firstname.as_str()),
        ("lastname", req.lastname.as_str()),
        ("age", req.age.as_str()),
        ("gradelevel", req.gradelevel.as_str()),
        ("dob", req.dob.as_str()),
        ("email", req.email.as_str()),
    ]) {
        return Ok(resp);
    }

    let Some(age) = parse_age(&req.age) else {
        return Ok(bad_request(ErrorCode::InvalidField, "age must be a number"));
    };
    let Some(grade_level) = parse_grade_level(&req.gradelevel) else {
        return Ok(bad_request(
            ErrorCode::InvalidField,
            "gradelevel must be a number between 0 and 12",
        ));
    };
    let email = req.email.trim().to_string();
    if let Err(msg) = validate_email(&email) {
        return Ok(bad_request(ErrorCode::EmailInvalid, msg));
    }

    let storage = service.get_storage(request);
    let mailer = service.get_mailer(request);
    let first_name = req.firstname.trim().to_string();
    let last_name = req.lastname.trim().to_string();

    // 1. 分配学号与校内邮箱
    let sid = match allocate_identifier(&storage).await {
        Ok(sid) => sid,
        Err(e) => return Ok(error_response("Failed to allocate student id", e)),
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

    // 2. 发送临时密码，失败则不创建记录
    let password_hash =
        match issue_temp_password(&mailer, &email, &first_name, AccountRole::Student, &sid).await
        {
            Ok(hash) => hash,
            Err(e) => return Ok(error_response("Failed to issue temporary password", e)),
        };

    // 3. 写入学生记录
    let new_student = NewStudent {
        sid,
        first_name,
        middle_name: non_empty(Some(req.middlename)),
        last_name,
        age,
        dob: req.dob.trim().to_string(),
        email,
        address: PostalAddress::new(&req.province, &req.city, &req.address, &req.postal),
        grade_level,
        yog: year_of_graduation(grade_level, chrono::Utc::now().year()),
        school_email,
        password_hash,
    };

    match storage.create_student(new_student).await {
        Ok(student) => {
            info!("Student {} enrolled ({})", student.sid, student.school_email);
            Ok(HttpResponse::Created().json(ApiResponse::success(student, "student enrolled")))
        }
        Err(e) => Ok(error_response("Failed to enroll student", e)),
    }
}
