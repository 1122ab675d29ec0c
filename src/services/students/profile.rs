use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse,
    accounts::AccountRole,
    students::responses::StudentProfileResponse,
};
use crate::services::{credentials::account_not_found, current_principal, error_response};

pub async fn get_profile(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = match current_principal(request) {
        Ok(principal) => principal,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let student = match storage.get_student(&principal.id).await {
        Ok(Some(student)) => student,
        Ok(None) => return Ok(account_not_found(AccountRole::Student)),
        Err(e) => return Ok(error_response("Failed to load student", e)),
    };

    let locker = match &student.locker {
        Some(locker_id) => match storage.get_locker(locker_id).await {
            Ok(locker) => locker,
            Err(e) => return Ok(error_response("Failed to load locker", e)),
        },
        None => None,
    };

    let contacts = match storage.list_student_contacts(&student.sid).await {
        Ok(contacts) => contacts,
        Err(e) => return Ok(error_response("Failed to load contacts", e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StudentProfileResponse {
            student,
            locker,
            contacts,
        },
        "student profile",
    )))
}
