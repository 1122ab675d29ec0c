use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, accounts::AccountRole};
use crate::services::{credentials::account_not_found, current_principal, error_response};

pub async fn get_profile(
    service: &TeacherService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = match current_principal(request) {
        Ok(principal) => principal,
        Err(resp) => return Ok(resp),
    };

    match service.get_storage(request).get_teacher(&principal.id).await {
        Ok(Some(teacher)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(teacher, "teacher profile")))
        }
        Ok(None) => Ok(account_not_found(AccountRole::Teacher)),
        Err(e) => Ok(error_response("Failed to load teacher", e)),
    }
}
