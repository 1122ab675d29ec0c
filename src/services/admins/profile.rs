use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::models::{ApiResponse, accounts::AccountRole};
use crate::services::{credentials::account_not_found, current_principal, error_response};

pub async fn get_profile(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = match current_principal(request) {
        Ok(principal) => principal,
        Err(resp) => return Ok(resp),
    };

    match service.get_storage(request).get_admin(&principal.id).await {
        Ok(Some(admin)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(admin, "admin profile")))
        }
        Ok(None) => Ok(account_not_found(AccountRole::Admin)),
        Err(e) => Ok(error_response("Failed to load admin", e)),
    }
}
