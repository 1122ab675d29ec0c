use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AdminService;
use crate::models::{
    ApiResponse, ErrorCode,
    accounts::AccountRole,
    admins::{entities::NewAdmin, requests::CreateAdminRequest},
};
use crate::services::{
    bad_request, credentials::issue_temp_password, error_response,
    identifiers::allocate_identifier, require_fields,
};
use crate::utils::validate::validate_email;

pub async fn create_admin(
    service: &AdminService,
    req: CreateAdminRequest,
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

    let aid = match allocate_identifier(&storage).await {
        Ok(aid) => aid,
        Err(e) => return Ok(error_response("Failed to allocate admin id", e)),
    };

    let password_hash =
        match issue_temp_password(&mailer, &email, &first_name, AccountRole::Admin, &aid).await {
            Ok(hash) => hash,
            Err(e) => return Ok(error_response("Failed to issue temporary password", e)),
        };

    let new_admin = NewAdmin {
        aid,
        first_name,
        last_name: req.lastname.trim().to_string(),
        dob: req.dob.trim().to_string(),
        email,
        password_hash,
        temp_password: true,
    };

    match storage.create_admin(new_admin).await {
        Ok(admin) => {
            info!("Admin {} created", admin.aid);
            Ok(HttpResponse::Created().json(ApiResponse::success(admin, "admin created")))
        }
        Err(e) => Ok(error_response("Failed to create admin", e)),
    }
}
