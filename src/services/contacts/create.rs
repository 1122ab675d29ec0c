use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ContactService;
use crate::models::{
    ApiResponse, ErrorCode,
    accounts::AccountRole,
    common::{PostalAddress, non_empty},
    contacts::{entities::NewContact, requests::CreateContactRequest},
};
use crate::services::{
    bad_request, credentials::account_not_found, error_response, require_fields,
};
use crate::utils::validate::{parse_int_field, validate_email};

pub async fn create_contact(
    service: &ContactService,
    req: CreateContactRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("sid", req.sid.as_str()),
        ("firstname", req.firstname.as_str()),
        ("lastname", req.lastname.as_str()),
        ("homephone", req.homephone.as_str()),
        ("email", req.email.as_str()),
        ("priority", req.priority.as_str()),
        ("relation", req.relation.as_str()),
    ]) {
        return Ok(resp);
    }

    let Some(priority) = parse_int_field(&req.priority) else {
        return Ok(bad_request(
            ErrorCode::InvalidField,
            "priority must be a number",
        ));
    };
    let email = req.email.trim().to_string();
    if let Err(msg) = validate_email(&email) {
        return Ok(bad_request(ErrorCode::EmailInvalid, msg));
    }

    let storage = service.get_storage(request);
    let sid = req.sid.trim();
    match storage.get_student(sid).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(account_not_found(AccountRole::Student)),
        Err(e) => return Ok(error_response("Failed to load student", e)),
    }

    let new_contact = NewContact {
        first_name: req.firstname.trim().to_string(),
        middle_name: non_empty(Some(req.middlename)),
        last_name: req.lastname.trim().to_string(),
        home_phone: req.homephone.trim().to_string(),
        work_phone: non_empty(Some(req.workphone)),
        email,
        address: PostalAddress::new(&req.province, &req.city, &req.address, &req.postal),
        relation: req.relation.trim().to_string(),
        priority,
    };

    match storage.create_student_contact(sid, new_contact).await {
        Ok(contact) => {
            info!("Contact {} created for student {}", contact.id, sid);
            Ok(HttpResponse::Created().json(ApiResponse::success(contact, "contact created")))
        }
        Err(e) => Ok(error_response("Failed to create contact", e)),
    }
}
