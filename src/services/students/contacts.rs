use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode, accounts::AccountRole, students::requests::StudentContactRequest,
};
use crate::services::{credentials::account_not_found, error_response, not_found, require_fields};

// 关联已有联系人
pub async fn add_contact(
    service: &StudentService,
    req: StudentContactRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("sid", req.sid.as_str()),
        ("contactId", req.contact_id.as_str()),
    ]) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);
    let sid = req.sid.trim();
    let contact_id = req.contact_id.trim();

    match storage.get_student(sid).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(account_not_found(AccountRole::Student)),
        Err(e) => return Ok(error_response("Failed to load student", e)),
    }
    match storage.get_contact(contact_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::ContactNotFound, "contact not found")),
        Err(e) => return Ok(error_response("Failed to load contact", e)),
    }

    match storage.link_contact(sid, contact_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("contact added"))),
        Ok(false) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ContactAlreadyLinked,
            "contact is already linked to this student",
        ))),
        Err(e) => Ok(error_response("Failed to link contact", e)),
    }
}

// 解除关联，联系人本身保留
pub async fn remove_contact(
    service: &StudentService,
    req: StudentContactRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("sid", req.sid.as_str()),
        ("contactId", req.contact_id.as_str()),
    ]) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);

    match storage
        .unlink_contact(req.sid.trim(), req.contact_id.trim())
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("contact removed"))),
        Ok(false) => Ok(not_found(
            ErrorCode::ContactNotFound,
            "contact is not linked to this student",
        )),
        Err(e) => Ok(error_response("Failed to unlink contact", e)),
    }
}
