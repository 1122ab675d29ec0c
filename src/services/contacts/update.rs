use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ContactService, apply_update};
use crate::models::{
    ErrorCode,
    common::{
        PostalAddress, non_empty,
        requests::{UpdateAddressRequest, UpdateEmailRequest, UpdateNameRequest},
    },
    contacts::{
        entities::UpdateContact,
        requests::{UpdatePhoneRequest, UpdatePriorityRequest},
    },
};
use crate::services::{bad_request, require_fields};
use crate::utils::validate::{parse_int_field, validate_email};

#[derive(Debug, Clone, Copy)]
pub enum PhoneKind {
    Home,
    Work,
}

pub async fn update_name(
    service: &ContactService,
    req: UpdateNameRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("id", req.id.as_str()),
        ("firstname", req.firstname.as_str()),
        ("lastname", req.lastname.as_str()),
    ]) {
        return Ok(resp);
    }

    let update = UpdateContact {
        first_name: Some(req.firstname.trim().to_string()),
        middle_name: Some(non_empty(Some(req.middlename))),
        last_name: Some(req.lastname.trim().to_string()),
        ..Default::default()
    };
    let storage = service.get_storage(request);
    Ok(apply_update(&storage, req.id.trim(), update, "name updated").await)
}

pub async fn update_address(
    service: &ContactService,
    req: UpdateAddressRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("id", req.id.as_str()),
        ("address", req.address.as_str()),
        ("city", req.city.as_str()),
        ("province", req.province.as_str()),
        ("postal", req.postal.as_str()),
    ]) {
        return Ok(resp);
    }

    let update = UpdateContact {
        address: Some(PostalAddress::new(
            &req.province,
            &req.city,
            &req.address,
            &req.postal,
        )),
        ..Default::default()
    };
    let storage = service.get_storage(request);
    Ok(apply_update(&storage, req.id.trim(), update, "address updated").await)
}

pub async fn update_phone(
    service: &ContactService,
    kind: PhoneKind,
    req: UpdatePhoneRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("id", req.id.as_str()),
        ("newnumber", req.newnumber.as_str()),
    ]) {
        return Ok(resp);
    }

    let number = req.newnumber.trim().to_string();
    let (update, message) = match kind {
        PhoneKind::Home => (
            UpdateContact {
                home_phone: Some(number),
                ..Default::default()
            },
            "home phone updated",
        ),
        PhoneKind::Work => (
            UpdateContact {
                work_phone: Some(number),
                ..Default::default()
            },
            "work phone updated",
        ),
    };
    let storage = service.get_storage(request);
    Ok(apply_update(&storage, req.id.trim(), update, message).await)
}

pub async fn update_email(
    service: &ContactService,
    req: UpdateEmailRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[("id", req.id.as_str()), ("email", req.email.as_str())]) {
        return Ok(resp);
    }
    let email = req.email.trim().to_string();
    if let Err(msg) = validate_email(&email) {
        return Ok(bad_request(ErrorCode::EmailInvalid, msg));
    }

    let update = UpdateContact {
        email: Some(email),
        ..Default::default()
    };
    let storage = service.get_storage(request);
    Ok(apply_update(&storage, req.id.trim(), update, "email updated").await)
}

pub async fn update_priority(
    service: &ContactService,
    req: UpdatePriorityRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("id", req.id.as_str()),
        ("priority", req.priority.as_str()),
    ]) {
        return Ok(resp);
    }
    let Some(priority) = parse_int_field(&req.priority) else {
        return Ok(bad_request(
            ErrorCode::InvalidField,
            "priority must be a number",
        ));
    };

    let update = UpdateContact {
        priority: Some(priority),
        ..Default::default()
    };
    let storage = service.get_storage(request);
    Ok(apply_update(&storage, req.id.trim(), update, "priority updated").await)
}
