use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TeacherService, apply_update};
use crate::models::{
    ApiResponse, ErrorCode,
    accounts::AccountRole,
    common::{
        PostalAddress, non_empty,
        requests::{
            UpdateAddressRequest, UpdateEmailRequest, UpdateHomeroomRequest, UpdateNameRequest,
            UpdatePhotoRequest,
        },
    },
    teachers::entities::UpdateTeacher,
};
use crate::services::{
    bad_request, credentials::account_not_found, current_principal, error_response, forbidden,
    require_fields,
};
use crate::utils::validate::validate_email;

pub async fn update_name(
    service: &TeacherService,
    req: UpdateNameRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("tid", req.id.as_str()),
        ("firstname", req.firstname.as_str()),
        ("lastname", req.lastname.as_str()),
    ]) {
        return Ok(resp);
    }

    let update = UpdateTeacher {
        first_name: Some(req.firstname.trim().to_string()),
        middle_name: Some(non_empty(Some(req.middlename))),
        last_name: Some(req.lastname.trim().to_string()),
        ..Default::default()
    };
    let storage = service.get_storage(request);
    Ok(apply_update(&storage, req.id.trim(), update, "name updated").await)
}

pub async fn update_address(
    service: &TeacherService,
    req: UpdateAddressRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("tid", req.id.as_str()),
        ("address", req.address.as_str()),
        ("city", req.city.as_str()),
        ("province", req.province.as_str()),
        ("postal", req.postal.as_str()),
    ]) {
        return Ok(resp);
    }

    let update = UpdateTeacher {
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

pub async fn update_homeroom(
    service: &TeacherService,
    req: UpdateHomeroomRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("tid", req.id.as_str()),
        ("homeroom", req.homeroom.as_str()),
    ]) {
        return Ok(resp);
    }

    let update = UpdateTeacher {
        homeroom: Some(req.homeroom.trim().to_string()),
        ..Default::default()
    };
    let storage = service.get_storage(request);
    Ok(apply_update(&storage, req.id.trim(), update, "homeroom updated").await)
}

// 管理员或教师本人
pub async fn update_email(
    service: &TeacherService,
    req: UpdateEmailRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = match current_principal(request) {
        Ok(principal) => principal,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = require_fields(&[("tid", req.id.as_str()), ("email", req.email.as_str())])
    {
        return Ok(resp);
    }
    let tid = req.id.trim();
    if !principal.can_manage(AccountRole::Teacher, tid) {
        return Ok(forbidden());
    }

    let email = req.email.trim().to_string();
    if let Err(msg) = validate_email(&email) {
        return Ok(bad_request(ErrorCode::EmailInvalid, msg));
    }

    let update = UpdateTeacher {
        email: Some(email),
        ..Default::default()
    };
    let storage = service.get_storage(request);
    Ok(apply_update(&storage, tid, update, "email updated").await)
}

// 管理员或教师本人
pub async fn update_photo(
    service: &TeacherService,
    req: UpdatePhotoRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = match current_principal(request) {
        Ok(principal) => principal,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = require_fields(&[("tid", req.id.as_str()), ("url", req.url.as_str())]) {
        return Ok(resp);
    }
    let tid = req.id.trim();
    if !principal.can_manage(AccountRole::Teacher, tid) {
        return Ok(forbidden());
    }

    let storage = service.get_storage(request);
    match storage
        .replace_photo(AccountRole::Teacher, tid, req.url.trim())
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(account_not_found(AccountRole::Teacher)),
        Err(e) => return Ok(error_response("Failed to store photo", e)),
    }

    match storage.get_teacher(tid).await {
        Ok(Some(teacher)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(teacher, "photo updated")))
        }
        Ok(None) => Ok(account_not_found(AccountRole::Teacher)),
        Err(e) => Ok(error_response("Failed to load teacher", e)),
    }
}
