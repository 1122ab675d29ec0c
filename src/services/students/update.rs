use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentService, apply_update};
use crate::models::{
    ApiResponse, ErrorCode,
    accounts::AccountRole,
    common::{
        PostalAddress, non_empty,
        requests::{
            AccountIdRequest, UpdateAddressRequest, UpdateEmailRequest, UpdateHomeroomRequest,
            UpdateNameRequest, UpdatePhotoRequest,
        },
    },
    students::{entities::UpdateStudent, requests::UpdateGradeLevelRequest},
};
use crate::services::{
    bad_request, credentials::account_not_found, current_principal, error_response, forbidden,
    require_fields,
};
use crate::utils::validate::{parse_grade_level, validate_email};

pub async fn update_name(
    service: &StudentService,
    req: UpdateNameRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("sid", req.id.as_str()),
        ("firstname", req.firstname.as_str()),
        ("lastname", req.lastname.as_str()),
    ]) {
        return Ok(resp);
    }

    let update = UpdateStudent {
        first_name: Some(req.firstname.trim().to_string()),
        // 未提供中间名时清空
        middle_name: Some(non_empty(Some(req.middlename))),
        last_name: Some(req.lastname.trim().to_string()),
        ..Default::default()
    };
    let storage = service.get_storage(request);
    Ok(apply_update(&storage, req.id.trim(), update, "name updated").await)
}

pub async fn update_grade_level(
    service: &StudentService,
    req: UpdateGradeLevelRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("sid", req.sid.as_str()),
        ("gradelevel", req.gradelevel.as_str()),
    ]) {
        return Ok(resp);
    }
    let Some(grade_level) = parse_grade_level(&req.gradelevel) else {
        return Ok(bad_request(
            ErrorCode::InvalidField,
            "gradelevel must be a number between 0 and 12",
        ));
    };

    let update = UpdateStudent {
        grade_level: Some(grade_level),
        ..Default::default()
    };
    let storage = service.get_storage(request);
    Ok(apply_update(&storage, req.sid.trim(), update, "grade level updated").await)
}

pub async fn update_homeroom(
    service: &StudentService,
    req: UpdateHomeroomRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("sid", req.id.as_str()),
        ("homeroom", req.homeroom.as_str()),
    ]) {
        return Ok(resp);
    }

    let update = UpdateStudent {
        homeroom: Some(req.homeroom.trim().to_string()),
        ..Default::default()
    };
    let storage = service.get_storage(request);
    Ok(apply_update(&storage, req.id.trim(), update, "homeroom updated").await)
}

pub async fn update_yog(
    service: &StudentService,
    req: AccountIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[("sid", req.id.as_str())]) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);
    let sid = req.id.trim();

    let student = match storage.get_student(sid).await {
        Ok(Some(student)) => student,
        Ok(None) => return Ok(account_not_found(AccountRole::Student)),
        Err(e) => return Ok(error_response("Failed to load student", e)),
    };

    let update = UpdateStudent {
        yog: Some(student.yog + 1),
        ..Default::default()
    };
    Ok(apply_update(&storage, sid, update, "year of graduation updated").await)
}

pub async fn update_address(
    service: &StudentService,
    req: UpdateAddressRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("sid", req.id.as_str()),
        ("address", req.address.as_str()),
        ("city", req.city.as_str()),
        ("province", req.province.as_str()),
        ("postal", req.postal.as_str()),
    ]) {
        return Ok(resp);
    }

    let update = UpdateStudent {
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

// 管理员或学生本人
pub async fn update_email(
    service: &StudentService,
    req: UpdateEmailRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = match current_principal(request) {
        Ok(principal) => principal,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = require_fields(&[("sid", req.id.as_str()), ("email", req.email.as_str())])
    {
        return Ok(resp);
    }
    let sid = req.id.trim();
    if !principal.can_manage(AccountRole::Student, sid) {
        return Ok(forbidden());
    }

    let email = req.email.trim().to_string();
    if let Err(msg) = validate_email(&email) {
        return Ok(bad_request(ErrorCode::EmailInvalid, msg));
    }

    let update = UpdateStudent {
        email: Some(email),
        ..Default::default()
    };
    let storage = service.get_storage(request);
    Ok(apply_update(&storage, sid, update, "email updated").await)
}

// 管理员或学生本人
pub async fn update_photo(
    service: &StudentService,
    req: UpdatePhotoRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = match current_principal(request) {
        Ok(principal) => principal,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = require_fields(&[("sid", req.id.as_str()), ("url", req.url.as_str())]) {
        return Ok(resp);
    }
    let sid = req.id.trim();
    if !principal.can_manage(AccountRole::Student, sid) {
        return Ok(forbidden());
    }

    let storage = service.get_storage(request);
    match storage
        .replace_photo(AccountRole::Student, sid, req.url.trim())
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(account_not_found(AccountRole::Student)),
        Err(e) => return Ok(error_response("Failed to store photo", e)),
    }

    match storage.get_student(sid).await {
        Ok(Some(student)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(student, "photo updated")))
        }
        Ok(None) => Ok(account_not_found(AccountRole::Student)),
        Err(e) => Ok(error_response("Failed to load student", e)),
    }
}
