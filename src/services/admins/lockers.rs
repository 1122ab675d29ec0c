use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AdminService;
use crate::errors::SchoolError;
use crate::models::{
    ApiResponse, ErrorCode,
    admins::requests::{CreateLockerRequest, UpdateLockerComboRequest},
};
use crate::services::{error_response, not_found, require_fields};

fn locker_exists() -> HttpResponse {
    HttpResponse::Conflict().json(ApiResponse::error_empty(
        ErrorCode::LockerAlreadyExists,
        "locker number already exists",
    ))
}

pub async fn create_locker(
    service: &AdminService,
    req: CreateLockerRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("lockernumber", req.lockernumber.as_str()),
        ("combo", req.combo.as_str()),
    ]) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);
    let locker_number = req.lockernumber.trim();

    match storage.get_locker_by_number(locker_number).await {
        Ok(Some(_)) => return Ok(locker_exists()),
        Ok(None) => {}
        Err(e) => return Ok(error_response("Failed to check locker", e)),
    }

    match storage.create_locker(locker_number, req.combo.trim()).await {
        Ok(locker) => {
            info!("Locker {} created", locker.locker_number);
            Ok(HttpResponse::Created().json(ApiResponse::success(locker, "locker created")))
        }
        // 并发创建同号储物柜
        Err(SchoolError::Conflict(_)) => Ok(locker_exists()),
        Err(e) => Ok(error_response("Failed to create locker", e)),
    }
}

pub async fn update_locker_combo(
    service: &AdminService,
    req: UpdateLockerComboRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("lockernumber", req.lockernumber.as_str()),
        ("newlockercombo", req.newlockercombo.as_str()),
    ]) {
        return Ok(resp);
    }

    match service
        .get_storage(request)
        .update_locker_combo(req.lockernumber.trim(), req.newlockercombo.trim())
        .await
    {
        Ok(Some(locker)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(locker, "locker combo updated")))
        }
        Ok(None) => Ok(not_found(ErrorCode::LockerNotFound, "locker not found")),
        Err(e) => Ok(error_response("Failed to update locker combo", e)),
    }
}
