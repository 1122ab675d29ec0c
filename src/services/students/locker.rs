use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{StudentService, apply_update};
use crate::models::{
    ApiResponse, ErrorCode,
    students::{entities::UpdateStudent, requests::UpdateLockerRequest},
};
use crate::services::{error_response, not_found, require_fields};

pub async fn update_locker(
    service: &StudentService,
    req: UpdateLockerRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = require_fields(&[
        ("sid", req.sid.as_str()),
        ("lockerNumber", req.locker_number.as_str()),
    ]) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);
    let sid = req.sid.trim();

    let locker = match storage.get_locker_by_number(req.locker_number.trim()).await {
        Ok(Some(locker)) => locker,
        Ok(None) => return Ok(not_found(ErrorCode::LockerNotFound, "locker not found")),
        Err(e) => return Ok(error_response("Failed to load locker", e)),
    };

    // 同一储物柜只能属于一名学生
    match storage.get_student_by_locker(&locker.id).await {
        Ok(Some(owner)) if owner.sid != sid => {
            info!(
                "Locker {} already assigned to student {}",
                locker.locker_number, owner.sid
            );
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::LockerAlreadyAssigned,
                "locker is already assigned to another student",
            )));
        }
        Ok(_) => {}
        Err(e) => return Ok(error_response("Failed to check locker owner", e)),
    }

    let update = UpdateStudent {
        locker: Some(locker.id),
        ..Default::default()
    };
    Ok(apply_update(&storage, sid, update, "locker updated").await)
}
