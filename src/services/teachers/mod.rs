pub mod profile;
pub mod register;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::mail::Mailer;
use crate::models::{
    ApiResponse,
    accounts::AccountRole,
    common::requests::{
        ResetPasswordRequest, UpdateAddressRequest, UpdateEmailRequest, UpdateHomeroomRequest,
        UpdateNameRequest, UpdatePasswordRequest, UpdatePhotoRequest,
    },
    teachers::{entities::UpdateTeacher, requests::RegisterTeacherRequest},
};
use crate::storage::Storage;

use super::{credentials, error_response};

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            super::storage_from(request)
        }
    }

    pub(crate) fn get_mailer(&self, request: &HttpRequest) -> Arc<dyn Mailer> {
        super::mailer_from(request)
    }

    // 注册教师
    pub async fn register(
        &self,
        req: RegisterTeacherRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::register_teacher(self, req, request).await
    }

    pub async fn profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::get_profile(self, request).await
    }

    pub async fn update_name(
        &self,
        req: UpdateNameRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_name(self, req, request).await
    }

    pub async fn update_address(
        &self,
        req: UpdateAddressRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_address(self, req, request).await
    }

    pub async fn update_homeroom(
        &self,
        req: UpdateHomeroomRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_homeroom(self, req, request).await
    }

    pub async fn update_email(
        &self,
        req: UpdateEmailRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_email(self, req, request).await
    }

    pub async fn update_photo(
        &self,
        req: UpdatePhotoRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_photo(self, req, request).await
    }

    pub async fn update_password(
        &self,
        req: UpdatePasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        credentials::handle_update_password(self.get_storage(request), req, request).await
    }

    pub async fn reset_password(
        &self,
        req: ResetPasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        credentials::handle_reset_password(
            self.get_storage(request),
            self.get_mailer(request),
            AccountRole::Teacher,
            req,
        )
        .await
    }
}

/// 写入教师更新并生成响应
async fn apply_update(
    storage: &Arc<dyn Storage>,
    tid: &str,
    update: UpdateTeacher,
    message: &str,
) -> HttpResponse {
    match storage.update_teacher(tid, update).await {
        Ok(Some(teacher)) => HttpResponse::Ok().json(ApiResponse::success(teacher, message)),
        Ok(None) => credentials::account_not_found(AccountRole::Teacher),
        Err(e) => error_response("Failed to update teacher", e),
    }
}

#[cfg(test)]
mod tests;
