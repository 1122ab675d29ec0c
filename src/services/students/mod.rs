pub mod contacts;
pub mod enroll;
pub mod locker;
pub mod profile;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::mail::Mailer;
use crate::models::{
    ApiResponse,
    accounts::AccountRole,
    common::requests::{
        AccountIdRequest, ResetPasswordRequest, UpdateAddressRequest, UpdateEmailRequest,
        UpdateHomeroomRequest, UpdateNameRequest, UpdatePasswordRequest, UpdatePhotoRequest,
    },
    students::{
        entities::UpdateStudent,
        requests::{
            EnrollStudentRequest, StudentContactRequest, UpdateGradeLevelRequest,
            UpdateLockerRequest,
        },
    },
};
use crate::storage::Storage;

use super::{credentials, error_response};

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    // 学生入学
    pub async fn enroll(
        &self,
        req: EnrollStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll_student(self, req, request).await
    }

    // 学生本人档案
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

    pub async fn update_grade_level(
        &self,
        req: UpdateGradeLevelRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_grade_level(self, req, request).await
    }

    pub async fn update_homeroom(
        &self,
        req: UpdateHomeroomRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_homeroom(self, req, request).await
    }

    // 留级：毕业年份 +1
    pub async fn update_yog(
        &self,
        req: AccountIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_yog(self, req, request).await
    }

    pub async fn update_address(
        &self,
        req: UpdateAddressRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_address(self, req, request).await
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

    // 分配储物柜
    pub async fn update_locker(
        &self,
        req: UpdateLockerRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        locker::update_locker(self, req, request).await
    }

    pub async fn add_contact(
        &self,
        req: StudentContactRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        contacts::add_contact(self, req, request).await
    }

    pub async fn remove_contact(
        &self,
        req: StudentContactRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        contacts::remove_contact(self, req, request).await
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
            AccountRole::Student,
            req,
        )
        .await
    }
}

/// 写入学生更新并生成响应
async fn apply_update(
    storage: &Arc<dyn Storage>,
    sid: &str,
    update: UpdateStudent,
    message: &str,
) -> HttpResponse {
    match storage.update_student(sid, update).await {
        Ok(Some(student)) => HttpResponse::Ok().json(ApiResponse::success(student, message)),
        Ok(None) => credentials::account_not_found(AccountRole::Student),
        Err(e) => error_response("Failed to update student", e),
    }
}

#[cfg(test)]
mod tests;
