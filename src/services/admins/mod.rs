pub mod create;
pub mod lockers;
pub mod profile;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::mail::Mailer;
use crate::models::{
    accounts::AccountRole,
    admins::requests::{CreateAdminRequest, CreateLockerRequest, UpdateLockerComboRequest},
    common::requests::{AccountIdRequest, ResetPasswordRequest, UpdatePasswordRequest},
};
use crate::storage::Storage;

use super::credentials;

pub struct AdminService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdminService {
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

    // 创建管理员
    pub async fn create(
        &self,
        req: CreateAdminRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_admin(self, req, request).await
    }

    pub async fn profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::get_profile(self, request).await
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
            AccountRole::Admin,
            req,
        )
        .await
    }

    // 储物柜管理
    pub async fn create_locker(
        &self,
        req: CreateLockerRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lockers::create_locker(self, req, request).await
    }

    pub async fn update_locker_combo(
        &self,
        req: UpdateLockerComboRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lockers::update_locker_combo(self, req, request).await
    }

    // 解除学生或教师账号的禁用
    pub async fn renable(
        &self,
        role: AccountRole,
        req: AccountIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        credentials::handle_renable(self.get_storage(request), role, req).await
    }
}

#[cfg(test)]
mod tests;
