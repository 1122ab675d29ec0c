pub mod create;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    common::requests::{
        AccountIdRequest, UpdateAddressRequest, UpdateEmailRequest, UpdateNameRequest,
    },
    contacts::{
        entities::UpdateContact,
        requests::{CreateContactRequest, UpdatePhoneRequest, UpdatePriorityRequest},
    },
};
use crate::storage::Storage;

use super::{error_response, not_found};

pub struct ContactService {
    storage: Option<Arc<dyn Storage>>,
}

impl ContactService {
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

    // 新建联系人并关联到学生
    pub async fn create(
        &self,
        req: CreateContactRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_contact(self, req, request).await
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

    pub async fn update_home_phone(
        &self,
        req: UpdatePhoneRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_phone(self, update::PhoneKind::Home, req, request).await
    }

    pub async fn update_work_phone(
        &self,
        req: UpdatePhoneRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_phone(self, update::PhoneKind::Work, req, request).await
    }

    pub async fn update_email(
        &self,
        req: UpdateEmailRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_email(self, req, request).await
    }

    pub async fn update_priority(
        &self,
        req: UpdatePriorityRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_priority(self, req, request).await
    }

    // 删除联系人及其所有学生关联
    pub async fn delete(
        &self,
        req: AccountIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if let Err(resp) = super::require_fields(&[("id", req.id.as_str())]) {
            return Ok(resp);
        }
        match self.get_storage(request).delete_contact(req.id.trim()).await {
            Ok(true) => {
                Ok(HttpResponse::Ok().json(ApiResponse::success_empty("contact deleted")))
            }
            Ok(false) => Ok(contact_not_found()),
            Err(e) => Ok(error_response("Failed to delete contact", e)),
        }
    }
}

fn contact_not_found() -> HttpResponse {
    not_found(ErrorCode::ContactNotFound, "contact not found")
}

/// 写入联系人更新并生成响应
async fn apply_update(
    storage: &Arc<dyn Storage>,
    id: &str,
    update: UpdateContact,
    message: &str,
) -> HttpResponse {
    match storage.update_contact(id, update).await {
        Ok(Some(contact)) => HttpResponse::Ok().json(ApiResponse::success(contact, message)),
        Ok(None) => contact_not_found(),
        Err(e) => error_response("Failed to update contact", e),
    }
}

#[cfg(test)]
mod tests;
