use uuid::Uuid;

use crate::dto::service_detail_dto::{ApiResponse, ServiceDetailResponse};
use crate::models::service_detail::{CreateServiceDetailRequest, UpdateServiceDetailRequest};
use crate::services::catalog_service::{CertificationUpload, DynServiceCatalogStore};
use crate::state::RequestContext;
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::validation::validate_form;

/// Controller del catálogo de servicios
pub struct ServiceDetailController {
    store: DynServiceCatalogStore,
}

impl ServiceDetailController {
    pub fn new(store: DynServiceCatalogStore) -> Self {
        Self { store }
    }

    /// Procesa el alta de un servicio con su certificación opcional
    pub async fn create(
        &self,
        context: &mut RequestContext,
        request: CreateServiceDetailRequest,
        certification: Option<CertificationUpload>,
    ) -> AppResult<ApiResponse<ServiceDetailResponse>> {
        context.push_breadcrumb("Services", "/services");
        context.push_breadcrumb("New service", "/services/new");

        // Validar campos antes de llamar al almacén
        if let Err(field_errors) = validate_form(&request) {
            return Ok(ApiResponse::validation_failure(field_errors));
        }

        let detail = self.store.create(request, certification).await?;

        Ok(ApiResponse::success_with_message(
            detail.into(),
            "Service detail saved successfully".to_string(),
        ))
    }

    pub async fn get_by_id(
        &self,
        context: &mut RequestContext,
        id: Uuid,
    ) -> AppResult<ServiceDetailResponse> {
        context.push_breadcrumb("Services", "/services");

        let detail = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Service", &id.to_string()))?;

        Ok(detail.into())
    }

    pub async fn list(
        &self,
        context: &mut RequestContext,
    ) -> AppResult<Vec<ServiceDetailResponse>> {
        context.push_breadcrumb("Services", "/services");

        let details = self.store.list().await?;
        Ok(details.into_iter().map(ServiceDetailResponse::from).collect())
    }

    pub async fn update(
        &self,
        context: &mut RequestContext,
        id: Uuid,
        request: UpdateServiceDetailRequest,
    ) -> AppResult<ApiResponse<ServiceDetailResponse>> {
        context.push_breadcrumb("Services", "/services");
        context.push_breadcrumb("Edit service", "/services/edit");

        if let Err(field_errors) = validate_form(&request) {
            return Ok(ApiResponse::validation_failure(field_errors));
        }

        let detail = self.store.update(id, request).await?;

        Ok(ApiResponse::success_with_message(
            detail.into(),
            "Service detail updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, context: &mut RequestContext, id: Uuid) -> AppResult<()> {
        context.push_breadcrumb("Services", "/services");
        self.store.delete(id).await?;
        Ok(())
    }
}
