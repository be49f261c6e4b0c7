use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::service_detail::{
    CreateServiceDetailRequest, ServiceBasedDetail, UpdateServiceDetailRequest,
};
use crate::utils::errors::{conflict_error, not_found_error, AppResult};

/// Archivo de certificación subido junto al formulario de alta
///
/// El almacenamiento del fichero en sí lo hace un colaborador externo;
/// el almacén del catálogo solo registra el nombre.
#[derive(Debug, Clone)]
pub struct CertificationUpload {
    pub filename: String,
    pub content: Vec<u8>,
}

/// Almacén del catálogo de servicios
#[async_trait]
pub trait ServiceCatalogStore: Send + Sync {
    /// Persiste una entrada validada y devuelve el registro con su id
    async fn create(
        &self,
        request: CreateServiceDetailRequest,
        certification: Option<CertificationUpload>,
    ) -> AppResult<ServiceBasedDetail>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ServiceBasedDetail>>;

    async fn list(&self) -> AppResult<Vec<ServiceBasedDetail>>;

    async fn update(
        &self,
        id: Uuid,
        request: UpdateServiceDetailRequest,
    ) -> AppResult<ServiceBasedDetail>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub type DynServiceCatalogStore = Arc<dyn ServiceCatalogStore>;

/// Implementación en memoria del almacén del catálogo
///
/// Se usa en los tests y en el binario de demo.
pub struct InMemoryCatalogStore {
    entries: Arc<RwLock<HashMap<Uuid, ServiceBasedDetail>>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn service_name_exists(&self, service_name: &str) -> bool {
        let entries = self.entries.read().await;
        entries.values().any(|e| e.service_name == service_name)
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceCatalogStore for InMemoryCatalogStore {
    async fn create(
        &self,
        request: CreateServiceDetailRequest,
        certification: Option<CertificationUpload>,
    ) -> AppResult<ServiceBasedDetail> {
        // Verificar que el nombre del servicio no exista ya
        if self.service_name_exists(&request.service_name).await {
            return Err(conflict_error("Service", "name", &request.service_name));
        }

        if let Some(upload) = &certification {
            log::info!(
                "💾 Certificación '{}' recibida ({} bytes)",
                upload.filename,
                upload.content.len()
            );
        }

        let detail = ServiceBasedDetail {
            id: Uuid::new_v4(),
            service_name: request.service_name,
            service_type: request.service_type,
            average_turnaround_time: request.average_turnaround_time,
            certification_filename: certification.as_ref().map(|c| c.filename.clone()),
            has_certifications: certification.is_some(),
            created_at: Utc::now(),
        };

        let mut entries = self.entries.write().await;
        entries.insert(detail.id, detail.clone());
        Ok(detail)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ServiceBasedDetail>> {
        let entries = self.entries.read().await;
        Ok(entries.get(&id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<ServiceBasedDetail>> {
        let entries = self.entries.read().await;
        let mut details: Vec<ServiceBasedDetail> = entries.values().cloned().collect();
        details.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(details)
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateServiceDetailRequest,
    ) -> AppResult<ServiceBasedDetail> {
        let mut entries = self.entries.write().await;
        let detail = entries
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Service", &id.to_string()))?;

        if let Some(service_name) = request.service_name {
            detail.service_name = service_name;
        }
        if let Some(service_type) = request.service_type {
            detail.service_type = service_type;
        }
        if let Some(average_turnaround_time) = request.average_turnaround_time {
            detail.average_turnaround_time = average_turnaround_time;
        }

        Ok(detail.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        entries
            .remove(&id)
            .ok_or_else(|| not_found_error("Service", &id.to_string()))?;
        Ok(())
    }
}
