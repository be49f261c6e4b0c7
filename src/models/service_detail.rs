use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_required;

/// Entrada del catálogo de servicios
///
/// Se crea al enviar el formulario de alta; el almacén asigna el `id`
/// y a partir de ahí el registro se identifica por él.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServiceBasedDetail {
    pub id: Uuid,

    #[validate(custom(function = "validate_required", message = "Service name is required"))]
    pub service_name: String,

    #[validate(custom(function = "validate_required", message = "Service type is required"))]
    pub service_type: String,

    #[validate(custom(function = "validate_required", message = "Average turnaround time is required"))]
    pub average_turnaround_time: String,

    pub certification_filename: Option<String>,
    pub has_certifications: bool,
    pub created_at: DateTime<Utc>,
}

// Request para registrar un servicio en el catálogo
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateServiceDetailRequest {
    #[validate(custom(function = "validate_required", message = "Service name is required"))]
    pub service_name: String,

    #[validate(custom(function = "validate_required", message = "Service type is required"))]
    pub service_type: String,

    #[validate(custom(function = "validate_required", message = "Average turnaround time is required"))]
    pub average_turnaround_time: String,
}

// Request para actualizar un servicio existente
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateServiceDetailRequest {
    #[validate(custom(function = "validate_required", message = "Service name is required"))]
    pub service_name: Option<String>,

    #[validate(custom(function = "validate_required", message = "Service type is required"))]
    pub service_type: Option<String>,

    #[validate(custom(function = "validate_required", message = "Average turnaround time is required"))]
    pub average_turnaround_time: Option<String>,
}
