use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::service_detail::ServiceBasedDetail;

// Response de entrada del catálogo
#[derive(Debug, Serialize)]
pub struct ServiceDetailResponse {
    pub id: Uuid,
    pub service_name: String,
    pub service_type: String,
    pub average_turnaround_time: String,
    pub certification_filename: Option<String>,
    pub has_certifications: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ServiceBasedDetail> for ServiceDetailResponse {
    fn from(detail: ServiceBasedDetail) -> Self {
        Self {
            id: detail.id,
            service_name: detail.service_name,
            service_type: detail.service_type,
            average_turnaround_time: detail.average_turnaround_time,
            certification_filename: detail.certification_filename,
            has_certifications: detail.has_certifications,
            created_at: detail.created_at,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            field_errors: HashMap::new(),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation_failure(field_errors: HashMap<String, String>) -> Self {
        Self {
            success: false,
            message: Some("The provided data is invalid".to_string()),
            data: None,
            field_errors,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
            field_errors: HashMap::new(),
        }
    }
}
