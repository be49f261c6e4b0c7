use std::collections::HashMap;

use serde::Serialize;

use crate::models::auth::{LoginOutcome, UserInfo};

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl LoginResponse {
    pub fn from_outcome(outcome: LoginOutcome) -> Self {
        Self {
            success: outcome.result.successful,
            user_info: outcome.user,
            redirect_url: outcome.result.redirect_url,
            message: outcome.result.error,
            field_errors: HashMap::new(),
        }
    }

    pub fn validation_failure(field_errors: HashMap<String, String>) -> Self {
        Self {
            success: false,
            user_info: None,
            redirect_url: None,
            message: Some("The provided data is invalid".to_string()),
            field_errors,
        }
    }
}
