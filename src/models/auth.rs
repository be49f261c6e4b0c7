use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_required;

/// Credenciales enviadas en el formulario de login
///
/// Se construye una por intento de login y se descarta al volver
/// la llamada de autenticación.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginCredentials {
    #[validate(custom(function = "validate_required", message = "Username is required"))]
    pub username: String,

    #[validate(custom(function = "validate_required", message = "Password is required"))]
    pub password: String,

    #[serde(default)]
    pub remember_me: bool,
}

/// Información del usuario autenticado
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub roles: Vec<String>,
}

/// Resultado de un intento de login
///
/// Invariante: `error` solo está presente cuando `successful` es false,
/// y `redirect_url` solo cuando es true. Los constructores son la única
/// forma de crear un resultado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    pub successful: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

impl LoginResult {
    pub fn success(redirect_url: String) -> Self {
        Self {
            successful: true,
            error: None,
            redirect_url: Some(redirect_url),
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            successful: false,
            error: Some(error),
            redirect_url: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.successful
    }
}

/// Resultado de autenticación junto con el perfil del usuario
///
/// `user` solo está presente cuando el login fue exitoso.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub result: LoginResult,
    pub user: Option<UserInfo>,
}

impl LoginOutcome {
    pub fn success(user: UserInfo, redirect_url: String) -> Self {
        Self {
            result: LoginResult::success(redirect_url),
            user: Some(user),
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            result: LoginResult::failure(error),
            user: None,
        }
    }
}
