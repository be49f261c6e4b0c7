use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bcrypt::{hash, verify};

use crate::config::environment::EnvironmentConfig;
use crate::models::auth::{LoginCredentials, LoginOutcome, UserInfo};
use crate::utils::errors::AppResult;

/// Servicio de autenticación
///
/// El backend real es un colaborador externo; el portal solo conoce este
/// contrato: credenciales validadas -> resultado de login más el perfil
/// del usuario cuando el login fue exitoso.
#[async_trait]
pub trait AuthenticationService: Send + Sync {
    async fn authenticate(&self, credentials: &LoginCredentials) -> AppResult<LoginOutcome>;
}

pub type DynAuthenticationService = Arc<dyn AuthenticationService>;

/// Cuenta registrada en la tabla en memoria
#[derive(Debug, Clone)]
struct PortalUser {
    username: String,
    full_name: String,
    email: String,
    roles: Vec<String>,
    password_hash: String,
}

/// Implementación en memoria del servicio de autenticación
///
/// Verifica contraseñas con bcrypt contra una tabla de usuarios en memoria.
/// Se usa en los tests y en el binario de demo.
pub struct InMemoryAuthService {
    users: HashMap<String, PortalUser>,
    default_redirect_url: String,
    hash_cost: u32,
}

impl InMemoryAuthService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            users: HashMap::new(),
            default_redirect_url: config.default_redirect_url.clone(),
            hash_cost: config.password_hash_cost,
        }
    }

    /// Registra un usuario con su contraseña en claro
    pub fn register_user(
        &mut self,
        username: &str,
        password: &str,
        full_name: &str,
        email: &str,
        roles: Vec<String>,
    ) -> AppResult<()> {
        let user = PortalUser {
            username: username.to_string(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            roles,
            password_hash: hash(password, self.hash_cost)?,
        };
        self.users.insert(username.to_string(), user);
        Ok(())
    }
}

#[async_trait]
impl AuthenticationService for InMemoryAuthService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> AppResult<LoginOutcome> {
        if credentials.remember_me {
            // La duración de la sesión la gestiona el colaborador externo
            log::debug!("remember_me solicitado para '{}'", credentials.username);
        }

        if let Some(user) = self.users.get(&credentials.username) {
            if verify(&credentials.password, &user.password_hash)? {
                let user_info = UserInfo {
                    username: user.username.clone(),
                    full_name: user.full_name.clone(),
                    email: user.email.clone(),
                    roles: user.roles.clone(),
                };
                log::info!("✅ Login exitoso para '{}'", user.username);
                return Ok(LoginOutcome::success(
                    user_info,
                    self.default_redirect_url.clone(),
                ));
            }
            log::warn!("❌ Contraseña inválida para '{}'", credentials.username);
        } else {
            log::warn!("❌ Usuario no encontrado: '{}'", credentials.username);
        }

        Ok(LoginOutcome::failure(
            "Invalid username or password".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            default_redirect_url: "/dashboard".to_string(),
            password_hash_cost: 4,
        }
    }

    fn test_service() -> InMemoryAuthService {
        let mut service = InMemoryAuthService::new(&test_config());
        service
            .register_user(
                "provider_demo",
                "demo123",
                "Demo Provider",
                "provider@example.com",
                vec!["provider".to_string()],
            )
            .unwrap();
        service
    }

    #[tokio::test]
    async fn test_authentication_success() {
        let service = test_service();

        let credentials = LoginCredentials {
            username: "provider_demo".to_string(),
            password: "demo123".to_string(),
            remember_me: false,
        };

        let outcome = service.authenticate(&credentials).await.unwrap();
        assert!(outcome.result.successful);
        assert!(outcome.result.error.is_none());
        assert_eq!(outcome.result.redirect_url, Some("/dashboard".to_string()));

        let user = outcome.user.unwrap();
        assert_eq!(user.username, "provider_demo");
        assert_eq!(user.full_name, "Demo Provider");
        assert_eq!(user.roles, vec!["provider".to_string()]);
    }

    #[tokio::test]
    async fn test_invalid_password() {
        let service = test_service();

        let credentials = LoginCredentials {
            username: "provider_demo".to_string(),
            password: "wrong_password".to_string(),
            remember_me: false,
        };

        let outcome = service.authenticate(&credentials).await.unwrap();
        assert!(!outcome.result.successful);
        assert!(outcome.user.is_none());
        assert_eq!(
            outcome.result.error,
            Some("Invalid username or password".to_string())
        );
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let service = test_service();

        let credentials = LoginCredentials {
            username: "nobody".to_string(),
            password: "demo123".to_string(),
            remember_me: true,
        };

        let outcome = service.authenticate(&credentials).await.unwrap();
        assert!(!outcome.result.successful);
        assert!(outcome.user.is_none());
    }
}
