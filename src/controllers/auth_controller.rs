use crate::dto::auth_dto::LoginResponse;
use crate::models::auth::LoginCredentials;
use crate::services::auth_service::DynAuthenticationService;
use crate::state::RequestContext;
use crate::utils::errors::AppResult;
use crate::utils::validation::validate_form;

/// Controller del formulario de login
pub struct AuthController {
    auth: DynAuthenticationService,
}

impl AuthController {
    pub fn new(auth: DynAuthenticationService) -> Self {
        Self { auth }
    }

    /// Procesa el envío del formulario de login
    ///
    /// Los errores de validación se devuelven en la respuesta, nunca como
    /// `Err`; el caller decide cómo mostrarlos.
    pub async fn login(
        &self,
        context: &mut RequestContext,
        credentials: LoginCredentials,
    ) -> AppResult<LoginResponse> {
        context.push_breadcrumb("Login", "/login");

        if let Err(field_errors) = validate_form(&credentials) {
            return Ok(LoginResponse::validation_failure(field_errors));
        }

        let outcome = self.auth.authenticate(&credentials).await?;

        if outcome.result.successful {
            if let Some(user) = &outcome.user {
                context.set_current_user(user.clone());
            }
        } else {
            log::warn!("Login fallido para '{}'", credentials.username);
        }

        Ok(LoginResponse::from_outcome(outcome))
    }
}
