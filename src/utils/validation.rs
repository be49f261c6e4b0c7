//! Utilidades de validación
//!
//! Este módulo contiene las funciones helper para validación de formularios.
//! Las reglas se declaran sobre los tipos con `validator`, pero la evaluación
//! es siempre una llamada explícita a `validate_form`, que devuelve los
//! errores como un mapa campo -> mensaje legible.

use std::collections::HashMap;

use validator::{Validate, ValidationError, ValidationErrors};

/// Validar que un campo requerido no esté vacío
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Aplanar los errores del validador a un mapa campo -> mensaje
///
/// Se conserva el primer error de cada campo; el resto se descarta porque
/// el formulario se vuelve a mostrar con un mensaje por campo.
pub fn field_error_map(errors: &ValidationErrors) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        if let Some(first) = field_errors.first() {
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));
            map.insert(field.to_string(), message);
        }
    }
    map
}

/// Validar un formulario completo
///
/// Sin efectos secundarios: la misma entrada produce siempre el mismo
/// resultado, y es seguro llamarla desde varios handlers a la vez.
pub fn validate_form<T: Validate>(form: &T) -> Result<(), HashMap<String, String>> {
    form.validate().map_err(|e| field_error_map(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::LoginCredentials;
    use crate::models::service_detail::CreateServiceDetailRequest;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("Repair").is_ok());
        assert!(validate_required("").is_err());
        assert!(validate_required("   ").is_err());
    }

    #[test]
    fn test_validate_required_code() {
        let error = validate_required("").unwrap_err();
        assert_eq!(error.code, "required");
    }

    #[test]
    fn test_login_field_errors() {
        let credentials = LoginCredentials {
            username: "".to_string(),
            password: "x".to_string(),
            remember_me: false,
        };

        let errors = validate_form(&credentials).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["username"], "Username is required");
    }

    #[test]
    fn test_login_both_fields_empty() {
        let credentials = LoginCredentials {
            username: "".to_string(),
            password: "".to_string(),
            remember_me: true,
        };

        let errors = validate_form(&credentials).unwrap_err();
        assert_eq!(errors["username"], "Username is required");
        assert_eq!(errors["password"], "Password is required");
    }

    #[test]
    fn test_service_detail_request_valid() {
        let request = CreateServiceDetailRequest {
            service_name: "Repair".to_string(),
            service_type: "Hardware".to_string(),
            average_turnaround_time: "2 days".to_string(),
        };

        assert!(validate_form(&request).is_ok());
    }

    #[test]
    fn test_service_detail_request_missing_fields() {
        let request = CreateServiceDetailRequest {
            service_name: "".to_string(),
            service_type: "Hardware".to_string(),
            average_turnaround_time: " ".to_string(),
        };

        let errors = validate_form(&request).unwrap_err();
        assert_eq!(errors["service_name"], "Service name is required");
        assert_eq!(
            errors["average_turnaround_time"],
            "Average turnaround time is required"
        );
        assert!(!errors.contains_key("service_type"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let credentials = LoginCredentials {
            username: "provider".to_string(),
            password: "".to_string(),
            remember_me: false,
        };

        let first = validate_form(&credentials).unwrap_err();
        let second = validate_form(&credentials).unwrap_err();
        assert_eq!(first, second);
    }
}
