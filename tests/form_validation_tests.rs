use chrono::Utc;
use uuid::Uuid;

use service_portal::models::auth::{LoginCredentials, LoginOutcome, LoginResult, UserInfo};
use service_portal::models::service_detail::{CreateServiceDetailRequest, ServiceBasedDetail};
use service_portal::utils::validation::validate_form;

#[test]
fn test_empty_username_fails_with_required_error() {
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
fn test_empty_password_fails_with_required_error() {
    let credentials = LoginCredentials {
        username: "provider_demo".to_string(),
        password: "".to_string(),
        remember_me: true,
    };

    let errors = validate_form(&credentials).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["password"], "Password is required");
}

#[test]
fn test_blank_fields_count_as_missing() {
    let credentials = LoginCredentials {
        username: "   ".to_string(),
        password: "\t".to_string(),
        remember_me: false,
    };

    let errors = validate_form(&credentials).unwrap_err();
    assert_eq!(errors["username"], "Username is required");
    assert_eq!(errors["password"], "Password is required");
}

#[test]
fn test_valid_credentials_pass() {
    let credentials = LoginCredentials {
        username: "provider_demo".to_string(),
        password: "demo123".to_string(),
        remember_me: false,
    };

    assert!(validate_form(&credentials).is_ok());
}

#[test]
fn test_service_detail_request_required_fields() {
    let request = CreateServiceDetailRequest {
        service_name: "".to_string(),
        service_type: "".to_string(),
        average_turnaround_time: "".to_string(),
    };

    let errors = validate_form(&request).unwrap_err();
    assert_eq!(errors["service_name"], "Service name is required");
    assert_eq!(errors["service_type"], "Service type is required");
    assert_eq!(
        errors["average_turnaround_time"],
        "Average turnaround time is required"
    );
}

#[test]
fn test_service_detail_request_example_passes() {
    let request = CreateServiceDetailRequest {
        service_name: "Repair".to_string(),
        service_type: "Hardware".to_string(),
        average_turnaround_time: "2 days".to_string(),
    };

    assert!(validate_form(&request).is_ok());
}

#[test]
fn test_populated_service_detail_revalidates_unchanged() {
    let detail = ServiceBasedDetail {
        id: Uuid::new_v4(),
        service_name: "Laptop repair".to_string(),
        service_type: "Hardware".to_string(),
        average_turnaround_time: "2 days".to_string(),
        certification_filename: Some("iso-9001.pdf".to_string()),
        has_certifications: true,
        created_at: Utc::now(),
    };

    let before = detail.clone();
    assert!(validate_form(&detail).is_ok());
    assert_eq!(detail.id, before.id);
    assert_eq!(detail.service_name, before.service_name);
    assert_eq!(detail.service_type, before.service_type);
    assert_eq!(detail.average_turnaround_time, before.average_turnaround_time);
    assert_eq!(detail.certification_filename, before.certification_filename);
    assert_eq!(detail.has_certifications, before.has_certifications);
}

#[test]
fn test_login_result_success_invariant() {
    let result = LoginResult::success("/dashboard".to_string());
    assert!(result.successful);
    assert!(result.is_success());
    assert!(result.error.is_none());
    assert_eq!(result.redirect_url, Some("/dashboard".to_string()));
}

#[test]
fn test_login_result_failure_invariant() {
    let result = LoginResult::failure("Invalid username or password".to_string());
    assert!(!result.successful);
    assert!(result.error.is_some());
    assert!(result.redirect_url.is_none());
}

#[test]
fn test_login_outcome_carries_user_only_on_success() {
    let user = UserInfo {
        username: "provider_demo".to_string(),
        full_name: "Demo Provider".to_string(),
        email: "provider@example.com".to_string(),
        roles: vec!["provider".to_string()],
    };

    let success = LoginOutcome::success(user, "/dashboard".to_string());
    assert!(success.result.successful);
    assert!(success.user.is_some());

    let failure = LoginOutcome::failure("Invalid username or password".to_string());
    assert!(!failure.result.successful);
    assert!(failure.user.is_none());
}

#[test]
fn test_failed_result_serializes_without_redirect_url() {
    let result = LoginResult::failure("Invalid username or password".to_string());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["successful"], false);
    assert_eq!(json["error"], "Invalid username or password");
    assert!(json.get("redirect_url").is_none());
}

#[test]
fn test_remember_me_defaults_to_false() {
    let credentials: LoginCredentials =
        serde_json::from_str(r#"{"username": "provider_demo", "password": "demo123"}"#).unwrap();

    assert!(!credentials.remember_me);
}
