use anyhow::Result;
use dotenvy::dotenv;
use tracing::{info, warn};

use service_portal::config::environment::EnvironmentConfig;
use service_portal::controllers::auth_controller::AuthController;
use service_portal::controllers::service_detail_controller::ServiceDetailController;
use service_portal::models::auth::LoginCredentials;
use service_portal::models::service_detail::CreateServiceDetailRequest;
use service_portal::services::auth_service::InMemoryAuthService;
use service_portal::services::catalog_service::CertificationUpload;
use service_portal::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🗂️ Business Services Portal - Form Models & Validation");
    info!("======================================================");

    let config = EnvironmentConfig::default();
    info!("🌍 Entorno: {}", config.environment);

    // Colaboradores en memoria para la demo
    let mut auth = InMemoryAuthService::new(&config);
    auth.register_user(
        "provider_demo",
        "demo123",
        "Demo Provider",
        "provider@example.com",
        vec!["provider".to_string()],
    )?;

    let state = AppState::in_memory(auth, config);
    let auth_controller = AuthController::new(state.auth.clone());
    let catalog_controller = ServiceDetailController::new(state.catalog.clone());

    // Envío con el username vacío: los errores vuelven por campo
    let mut context = state.request_context();
    let invalid = LoginCredentials {
        username: "".to_string(),
        password: "demo123".to_string(),
        remember_me: false,
    };
    let response = auth_controller.login(&mut context, invalid).await?;
    warn!("❌ Login inválido: {}", serde_json::to_string(&response)?);

    // Login correcto; el contexto es nuevo, nada se arrastra del anterior
    let mut context = state.request_context();
    let credentials = LoginCredentials {
        username: "provider_demo".to_string(),
        password: "demo123".to_string(),
        remember_me: true,
    };
    let response = auth_controller.login(&mut context, credentials).await?;
    info!("✅ Login: {}", serde_json::to_string(&response)?);

    // Alta de un servicio con su certificación
    let request = CreateServiceDetailRequest {
        service_name: "Laptop repair".to_string(),
        service_type: "Hardware".to_string(),
        average_turnaround_time: "2 days".to_string(),
    };
    let certification = CertificationUpload {
        filename: "iso-9001.pdf".to_string(),
        content: b"%PDF-1.4".to_vec(),
    };
    let response = catalog_controller
        .create(&mut context, request, Some(certification))
        .await?;
    info!("✅ Servicio registrado: {}", serde_json::to_string(&response)?);

    let services = catalog_controller.list(&mut context).await?;
    info!("📋 Servicios en catálogo: {}", services.len());
    info!(
        "🧭 Breadcrumbs del request: {}",
        serde_json::to_string(context.breadcrumbs.items())?
    );

    Ok(())
}
