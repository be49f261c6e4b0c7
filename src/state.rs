//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación (los
//! colaboradores y la configuración) y el contexto que se construye
//! nuevo para cada request.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::models::auth::UserInfo;
use crate::services::auth_service::{DynAuthenticationService, InMemoryAuthService};
use crate::services::catalog_service::{DynServiceCatalogStore, InMemoryCatalogStore};

/// Miga de pan de navegación
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    pub url: String,
}

/// Rastro de navegación del request actual
#[derive(Debug, Clone, Default, Serialize)]
pub struct BreadcrumbTrail {
    crumbs: Vec<Breadcrumb>,
}

impl BreadcrumbTrail {
    pub fn push(&mut self, label: &str, url: &str) {
        let crumb = Breadcrumb {
            label: label.to_string(),
            url: url.to_string(),
        };
        // No repetir la última miga al navegar dentro de la misma sección
        if self.crumbs.last() != Some(&crumb) {
            self.crumbs.push(crumb);
        }
    }

    pub fn items(&self) -> &[Breadcrumb] {
        &self.crumbs
    }

    pub fn clear(&mut self) {
        self.crumbs.clear();
    }
}

/// Contexto de un request
///
/// Se construye uno nuevo por request vía `AppState::request_context`,
/// de forma que el rastro de navegación y el usuario actual nunca se
/// compartan entre requests distintos.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: Uuid,
    pub breadcrumbs: BreadcrumbTrail,
    current_user: Option<UserInfo>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            breadcrumbs: BreadcrumbTrail::default(),
            current_user: None,
        }
    }

    pub fn push_breadcrumb(&mut self, label: &str, url: &str) {
        self.breadcrumbs.push(label, url);
    }

    pub fn set_current_user(&mut self, user: UserInfo) {
        self.current_user = Some(user);
    }

    pub fn current_user(&self) -> Option<&UserInfo> {
        self.current_user.as_ref()
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Estado compartido de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub auth: DynAuthenticationService,
    pub catalog: DynServiceCatalogStore,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(
        auth: DynAuthenticationService,
        catalog: DynServiceCatalogStore,
        config: EnvironmentConfig,
    ) -> Self {
        Self {
            auth,
            catalog,
            config,
        }
    }

    /// Estado con los colaboradores en memoria, para tests y demo
    pub fn in_memory(auth: InMemoryAuthService, config: EnvironmentConfig) -> Self {
        Self {
            auth: Arc::new(auth),
            catalog: Arc::new(InMemoryCatalogStore::new()),
            config,
        }
    }

    /// Construye el contexto de un request nuevo
    pub fn request_context(&self) -> RequestContext {
        RequestContext::new()
    }
}
