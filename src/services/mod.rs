//! Servicios del sistema
//!
//! Este módulo contiene los colaboradores externos del portal detrás de
//! traits: el servicio de autenticación y el almacén del catálogo. Las
//! implementaciones en memoria existen para los tests y el binario de demo.

pub mod auth_service;
pub mod catalog_service;
