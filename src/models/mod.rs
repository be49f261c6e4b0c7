//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del portal: el formulario de
//! login y las entradas del catálogo de servicios.

pub mod auth;
pub mod service_detail;
