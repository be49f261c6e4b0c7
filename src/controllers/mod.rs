//! Controllers del portal
//!
//! Los handlers de envío de formularios: validan la entrada, delegan en el
//! colaborador correspondiente y deciden cómo devolver los errores.

pub mod auth_controller;
pub mod service_detail_controller;
