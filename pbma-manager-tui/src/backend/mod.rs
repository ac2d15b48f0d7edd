//! Backend layer
//!
//! Everything the UI needs from outside the terminal: the persisted
//! [`AppConfig`], the core backend built from it, and the tokio tasks that run
//! [`Effect`](crate::update::Effect)s against that backend.

mod config_service;
mod core_service;
mod tasks;

pub use config_service::{AppConfig, LocalConfigService, API_BASE_URL_ENV};
pub use core_service::CoreService;
pub use tasks::spawn_effect;
