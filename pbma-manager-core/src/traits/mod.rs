//! Backend abstraction trait definition

mod config_source;
mod manager_backend;

pub use config_source::ConfigSource;
pub use manager_backend::ManagerBackend;
