//! Business logic service layer

mod manager_service;
mod plugin_batch;
mod plugin_service;
mod profile_service;

pub use manager_service::ManagerService;
pub use plugin_batch::{run_plugin_batch, PluginBatchError, PluginBatchReport, PluginProgress};
pub use plugin_service::PluginService;
pub use profile_service::{ChromePaths, ChromeProfileService};
