//! PBMA Manager Core Library
//!
//! Provides the native side of PBMA Manager:
//! - Remote configuration lookup (SID -> boot window count, window -> proxy)
//! - Proxy plugin generation (Chrome extension per window)
//! - Chrome profile management (window registration, data initialization)
//! - The plugin batch workflow driving all of the above
//!
//! Front-ends talk to this crate exclusively through the [`ManagerBackend`] trait,
//! so the presentation layer never has to inspect error text.

pub mod error;
pub mod remote;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, MissingResource};
pub use services::{
    run_plugin_batch, ChromePaths, ChromeProfileService, ManagerService, PluginBatchError,
    PluginBatchReport, PluginProgress, PluginService,
};
pub use traits::{ConfigSource, ManagerBackend};
