//! Core service
//!
//! Builds the `pbma-manager-core` backend from the app config and hands it to the
//! task runner.

use std::sync::Arc;
use std::time::Duration;

use pbma_manager_core::remote::HttpConfigSource;
use pbma_manager_core::{
    ChromePaths, ChromeProfileService, CoreResult, ManagerBackend, ManagerService, PluginService,
};

use super::AppConfig;

/// TUI core service
pub struct CoreService {
    backend: Arc<dyn ManagerBackend>,
}

impl CoreService {
    /// Wire the native backend: HTTP config source, plugin writer, profile manager
    pub fn from_config(config: &AppConfig) -> CoreResult<Self> {
        // 1. Remote configuration
        let config_source = Arc::new(HttpConfigSource::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?);

        // 2. Plugin output
        let plugins = match &config.plugin_root {
            Some(root) => PluginService::new(root),
            None => PluginService::from_executable_dir()?,
        };

        // 3. Chrome profile paths
        let paths = ChromePaths::detect()?.with_overrides(
            config.chrome_user_data_dir.clone(),
            config.chrome_data_root.clone(),
        );
        log::info!(
            "chrome user data: {}, data root: {}, plugins: {}",
            paths.user_data_dir.display(),
            paths.data_root.display(),
            plugins.output_root().display()
        );

        let service = ManagerService::new(config_source, plugins, ChromeProfileService::new(paths));
        Ok(Self::with_backend(Arc::new(service)))
    }

    pub fn with_backend(backend: Arc<dyn ManagerBackend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> Arc<dyn ManagerBackend> {
        Arc::clone(&self.backend)
    }
}
