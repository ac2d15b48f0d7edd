//! `ManagerBackend` implementation composed from the concrete services

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::traits::{ConfigSource, ManagerBackend};
use crate::types::{PluginRequest, SidConfig, WindowProxyConfig};

use super::{ChromeProfileService, PluginService};

/// Native backend - holds all dependencies
///
/// The platform layer creates it once and injects the config source it wants.
pub struct ManagerService {
    config_source: Arc<dyn ConfigSource>,
    plugins: Arc<PluginService>,
    profiles: Arc<ChromeProfileService>,
}

impl ManagerService {
    #[must_use]
    pub fn new(
        config_source: Arc<dyn ConfigSource>,
        plugins: PluginService,
        profiles: ChromeProfileService,
    ) -> Self {
        Self {
            config_source,
            plugins: Arc::new(plugins),
            profiles: Arc::new(profiles),
        }
    }

    pub fn plugins(&self) -> &PluginService {
        &self.plugins
    }

    pub fn profiles(&self) -> &ChromeProfileService {
        &self.profiles
    }
}

/// Run blocking filesystem work off the async executor.
async fn run_blocking<T, F>(f: F) -> CoreResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> CoreResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| CoreError::Unknown(format!("Background task failed: {e}")))?
}

#[async_trait]
impl ManagerBackend for ManagerService {
    async fn get_sid_data(&self, sid: &str) -> CoreResult<SidConfig> {
        self.config_source.sid_config(sid).await
    }

    async fn get_window_data(
        &self,
        sid: &str,
        window_number: u32,
    ) -> CoreResult<WindowProxyConfig> {
        self.config_source.window_config(sid, window_number).await
    }

    async fn create_plugin(&self, request: &PluginRequest) -> CoreResult<()> {
        let plugins = Arc::clone(&self.plugins);
        let request = request.clone();
        run_blocking(move || plugins.create_plugin(&request)).await?;
        Ok(())
    }

    async fn register_window(&self, window_number: u32) -> CoreResult<()> {
        let profiles = Arc::clone(&self.profiles);
        run_blocking(move || profiles.register_window(window_number)).await?;
        Ok(())
    }

    async fn initialize_chrome_data(&self) -> CoreResult<()> {
        let profiles = Arc::clone(&self.profiles);
        run_blocking(move || profiles.initialize_chrome_data()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MissingResource;
    use crate::services::{run_plugin_batch, ChromePaths};
    use crate::test_utils::MockConfigSource;

    fn service(root: &std::path::Path, config: MockConfigSource) -> ManagerService {
        let chrome = root.join("Chrome");
        ManagerService::new(
            Arc::new(config),
            PluginService::new(root.join("out")),
            ChromeProfileService::new(ChromePaths {
                user_data_dir: chrome.join("User Data"),
                data_root: chrome,
            }),
        )
    }

    #[tokio::test]
    async fn batch_writes_one_plugin_per_window() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = service(tmp.path(), MockConfigSource::new(2));

        let report = run_plugin_batch(&svc, "abc", |_| {}).await.unwrap();

        assert_eq!(report.boot_window_num, 2);
        for w in 1..=2 {
            let dir = svc.plugins().plugin_dir(w);
            assert!(dir.join("manifest.json").exists());
            assert!(dir.join("background.js").exists());
        }
        assert!(!svc.plugins().plugin_dir(3).exists());
    }

    #[tokio::test]
    async fn empty_proxy_field_fails_the_batch() {
        let tmp = tempfile::tempdir().unwrap();
        let config = MockConfigSource::new(3).with_empty_password_at(2);
        let svc = service(tmp.path(), config);

        let err = run_plugin_batch(&svc, "abc", |_| {}).await.unwrap_err();

        assert_eq!(err.window, Some(2));
        assert!(matches!(err.source, CoreError::Validation(_)));
        assert!(svc.plugins().plugin_dir(1).exists());
        assert!(!svc.plugins().plugin_dir(3).exists());
    }

    #[tokio::test]
    async fn register_and_initialize_report_missing_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = service(tmp.path(), MockConfigSource::new(0));

        assert_eq!(
            svc.register_window(1).await.unwrap_err(),
            CoreError::NotFound(MissingResource::UserData)
        );
        assert_eq!(
            svc.initialize_chrome_data().await.unwrap_err(),
            CoreError::NotFound(MissingResource::ChromeData)
        );
    }

    #[tokio::test]
    async fn register_moves_profile() {
        let tmp = tempfile::tempdir().unwrap();
        let svc = service(tmp.path(), MockConfigSource::new(0));
        let user_data = svc.profiles().paths().user_data_dir.clone();
        std::fs::create_dir_all(&user_data).unwrap();
        std::fs::write(user_data.join("Local State"), "{}").unwrap();

        svc.register_window(5).await.unwrap();

        assert!(svc.profiles().profile_dir(5).unwrap().join("Local State").exists());
        assert!(!user_data.exists());
    }
}
