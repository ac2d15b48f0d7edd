//! Plugin batch workflow: one SID lookup, then one plugin per boot window

use std::fmt;

use crate::error::CoreError;
use crate::traits::ManagerBackend;

/// Progress of a running batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginProgress {
    /// The SID lookup returned `total` windows
    Started { total: u32 },
    /// Window `window` of `total` has its plugin
    WindowDone { window: u32, total: u32 },
}

/// Outcome of a completed batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginBatchReport {
    pub sid: String,
    pub boot_window_num: u32,
    /// Windows whose plugin was written, in creation order
    pub windows: Vec<u32>,
}

/// First failure of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginBatchError {
    /// Window being processed, `None` when the SID lookup itself failed
    pub window: Option<u32>,
    pub source: CoreError,
}

impl fmt::Display for PluginBatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.window {
            Some(window) => write!(f, "window {window}: {}", self.source),
            None => write!(f, "SID lookup: {}", self.source),
        }
    }
}

impl std::error::Error for PluginBatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Create the proxy plugin of every boot window of `sid`.
///
/// Windows are processed strictly one at a time, in ascending order from 1.
/// The first failing call stops the batch; windows after it are never attempted.
pub async fn run_plugin_batch<F>(
    backend: &dyn ManagerBackend,
    sid: &str,
    mut progress: F,
) -> Result<PluginBatchReport, PluginBatchError>
where
    F: FnMut(PluginProgress) + Send,
{
    let sid_config = backend
        .get_sid_data(sid)
        .await
        .map_err(|source| PluginBatchError {
            window: None,
            source,
        })?;
    let total = sid_config.boot_window_num;
    log::info!("SID {sid}: {total} boot windows");
    progress(PluginProgress::Started { total });

    let mut windows = Vec::new();
    for window in 1..=total {
        let fail = |source| PluginBatchError {
            window: Some(window),
            source,
        };

        let proxy = backend.get_window_data(sid, window).await.map_err(fail)?;
        backend
            .create_plugin(&proxy.to_plugin_request(window))
            .await
            .map_err(fail)?;

        windows.push(window);
        progress(PluginProgress::WindowDone { window, total });
    }

    Ok(PluginBatchReport {
        sid: sid.to_string(),
        boot_window_num: total,
        windows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{BackendCall, MockBackend};

    #[tokio::test]
    async fn calls_each_window_once_in_ascending_order() {
        let backend = MockBackend::with_boot_windows(3);
        let mut events = Vec::new();

        let report = run_plugin_batch(&backend, "sid-1", |p| events.push(p))
            .await
            .unwrap();

        assert_eq!(report.windows, vec![1, 2, 3]);
        assert_eq!(
            backend.calls(),
            vec![
                BackendCall::GetSidData("sid-1".into()),
                BackendCall::GetWindowData("sid-1".into(), 1),
                BackendCall::CreatePlugin(1),
                BackendCall::GetWindowData("sid-1".into(), 2),
                BackendCall::CreatePlugin(2),
                BackendCall::GetWindowData("sid-1".into(), 3),
                BackendCall::CreatePlugin(3),
            ]
        );
        assert_eq!(events.first(), Some(&PluginProgress::Started { total: 3 }));
        assert_eq!(
            events.last(),
            Some(&PluginProgress::WindowDone { window: 3, total: 3 })
        );
    }

    #[tokio::test]
    async fn zero_windows_is_an_empty_success() {
        let backend = MockBackend::with_boot_windows(0);
        let report = run_plugin_batch(&backend, "s", |_| {}).await.unwrap();
        assert!(report.windows.is_empty());
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn failure_stops_the_loop() {
        let backend = MockBackend::with_boot_windows(5);
        backend.fail_create_plugin_at(2, CoreError::Io("disk full".into()));

        let err = run_plugin_batch(&backend, "s", |_| {}).await.unwrap_err();

        assert_eq!(err.window, Some(2));
        assert_eq!(err.source, CoreError::Io("disk full".into()));
        let created: Vec<_> = backend
            .calls()
            .into_iter()
            .filter(|c| matches!(c, BackendCall::CreatePlugin(_)))
            .collect();
        assert_eq!(created, vec![BackendCall::CreatePlugin(1), BackendCall::CreatePlugin(2)]);
        assert!(!backend.calls().contains(&BackendCall::GetWindowData("s".into(), 3)));
    }

    #[tokio::test]
    async fn sid_lookup_failure_has_no_window() {
        let backend = MockBackend::with_boot_windows(2);
        backend.fail_sid_lookup(CoreError::Network("timeout".into()));

        let err = run_plugin_batch(&backend, "s", |_| {}).await.unwrap_err();

        assert_eq!(err.window, None);
        assert_eq!(backend.calls().len(), 1);
        assert!(err.to_string().starts_with("SID lookup"));
    }
}
