//! Effect runner
//!
//! Each [`Effect`] runs as one tokio task. Its result, plus any plugin progress, is
//! sent back to the UI thread as an [`AppMessage`] over an unbounded channel.

use std::sync::Arc;

use pbma_manager_core::{run_plugin_batch, ManagerBackend};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, BackendMessage};
use crate::update::Effect;

/// Spawn `effect` on `handle`
pub fn spawn_effect(
    handle: &Handle,
    backend: Arc<dyn ManagerBackend>,
    tx: UnboundedSender<AppMessage>,
    effect: Effect,
) {
    log::debug!("spawning {effect:?}");
    handle.spawn(async move {
        let msg = run_effect(backend.as_ref(), &tx, effect).await;
        if tx.send(msg).is_err() {
            log::debug!("UI closed before the task finished");
        }
    });
}

/// Run one effect to completion, returning its result message
async fn run_effect(
    backend: &dyn ManagerBackend,
    tx: &UnboundedSender<AppMessage>,
    effect: Effect,
) -> AppMessage {
    let msg = match effect {
        Effect::CreatePlugins { sid } => {
            let progress_tx = tx.clone();
            let result = run_plugin_batch(backend, &sid, move |progress| {
                let _ = progress_tx.send(AppMessage::Backend(BackendMessage::PluginProgress(
                    progress,
                )));
            })
            .await;
            BackendMessage::PluginsFinished(result)
        }

        Effect::RegisterWindow { window } => BackendMessage::WindowRegistered {
            window,
            result: backend.register_window(window).await,
        },

        Effect::InitializeChromeData => {
            BackendMessage::ChromeDataInitialized(backend.initialize_chrome_data().await)
        }
    };
    AppMessage::Backend(msg)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use pbma_manager_core::types::{PluginRequest, SidConfig, WindowProxyConfig};
    use pbma_manager_core::{CoreError, CoreResult, MissingResource, PluginProgress};
    use tokio::sync::mpsc;

    use super::*;

    struct StubBackend {
        boot_window_num: u32,
    }

    #[async_trait]
    impl ManagerBackend for StubBackend {
        async fn get_sid_data(&self, sid: &str) -> CoreResult<SidConfig> {
            Ok(SidConfig {
                sid: sid.to_string(),
                boot_window_num: self.boot_window_num,
            })
        }

        async fn get_window_data(
            &self,
            sid: &str,
            window_number: u32,
        ) -> CoreResult<WindowProxyConfig> {
            Ok(WindowProxyConfig {
                proxy_ip: "10.0.0.1".to_string(),
                proxy_port: "8080".to_string(),
                proxy_user: "user".to_string(),
                proxy_pass: "pass".to_string(),
                sid: sid.to_string(),
                window_number: window_number.to_string(),
            })
        }

        async fn create_plugin(&self, _request: &PluginRequest) -> CoreResult<()> {
            Ok(())
        }

        async fn register_window(&self, _window_number: u32) -> CoreResult<()> {
            Err(CoreError::NotFound(MissingResource::UserData))
        }

        async fn initialize_chrome_data(&self) -> CoreResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn plugin_batch_reports_progress_then_result() {
        let backend = StubBackend { boot_window_num: 2 };
        let (tx, mut rx) = mpsc::unbounded_channel();

        let msg = run_effect(
            &backend,
            &tx,
            Effect::CreatePlugins {
                sid: "abc".to_string(),
            },
        )
        .await;

        let AppMessage::Backend(BackendMessage::PluginsFinished(Ok(report))) = msg else {
            panic!("unexpected message: {msg:?}");
        };
        assert_eq!(report.windows, vec![1, 2]);

        let mut progress = Vec::new();
        while let Ok(AppMessage::Backend(BackendMessage::PluginProgress(p))) = rx.try_recv() {
            progress.push(p);
        }
        assert_eq!(
            progress,
            vec![
                PluginProgress::Started { total: 2 },
                PluginProgress::WindowDone {
                    window: 1,
                    total: 2
                },
                PluginProgress::WindowDone {
                    window: 2,
                    total: 2
                },
            ]
        );
    }

    #[tokio::test]
    async fn registration_error_is_forwarded() {
        let backend = StubBackend { boot_window_num: 0 };
        let (tx, _rx) = mpsc::unbounded_channel();

        let msg = run_effect(&backend, &tx, Effect::RegisterWindow { window: 9 }).await;
        assert!(matches!(
            msg,
            AppMessage::Backend(BackendMessage::WindowRegistered {
                window: 9,
                result: Err(CoreError::NotFound(MissingResource::UserData)),
            })
        ));
    }
}
