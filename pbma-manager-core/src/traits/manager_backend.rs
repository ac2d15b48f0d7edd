//! The five-call backend contract the presentation layer relies on

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{PluginRequest, SidConfig, WindowProxyConfig};

/// Backend operations invoked by a front-end
///
/// Failures come back as tagged [`CoreError`](crate::CoreError) values;
/// callers decide what to show by matching variants, never by reading text.
#[async_trait]
pub trait ManagerBackend: Send + Sync {
    /// `get_sid_data`: boot window count of a SID
    async fn get_sid_data(&self, sid: &str) -> CoreResult<SidConfig>;

    /// `get_window_data`: proxy settings of one window
    async fn get_window_data(&self, sid: &str, window_number: u32)
        -> CoreResult<WindowProxyConfig>;

    /// `create_plugin`: write the proxy extension of one window
    async fn create_plugin(&self, request: &PluginRequest) -> CoreResult<()>;

    /// `register_window`: move the live Chrome profile into `PBMA <n>`
    async fn register_window(&self, window_number: u32) -> CoreResult<()>;

    /// `initialize_chrome_data`: empty the Chrome data root
    async fn initialize_chrome_data(&self) -> CoreResult<()>;
}
