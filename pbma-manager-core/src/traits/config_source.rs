//! Remote configuration source Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{SidConfig, WindowProxyConfig};

/// Where SID and per-window proxy configuration comes from
///
/// Implementations:
/// - `HttpConfigSource`: the hosted config API (reqwest)
/// - test mocks
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Look up the configuration of a SID
    async fn sid_config(&self, sid: &str) -> CoreResult<SidConfig>;

    /// Look up the proxy configuration of one window of a SID
    ///
    /// # Arguments
    /// * `sid` - SID entered by the operator
    /// * `window_number` - 1-based window number
    async fn window_config(&self, sid: &str, window_number: u32) -> CoreResult<WindowProxyConfig>;
}
