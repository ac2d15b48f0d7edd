//! Backend result messages

use pbma_manager_core::{CoreResult, PluginBatchError, PluginBatchReport, PluginProgress};

/// Completion (or progress) of a spawned backend task
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// Plugin batch progress
    PluginProgress(PluginProgress),

    /// Plugin batch finished
    PluginsFinished(Result<PluginBatchReport, PluginBatchError>),

    /// Window registration finished
    WindowRegistered { window: u32, result: CoreResult<()> },

    /// Chrome data initialization finished
    ChromeDataInitialized(CoreResult<()>),
}
