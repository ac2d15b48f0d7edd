//! Backend work requested by the update layer

/// One backend task to spawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the plugin batch for a (trimmed, non-empty) SID
    CreatePlugins { sid: String },

    /// Move the live Chrome profile into `PBMA <window>`
    RegisterWindow { window: u32 },

    /// Empty the Chrome data root
    InitializeChromeData,
}
