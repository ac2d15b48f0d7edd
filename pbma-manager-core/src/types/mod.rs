//! Type definition module

mod config;
mod plugin;

pub use config::{SidConfig, WindowProxyConfig};
pub use plugin::{PluginBackground, PluginManifest, PluginRequest};
