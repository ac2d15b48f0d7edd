//! Config service
//!
//! `AppConfig` is a JSON file under the platform config directory. Every field has a
//! default, so a partial (or missing) file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pbma_manager_core::remote::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

use crate::model::WindowGrid;
use crate::view::theme::Theme;

/// Environment variable overriding [`AppConfig::api_base_url`]
pub const API_BASE_URL_ENV: &str = "PBMA_API_BASE_URL";

/// Application config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the hosted configuration API
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// UI language code (`ja-JP`, `en-US`)
    pub language: String,
    pub theme: Theme,
    /// Number of window registration buttons
    pub window_slots: u32,
    /// Where plugins are written; the executable's directory when unset
    pub plugin_root: Option<PathBuf>,
    /// Chrome `User Data` directory; detected when unset
    pub chrome_user_data_dir: Option<PathBuf>,
    /// Directory emptied by initialization; detected when unset
    pub chrome_data_root: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            language: "ja-JP".to_string(),
            theme: Theme::Dark,
            window_slots: WindowGrid::DEFAULT_SLOTS,
            plugin_root: None,
            chrome_user_data_dir: None,
            chrome_data_root: None,
        }
    }
}

impl AppConfig {
    /// Apply the value of [`API_BASE_URL_ENV`], if set and non-blank
    pub fn apply_env_override(&mut self, api_base_url: Option<String>) {
        if let Some(url) = api_base_url.filter(|url| !url.trim().is_empty()) {
            log::info!("API base URL overridden by {API_BASE_URL_ENV}: {url}");
            self.api_base_url = url.trim().to_string();
        }
    }
}

/// Config service trait
pub trait ConfigService: Send + Sync {
    /// Load the config, falling back to defaults
    fn load(&self) -> Result<AppConfig>;

    /// Persist the config
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// Config stored in a local JSON file
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/pbma-manager/config.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pbma-manager")
            .join("config.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config; on first run, write the defaults so there is a file to edit.
    ///
    /// Failing to write the file is logged and otherwise ignored.
    pub fn load_or_create(&self) -> Result<AppConfig> {
        let first_run = !self.path.exists();
        let config = self.load()?;
        if first_run {
            match self.save(&config) {
                Ok(()) => log::info!("wrote default config to {}", self.path.display()),
                Err(e) => log::warn!("could not write default config: {e:#}"),
            }
        }
        Ok(config)
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("no config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                // A broken file must not keep the UI from starting
                log::warn!("ignoring malformed config {}: {e}", self.path.display());
                Ok(AppConfig::default())
            }
        }
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
