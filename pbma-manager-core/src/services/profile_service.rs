//! Chrome profile management: window registration and data initialization

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult, MissingResource};
use crate::utils::fs::{clear_dir, copy_dir_recursive};

/// Location of the Chrome directories this tool manipulates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromePaths {
    /// Live Chrome profile directory ("User Data")
    pub user_data_dir: PathBuf,
    /// Directory emptied by initialization
    pub data_root: PathBuf,
}

impl ChromePaths {
    /// Resolve the platform default paths under the current user's home directory
    pub fn detect() -> CoreResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| CoreError::Io("Failed to get home directory".to_string()))?;
        Ok(Self::for_home(&home))
    }

    /// Platform default paths under `home`
    ///
    /// On Windows the data root is the `Google\Chrome` directory above `User Data`;
    /// elsewhere the user data directory is itself the data root.
    pub fn for_home(home: &Path) -> Self {
        if cfg!(target_os = "windows") {
            let data_root = home.join("AppData").join("Local").join("Google").join("Chrome");
            Self {
                user_data_dir: data_root.join("User Data"),
                data_root,
            }
        } else {
            let user_data_dir = if cfg!(target_os = "macos") {
                home.join("Library")
                    .join("Application Support")
                    .join("Google")
                    .join("Chrome")
            } else {
                home.join(".config").join("google-chrome")
            };
            Self {
                data_root: user_data_dir.clone(),
                user_data_dir,
            }
        }
    }

    /// Replace detected paths with configured ones
    #[must_use]
    pub fn with_overrides(mut self, user_data_dir: Option<PathBuf>, data_root: Option<PathBuf>) -> Self {
        if let Some(dir) = user_data_dir {
            self.user_data_dir = dir;
        }
        if let Some(dir) = data_root {
            self.data_root = dir;
        }
        self
    }
}

/// Moves and wipes Chrome profile directories
#[derive(Debug, Clone)]
pub struct ChromeProfileService {
    paths: ChromePaths,
}

impl ChromeProfileService {
    pub fn new(paths: ChromePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ChromePaths {
        &self.paths
    }

    /// Profile directory of window `window_number`: `PBMA <n>` beside "User Data"
    pub fn profile_dir(&self, window_number: u32) -> CoreResult<PathBuf> {
        let parent = self
            .paths
            .user_data_dir
            .parent()
            .ok_or_else(|| CoreError::Io("Failed to get parent directory".to_string()))?;
        Ok(parent.join(format!("PBMA {window_number}")))
    }

    /// Move the live profile into `PBMA <n>`.
    ///
    /// A previous `PBMA <n>` is replaced. The source is removed only after the copy
    /// completed, so a failed copy leaves the live profile untouched.
    pub fn register_window(&self, window_number: u32) -> CoreResult<PathBuf> {
        let user_data = &self.paths.user_data_dir;
        if !user_data.exists() {
            return Err(CoreError::NotFound(MissingResource::UserData));
        }

        let profile = self.profile_dir(window_number)?;
        if profile.exists() {
            log::info!("Replacing existing profile {}", profile.display());
            fs::remove_dir_all(&profile)?;
        }

        fs::create_dir_all(&profile)?;
        copy_dir_recursive(user_data, &profile)?;
        fs::remove_dir_all(user_data)?;

        log::info!(
            "Window {window_number} registered: {} -> {}",
            user_data.display(),
            profile.display()
        );
        Ok(profile)
    }

    /// Remove everything inside the Chrome data root, keeping the root itself.
    pub fn initialize_chrome_data(&self) -> CoreResult<usize> {
        let root = &self.paths.data_root;
        if !root.exists() {
            return Err(CoreError::NotFound(MissingResource::ChromeData));
        }

        let removed = clear_dir(root)?;
        log::info!("Chrome data initialized: {removed} entries removed from {}", root.display());
        Ok(removed)
    }
}
