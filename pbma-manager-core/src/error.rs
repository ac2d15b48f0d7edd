//! Unified error type definition

use std::fmt;
use std::io;

use serde::Serialize;
use thiserror::Error;

/// Wire text of a missing Chrome user data directory.
pub const USER_DATA_MISSING: &str = "User Data directory does not exist";

/// Wire text of a missing Chrome data root.
pub const CHROME_DATA_MISSING: &str = "Chrome directory does not exist";

/// Wire marker of a Windows sharing violation.
const SHARING_VIOLATION_MARKER: &str = "os error 32";

/// OS error codes meaning "file is locked / in use by another process".
#[cfg(windows)]
const BUSY_OS_CODES: &[i32] = &[32, 33];
#[cfg(not(windows))]
const BUSY_OS_CODES: &[i32] = &[16, 26];

/// Which on-disk resource was missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MissingResource {
    /// Chrome "User Data" directory (the live profile)
    UserData,
    /// Chrome data root (the directory emptied by initialization)
    ChromeData,
}

impl fmt::Display for MissingResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserData => f.write_str(USER_DATA_MISSING),
            Self::ChromeData => f.write_str(CHROME_DATA_MISSING),
        }
    }
}

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Another process holds a file we need (usually a running Chrome)
    #[error("Resource busy: {0}")]
    ResourceBusy(String),

    /// A required directory does not exist
    #[error("{0}")]
    NotFound(MissingResource),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// network error
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(String),

    /// Failure that carried no recognizable structure
    #[error("{0}")]
    Unknown(String),
}

impl CoreError {
    /// Classify a failure that only arrived as text.
    ///
    /// A sharing violation wins over every other marker, since the same message can
    /// mention the directory it failed on.
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains(SHARING_VIOLATION_MARKER) {
            Self::ResourceBusy(message)
        } else if message.contains(USER_DATA_MISSING) {
            Self::NotFound(MissingResource::UserData)
        } else if message.contains(CHROME_DATA_MISSING) {
            Self::NotFound(MissingResource::ChromeData)
        } else {
            Self::Unknown(message)
        }
    }

    /// Whether it is expected behavior (user input, environment state) rather than a defect.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ResourceBusy(_) | Self::NotFound(_) | Self::Validation(_)
        )
    }

    /// Log this error at the level [`is_expected`](Self::is_expected) picks.
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

impl From<io::Error> for CoreError {
    fn from(err: io::Error) -> Self {
        if err
            .raw_os_error()
            .is_some_and(|code| BUSY_OS_CODES.contains(&code))
        {
            Self::ResourceBusy(err.to_string())
        } else {
            Self::Io(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
