//! Utility functions

pub mod fs;
mod log_sanitizer;

pub use log_sanitizer::{mask_secret, truncate_for_log};
