//! Hosted configuration API client

mod http_config_source;

pub use http_config_source::{HttpConfigSource, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
