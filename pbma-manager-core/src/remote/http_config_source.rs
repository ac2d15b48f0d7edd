//! `ConfigSource` backed by the hosted config API
//!
//! Endpoints:
//! - `GET {base}/config/{sid}` -> [`SidConfig`]
//! - `GET {base}/config/per-window/{sid}/{window}` -> [`WindowProxyConfig`]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{CoreError, CoreResult};
use crate::traits::ConfigSource;
use crate::types::{SidConfig, WindowProxyConfig};
use crate::utils::truncate_for_log;

/// Production config API
pub const DEFAULT_API_BASE_URL: &str = "https://dynoset-web-api.fly.dev/amb/api/v4";

/// Per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct HttpConfigSource {
    client: Client,
    base_url: String,
}

impl HttpConfigSource {
    /// Create a client for `base_url` (trailing slashes are ignored)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> CoreResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn sid_url(&self, sid: &str) -> String {
        format!("{}/config/{}", self.base_url, urlencoding::encode(sid))
    }

    pub fn window_url(&self, sid: &str, window_number: u32) -> String {
        format!(
            "{}/config/per-window/{}/{window_number}",
            self.base_url,
            urlencoding::encode(sid)
        )
    }

    /// GET `url` and decode its JSON body. A 404 becomes `Validation(not_found)`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, not_found: String) -> CoreResult<T> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CoreError::Network(format!("Failed to read response body: {e}")))?;
        log::debug!("Response {status}: {}", truncate_for_log(&body));

        decode_response(status, &body, not_found)
    }
}

fn transport_error(e: reqwest::Error) -> CoreError {
    if e.is_timeout() {
        CoreError::Network(format!("Request timed out: {e}"))
    } else {
        CoreError::Network(e.to_string())
    }
}

/// Map an API response to a typed payload or a tagged error.
fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    not_found: String,
) -> CoreResult<T> {
    if status == StatusCode::NOT_FOUND {
        return Err(CoreError::Validation(not_found));
    }
    if !status.is_success() {
        return Err(CoreError::Network(format!(
            "HTTP {}: {}",
            status.as_u16(),
            truncate_for_log(body)
        )));
    }
    serde_json::from_str(body).map_err(|e| {
        log::error!("JSON parse failed: {e}; raw response: {}", truncate_for_log(body));
        CoreError::Parse(e.to_string())
    })
}

#[async_trait]
impl ConfigSource for HttpConfigSource {
    async fn sid_config(&self, sid: &str) -> CoreResult<SidConfig> {
        self.get_json(&self.sid_url(sid), format!("Unknown SID: {sid}"))
            .await
    }

    async fn window_config(&self, sid: &str, window_number: u32) -> CoreResult<WindowProxyConfig> {
        self.get_json(
            &self.window_url(sid, window_number),
            format!("No proxy configuration for window {window_number} of SID {sid}"),
        )
        .await
    }
}
