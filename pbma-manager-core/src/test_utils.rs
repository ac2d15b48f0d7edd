//! Test helpers
//!
//! Recording mocks for the backend contract and the config source.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::traits::{ConfigSource, ManagerBackend};
use crate::types::{PluginRequest, SidConfig, WindowProxyConfig};

fn proxy_for(sid: &str, window_number: u32) -> WindowProxyConfig {
    WindowProxyConfig {
        proxy_ip: format!("10.0.0.{window_number}"),
        proxy_port: "8080".to_string(),
        proxy_user: format!("user{window_number}"),
        proxy_pass: "secret".to_string(),
        sid: sid.to_string(),
        window_number: window_number.to_string(),
    }
}

// ===== MockBackend =====

/// One recorded backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    GetSidData(String),
    GetWindowData(String, u32),
    CreatePlugin(u32),
    RegisterWindow(u32),
    InitializeChromeData,
}

pub struct MockBackend {
    boot_window_num: u32,
    calls: Mutex<Vec<BackendCall>>,
    sid_error: Mutex<Option<CoreError>>,
    /// window -> error returned by `create_plugin`
    plugin_errors: Mutex<HashMap<u32, CoreError>>,
}

impl MockBackend {
    pub fn with_boot_windows(boot_window_num: u32) -> Self {
        Self {
            boot_window_num,
            calls: Mutex::new(Vec::new()),
            sid_error: Mutex::new(None),
            plugin_errors: Mutex::new(HashMap::new()),
        }
    }

    pub fn fail_sid_lookup(&self, err: CoreError) {
        *self.sid_error.lock().unwrap() = Some(err);
    }

    pub fn fail_create_plugin_at(&self, window: u32, err: CoreError) {
        self.plugin_errors.lock().unwrap().insert(window, err);
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: BackendCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ManagerBackend for MockBackend {
    async fn get_sid_data(&self, sid: &str) -> CoreResult<SidConfig> {
        self.record(BackendCall::GetSidData(sid.to_string()));
        if let Some(err) = self.sid_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(SidConfig {
            sid: sid.to_string(),
            boot_window_num: self.boot_window_num,
        })
    }

    async fn get_window_data(
        &self,
        sid: &str,
        window_number: u32,
    ) -> CoreResult<WindowProxyConfig> {
        self.record(BackendCall::GetWindowData(sid.to_string(), window_number));
        Ok(proxy_for(sid, window_number))
    }

    async fn create_plugin(&self, request: &PluginRequest) -> CoreResult<()> {
        self.record(BackendCall::CreatePlugin(request.w_num));
        match self.plugin_errors.lock().unwrap().get(&request.w_num) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn register_window(&self, window_number: u32) -> CoreResult<()> {
        self.record(BackendCall::RegisterWindow(window_number));
        Ok(())
    }

    async fn initialize_chrome_data(&self) -> CoreResult<()> {
        self.record(BackendCall::InitializeChromeData);
        Ok(())
    }
}

// ===== MockConfigSource =====

pub struct MockConfigSource {
    boot_window_num: u32,
    empty_password_at: Option<u32>,
}

impl MockConfigSource {
    pub fn new(boot_window_num: u32) -> Self {
        Self {
            boot_window_num,
            empty_password_at: None,
        }
    }

    /// Serve an incomplete proxy configuration for `window`
    pub fn with_empty_password_at(mut self, window: u32) -> Self {
        self.empty_password_at = Some(window);
        self
    }
}

#[async_trait]
impl ConfigSource for MockConfigSource {
    async fn sid_config(&self, sid: &str) -> CoreResult<SidConfig> {
        Ok(SidConfig {
            sid: sid.to_string(),
            boot_window_num: self.boot_window_num,
        })
    }

    async fn window_config(&self, sid: &str, window_number: u32) -> CoreResult<WindowProxyConfig> {
        let mut proxy = proxy_for(sid, window_number);
        if self.empty_password_at == Some(window_number) {
            proxy.proxy_pass.clear();
        }
        Ok(proxy)
    }
}
