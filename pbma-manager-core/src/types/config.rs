//! Remote configuration payloads

use serde::{Deserialize, Serialize};

use super::PluginRequest;
use crate::utils::mask_secret;

/// Per-SID configuration returned by the config API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidConfig {
    /// Echo of the requested SID
    #[serde(default)]
    pub sid: String,
    /// Number of windows to create plugins for
    pub boot_window_num: u32,
}

/// Per-window proxy configuration returned by the config API
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowProxyConfig {
    pub proxy_ip: String,
    pub proxy_port: String,
    pub proxy_user: String,
    pub proxy_pass: String,
    #[serde(default)]
    pub sid: String,
    /// Window number as sent by the API (a string on the wire)
    #[serde(default)]
    pub window_number: String,
}

impl WindowProxyConfig {
    /// Build the plugin request for window `w_num` from this proxy configuration.
    pub fn to_plugin_request(&self, w_num: u32) -> PluginRequest {
        PluginRequest {
            w_num,
            proxy_ip: self.proxy_ip.clone(),
            proxy_port: self.proxy_port.clone(),
            proxy_user: self.proxy_user.clone(),
            proxy_pass: self.proxy_pass.clone(),
        }
    }
}

impl std::fmt::Debug for WindowProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowProxyConfig")
            .field("proxy_ip", &self.proxy_ip)
            .field("proxy_port", &self.proxy_port)
            .field("proxy_user", &self.proxy_user)
            .field("proxy_pass", &mask_secret(&self.proxy_pass))
            .field("sid", &self.sid)
            .field("window_number", &self.window_number)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sid_config_from_wire() {
        let cfg: SidConfig =
            serde_json::from_str(r#"{"sid":"abc","bootWindowNum":3}"#).unwrap();
        assert_eq!(cfg.boot_window_num, 3);
        assert_eq!(cfg.sid, "abc");

        // sid echo is optional
        let cfg: SidConfig = serde_json::from_str(r#"{"bootWindowNum":0}"#).unwrap();
        assert_eq!(cfg.boot_window_num, 0);
    }

    #[test]
    fn negative_boot_count_is_rejected() {
        assert!(serde_json::from_str::<SidConfig>(r#"{"bootWindowNum":-1}"#).is_err());
    }

    #[test]
    fn window_config_from_wire_and_to_request() {
        let cfg: WindowProxyConfig = serde_json::from_str(
            r#"{"proxyIp":"10.0.0.1","proxyPort":"8080","proxyUser":"u","proxyPass":"p","sid":"abc","windowNumber":"2"}"#,
        )
        .unwrap();
        let req = cfg.to_plugin_request(2);
        assert_eq!(req.w_num, 2);
        assert_eq!(req.proxy_ip, "10.0.0.1");
        assert_eq!(req.proxy_port, "8080");
        assert_eq!(req.proxy_pass, "p");
    }

    #[test]
    fn debug_masks_password() {
        let cfg = WindowProxyConfig {
            proxy_ip: "1.2.3.4".into(),
            proxy_port: "1".into(),
            proxy_user: "user".into(),
            proxy_pass: "hunter22".into(),
            sid: String::new(),
            window_number: String::new(),
        };
        assert!(!format!("{cfg:?}").contains("hunter22"));
    }
}
