//! Proxy plugin request and generated file contents

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::utils::mask_secret;

/// Chrome permissions the proxy extension needs.
const PERMISSIONS: [&str; 7] = [
    "proxy",
    "tabs",
    "unlimitedStorage",
    "storage",
    "<all_urls>",
    "webRequest",
    "webRequestBlocking",
];

/// Request to create the proxy plugin of one window
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRequest {
    /// Window number (1-based)
    pub w_num: u32,
    pub proxy_ip: String,
    pub proxy_port: String,
    pub proxy_user: String,
    pub proxy_pass: String,
}

impl PluginRequest {
    /// Reject requests with any empty proxy field.
    pub fn validate(&self) -> CoreResult<()> {
        let fields = [
            &self.proxy_ip,
            &self.proxy_port,
            &self.proxy_user,
            &self.proxy_pass,
        ];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(CoreError::Validation(
                "Invalid plugin data: Some fields are empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Directory name of this window's plugin (`W<n>`).
    pub fn dir_name(&self) -> String {
        format!("W{}", self.w_num)
    }

    /// `manifest.json` contents of this window's plugin.
    pub fn manifest(&self) -> PluginManifest {
        PluginManifest {
            version: "1.0.0".to_string(),
            manifest_version: 2,
            name: format!("Proxy Plugin W{}", self.w_num),
            permissions: PERMISSIONS.iter().map(ToString::to_string).collect(),
            background: PluginBackground {
                scripts: vec!["background.js".to_string()],
            },
            minimum_chrome_version: "22.0.0".to_string(),
        }
    }

    /// `background.js` contents: pin the proxy and answer its auth challenge.
    ///
    /// Every value is embedded as a JSON string literal, which is also a valid JS literal.
    pub fn background_script(&self) -> CoreResult<String> {
        let host = serde_json::to_string(&self.proxy_ip)?;
        let port = serde_json::to_string(&self.proxy_port)?;
        let user = serde_json::to_string(&self.proxy_user)?;
        let pass = serde_json::to_string(&self.proxy_pass)?;

        Ok(format!(
            r#"var config = {{
    mode: "fixed_servers",
    rules: {{
        singleProxy: {{
            scheme: "http",
            host: {host},
            port: parseInt({port})
        }},
        bypassList: ["foober.com"]
    }}
}};
chrome.proxy.settings.set({{ value: config, scope: "regular" }}, function() {{}});

function callbackFn(details) {{
    return {{
        authCredentials: {{
            username: {user},
            password: {pass}
        }}
    }};
}}
chrome.webRequest.onAuthRequired.addListener(
    callbackFn,
    {{ urls: ["<all_urls>"] }},
    ["blocking"]
);
"#
        ))
    }
}

impl std::fmt::Debug for PluginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRequest")
            .field("w_num", &self.w_num)
            .field("proxy_ip", &self.proxy_ip)
            .field("proxy_port", &self.proxy_port)
            .field("proxy_user", &self.proxy_user)
            .field("proxy_pass", &mask_secret(&self.proxy_pass))
            .finish()
    }
}

/// Chrome extension manifest (v2)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub version: String,
    pub manifest_version: u8,
    pub name: String,
    pub permissions: Vec<String>,
    pub background: PluginBackground,
    pub minimum_chrome_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginBackground {
    pub scripts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PluginRequest {
        PluginRequest {
            w_num: 7,
            proxy_ip: "192.168.0.10".to_string(),
            proxy_port: "3128".to_string(),
            proxy_user: "alice".to_string(),
            proxy_pass: "s\"ecret".to_string(),
        }
    }

    #[test]
    fn validate_rejects_any_empty_field() {
        assert!(request().validate().is_ok());

        let mut req = request();
        req.proxy_user.clear();
        assert!(matches!(req.validate(), Err(CoreError::Validation(_))));

        let mut req = request();
        req.proxy_port.clear();
        assert!(req.validate().is_err());
    }

    #[test]
    fn manifest_names_window() {
        let manifest = request().manifest();
        assert_eq!(manifest.name, "Proxy Plugin W7");
        assert_eq!(manifest.manifest_version, 2);
        assert_eq!(manifest.permissions.len(), 7);
        assert!(manifest.permissions.contains(&"webRequestBlocking".to_string()));
        assert_eq!(manifest.background.scripts, vec!["background.js"]);
    }

    #[test]
    fn background_script_escapes_values() {
        let script = request().background_script().unwrap();
        assert!(script.contains(r#"host: "192.168.0.10""#));
        assert!(script.contains(r#"port: parseInt("3128")"#));
        assert!(script.contains(r#"username: "alice""#));
        assert!(script.contains(r#"password: "s\"ecret""#));
        assert!(script.contains(r#"bypassList: ["foober.com"]"#));
    }
}
