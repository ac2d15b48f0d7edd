//! Proxy plugin writer

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::types::PluginRequest;

/// Plugin directories live under `<root>/amb/window_proxies/W<n>`.
const PLUGIN_SUBDIR: [&str; 2] = ["amb", "window_proxies"];

/// Writes one Chrome proxy extension per window
#[derive(Debug, Clone)]
pub struct PluginService {
    output_root: PathBuf,
}

impl PluginService {
    /// Write plugins under `output_root`
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    /// Write plugins next to the running executable
    pub fn from_executable_dir() -> CoreResult<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe
            .parent()
            .ok_or_else(|| CoreError::Io("Failed to get executable directory".to_string()))?;
        Ok(Self::new(dir))
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Directory holding the plugin of window `w_num`
    pub fn plugin_dir(&self, w_num: u32) -> PathBuf {
        PLUGIN_SUBDIR
            .iter()
            .fold(self.output_root.clone(), |path, part| path.join(part))
            .join(format!("W{w_num}"))
    }

    /// Write `manifest.json` and `background.js` for one window.
    ///
    /// Invalid requests are rejected before anything touches the disk.
    /// Existing files of the same window are overwritten.
    pub fn create_plugin(&self, request: &PluginRequest) -> CoreResult<PathBuf> {
        request.validate()?;

        let plugin_dir = self.plugin_dir(request.w_num);
        log::info!("Plugin directory: {}", plugin_dir.display());
        fs::create_dir_all(&plugin_dir)?;

        let manifest = serde_json::to_string_pretty(&request.manifest())?;
        fs::write(plugin_dir.join("manifest.json"), manifest)?;
        fs::write(plugin_dir.join("background.js"), request.background_script()?)?;

        log::debug!("Plugin written: {request:?}");
        Ok(plugin_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PluginManifest;

    fn request(w_num: u32) -> PluginRequest {
        PluginRequest {
            w_num,
            proxy_ip: "10.1.1.1".to_string(),
            proxy_port: "8000".to_string(),
            proxy_user: "user".to_string(),
            proxy_pass: "pass".to_string(),
        }
    }

    #[test]
    fn writes_manifest_and_script() {
        let root = tempfile::tempdir().unwrap();
        let service = PluginService::new(root.path());

        let dir = service.create_plugin(&request(3)).unwrap();

        assert_eq!(dir, root.path().join("amb").join("window_proxies").join("W3"));
        let manifest: PluginManifest =
            serde_json::from_str(&fs::read_to_string(dir.join("manifest.json")).unwrap()).unwrap();
        assert_eq!(manifest.name, "Proxy Plugin W3");
        assert_eq!(manifest.minimum_chrome_version, "22.0.0");
        let script = fs::read_to_string(dir.join("background.js")).unwrap();
        assert!(script.contains(r#"host: "10.1.1.1""#));
    }

    #[test]
    fn written_files_match_template() {
        let root = tempfile::tempdir().unwrap();
        let service = PluginService::new(root.path());

        let dir = service.create_plugin(&request(4)).unwrap();

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join("manifest.json")).unwrap()).unwrap();
        assert_eq!(
            manifest,
            serde_json::json!({
                "version": "1.0.0",
                "manifest_version": 2,
                "name": "Proxy Plugin W4",
                "permissions": [
                    "proxy",
                    "tabs",
                    "unlimitedStorage",
                    "storage",
                    "<all_urls>",
                    "webRequest",
                    "webRequestBlocking"
                ],
                "background": { "scripts": ["background.js"] },
                "minimum_chrome_version": "22.0.0"
            })
        );

        let expected_script = r#"var config = {
    mode: "fixed_servers",
    rules: {
        singleProxy: {
            scheme: "http",
            host: "10.1.1.1",
            port: parseInt("8000")
        },
        bypassList: ["foober.com"]
    }
};
chrome.proxy.settings.set({ value: config, scope: "regular" }, function() {});

function callbackFn(details) {
    return {
        authCredentials: {
            username: "user",
            password: "pass"
        }
    };
}
chrome.webRequest.onAuthRequired.addListener(
    callbackFn,
    { urls: ["<all_urls>"] },
    ["blocking"]
);
"#;
        assert_eq!(fs::read_to_string(dir.join("background.js")).unwrap(), expected_script);
    }

    #[test]
    fn rewrite_overwrites_previous_plugin() {
        let root = tempfile::tempdir().unwrap();
        let service = PluginService::new(root.path());
        service.create_plugin(&request(1)).unwrap();

        let mut updated = request(1);
        updated.proxy_ip = "10.9.9.9".to_string();
        let dir = service.create_plugin(&updated).unwrap();

        let script = fs::read_to_string(dir.join("background.js")).unwrap();
        assert!(script.contains("10.9.9.9"));
        assert!(!script.contains("10.1.1.1"));
    }

    #[test]
    fn empty_field_writes_nothing() {
        let root = tempfile::tempdir().unwrap();
        let service = PluginService::new(root.path());
        let mut req = request(2);
        req.proxy_pass.clear();

        let result = service.create_plugin(&req);

        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert!(!service.plugin_dir(2).exists());
    }
}
