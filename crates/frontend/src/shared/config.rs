//! Runtime configuration of the header.
//!
//! The host page may embed
//! `<script id="app-config" type="application/json">{...}</script>`;
//! every field is optional and falls back to [`AppConfig::default`].

use serde::Deserialize;
use web_sys::window;

const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub brand_name: String,
    pub logo_path: String,
    pub dark_stylesheet: String,
    pub light_stylesheet: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_name: "SigNoz".to_string(),
            logo_path: "/signoz.svg".to_string(),
            dark_stylesheet: "/css/antd.dark.min.css".to_string(),
            light_stylesheet: "/css/antd.min.css".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("Failed to parse app config: {}", e))
    }

    /// Read the embedded config element, or defaults when it is absent or broken.
    pub fn from_document() -> Self {
        let raw = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("{}; using defaults", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Logo URL with the running version appended as a cache buster.
    pub fn logo_url(&self, current_version: &str) -> String {
        format!("{}?currentVersion={}", self.logo_path, current_version)
    }
}
