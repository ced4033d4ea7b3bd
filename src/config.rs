//! Client Configuration
//!
//! Read from an optional `window.DIARY_CONFIG` object set by the hosting page.

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Global the hosting page may define before the bundle loads
pub const CONFIG_GLOBAL: &str = "DIARY_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for API paths; empty means same origin
    pub api_base: String,
    /// Where 401 replies and logout navigate to
    pub login_path: String,
    /// `log` level filter name (error, warn, info, debug, trace, off)
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            login_path: "/login".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load from `window.DIARY_CONFIG`, falling back to defaults
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value::<ClientConfig>(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring malformed {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    pub fn entries_url(&self) -> String {
        format!("{}/entries", self.base())
    }

    pub fn entry_url(&self, id: u32) -> String {
        format!("{}/entries/{}", self.base(), id)
    }

    pub fn logout_url(&self) -> String {
        format!("{}/api/logout", self.base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls_are_same_origin() {
        let config = ClientConfig::default();
        assert_eq!(config.entries_url(), "/entries");
        assert_eq!(config.entry_url(12), "/entries/12");
        assert_eq!(config.logout_url(), "/api/logout");
        assert_eq!(config.login_path, "/login");
    }

    #[test]
    fn test_api_base_trailing_slash_ignored() {
        let config = ClientConfig {
            api_base: "https://diary.example/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.entry_url(3), "https://diary.example/entries/3");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"log_level": "debug"}"#).unwrap();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        assert_eq!(config.login_path, "/login");
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let config = ClientConfig { log_level: "loud".to_string(), ..Default::default() };
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
