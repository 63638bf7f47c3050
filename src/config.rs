//! App Configuration
//!
//! Optional JSON config embedded in the host page:
//! `<script id="app-config" type="application/json">{ "pageSize": 500 }</script>`

use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the host page element carrying the config
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Page size for the bulk candidate/job lists (approximates "all")
    pub page_size: usize,
    /// How many ids the not-found view lists
    pub diagnostic_preview_limit: usize,
    pub log_level: log::LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: 1000,
            diagnostic_preview_limit: 10,
            log_level: log::LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the config element from the document, falling back to defaults.
    ///
    /// Runs before the logger is installed, so problems are reported
    /// alongside the config instead of being logged here.
    pub fn load() -> (Self, Option<ConfigError>) {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            _ => (Self::default(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_json(r#"{ "pageSize": 250 }"#).unwrap();
        assert_eq!(config.page_size, 250);
        assert_eq!(config.diagnostic_preview_limit, 10);
        assert_eq!(config.log_level, log::LevelFilter::Info);
    }

    #[test]
    fn test_log_level_from_config() {
        let config = AppConfig::from_json(r#"{ "logLevel": "debug" }"#).unwrap();
        assert_eq!(config.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{ pageSize: ").is_err());
    }
}
