use serde::Deserialize;

use crate::shared::storage;

/// Local storage key holding an optional TOML override
pub const CONFIG_STORAGE_KEY: &str = "app_config";

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Absolute backend origin; empty means "same host as the page"
    pub base_url: String,
    /// Backend port used when `base_url` is empty
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListConfig {
    pub per_page: u32,
    pub page_size_options: Vec<u32>,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[list]
per_page = 10
page_size_options = [10, 25, 50, 100]
"#;

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: 3000,
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            per_page: 10,
            page_size_options: vec![10, 25, 50, 100],
        }
    }
}

/// Parse a TOML configuration document; missing sections fall back to defaults
pub fn parse_config(text: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Load configuration
///
/// Search order:
/// 1. TOML override stored in local storage under [`CONFIG_STORAGE_KEY`]
/// 2. Falls back to the embedded default config
pub fn load_config() -> AppConfig {
    if let Some(text) = storage::get_item(CONFIG_STORAGE_KEY) {
        match parse_config(&text) {
            Ok(config) => {
                log::info!("Loaded config override from local storage");
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid config override: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.list.per_page, 10);
        assert_eq!(config.api.port, 3000);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config("[list]\nper_page = 25\n").unwrap();
        assert_eq!(config.list.per_page, 25);
        assert_eq!(config.list.page_size_options, vec![10, 25, 50, 100]);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        assert!(parse_config("[list]\nper_page = \"ten\"\n").is_err());
    }
}
