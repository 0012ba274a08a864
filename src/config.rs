use crate::error::LoadError;
use config::{Config, ConfigError, Environment, File};
use log::{error, warn};
use serde::Deserialize;
use std::collections::HashMap;
use url::Url;

/// Name of the environment variable holding the CSV URL
pub const CSV_URL_VAR: &str = "SHEET_RECIPES_CSV_URL";

/// Where to find the published sheet
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SheetConfig {
    /// URL of the CSV export of the sheet
    #[serde(default)]
    pub csv_url: Option<String>,
    /// Request timeout in seconds
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl SheetConfig {
    /// Configuration pointing at a fixed URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            csv_url: Some(url.into()),
            timeout: None,
        }
    }

    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with SHEET_RECIPES_ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: SHEET_RECIPES_CSV_URL, SHEET_RECIPES_TIMEOUT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Validated URL of the CSV document
    pub fn resolve_url(&self) -> Result<Url, LoadError> {
        resolve_url(self.csv_url.as_deref())
    }
}

/// Load configuration from `config.toml` and the process environment
pub fn load_config() -> Result<SheetConfig, ConfigError> {
    load_config_from(None)
}

/// Same as [`load_config`], reading variables from `env` instead of the
/// process environment when it is given
pub fn load_config_from(env: Option<HashMap<String, String>>) -> Result<SheetConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("SHEET_RECIPES")
                .try_parsing(true)
                .source(env),
        )
        .build()?;

    settings.try_deserialize()
}

/// Turn the configured value into a usable URL.
///
/// A value of the form `SHEET_RECIPES_CSV_URL=https://...` (the variable
/// name pasted into its own value) is cleaned up with a warning.
pub fn resolve_url(raw: Option<&str>) -> Result<Url, LoadError> {
    let raw = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => {
            error!("[Recipes] {} is not defined", CSV_URL_VAR);
            return Err(LoadError::Configuration(format!(
                "{} is not defined. Check your environment or config.toml",
                CSV_URL_VAR
            )));
        }
    };

    let prefix = format!("{}=", CSV_URL_VAR);
    let cleaned = match raw.strip_prefix(prefix.as_str()) {
        Some(rest) => {
            warn!("[Recipes] The URL contained the variable name, cleaned it up");
            rest
        }
        None => raw,
    };

    Url::parse(cleaned).map_err(|e| {
        error!("[Recipes] Invalid URL: {} ({})", cleaned, e);
        LoadError::Configuration(format!(
            "Invalid URL for {}: \"{}\". Check your environment or config.toml",
            CSV_URL_VAR, cleaned
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_is_configuration_error() {
        let err = resolve_url(None).unwrap_err();
        assert!(matches!(err, LoadError::Configuration(_)));
        assert!(err.to_string().contains(CSV_URL_VAR));

        let err = resolve_url(Some("   ")).unwrap_err();
        assert!(matches!(err, LoadError::Configuration(_)));
    }

    #[test]
    fn test_variable_name_prefix_is_stripped() {
        let url = resolve_url(Some(
            "SHEET_RECIPES_CSV_URL=https://docs.google.com/spreadsheets/d/e/abc/pub?output=csv",
        ))
        .unwrap();
        assert_eq!(url.host_str(), Some("docs.google.com"));
        assert_eq!(url.query(), Some("output=csv"));
    }

    #[test]
    fn test_invalid_url_names_the_value() {
        let err = resolve_url(Some("not a url")).unwrap_err();
        assert!(matches!(err, LoadError::Configuration(_)));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_relative_url_is_rejected() {
        assert!(resolve_url(Some("/sheet.csv")).is_err());
    }

    #[test]
    fn test_load_config_from_explicit_env() {
        let mut env = HashMap::new();
        env.insert(
            "SHEET_RECIPES_CSV_URL".to_string(),
            "https://example.com/sheet.csv".to_string(),
        );
        env.insert("SHEET_RECIPES_TIMEOUT".to_string(), "5".to_string());

        let config = load_config_from(Some(env)).unwrap();
        assert_eq!(config.csv_url.as_deref(), Some("https://example.com/sheet.csv"));
        assert_eq!(config.timeout, Some(5));
        assert!(config.resolve_url().is_ok());
    }

    #[test]
    fn test_load_config_without_url() {
        let config = load_config_from(Some(HashMap::new())).unwrap();
        assert!(config.csv_url.is_none());
        assert!(matches!(
            config.resolve_url(),
            Err(LoadError::Configuration(_))
        ));
    }
}
