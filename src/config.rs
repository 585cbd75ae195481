//! Configuration management for model-registry
//!
//! Provider settings come from an optional TOML file and the process
//! environment. Non-empty environment values win over file values; a missing base URL
//! falls back to [`DEFAULT_BASE_URL`].

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Environment variable holding the provider API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable holding the provider base URL
pub const BASE_URL_ENV: &str = "OPENAI_API_BASE";

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "https://apigem.psy-tech.link/hf/v1";

const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Root configuration structure (file representation)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Provider section of the config file
///
/// Every field is optional in the file. The `api_key` and `base_url` values
/// are overridden by [`API_KEY_ENV`] and [`BASE_URL_ENV`] when those are set
/// to non-empty values.
#[derive(Clone, Deserialize, Serialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .finish()
    }
}

fn default_request_timeout() -> u64 {
    60
}

/// Observability configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Resolve the base URL for outbound API calls
///
/// A present, non-empty value is returned verbatim. Otherwise a warning is
/// logged and [`DEFAULT_BASE_URL`] is returned.
pub fn resolve_base_url(value: Option<String>) -> String {
    match value {
        Some(url) if !url.is_empty() => url,
        _ => {
            tracing::warn!(
                default_url = DEFAULT_BASE_URL,
                "No base URL found for OpenAI, using default URL"
            );
            DEFAULT_BASE_URL.to_string()
        }
    }
}

/// Resolved provider configuration shared by every model client
///
/// The base URL is always present. The API key is passed through unchecked,
/// so an empty or missing key only surfaces when a request is made.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    api_key: Option<String>,
    base_url: String,
    request_timeout_seconds: u64,
}

impl ProviderConfig {
    /// Create a provider configuration with the default request timeout
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            request_timeout_seconds: default_request_timeout(),
        }
    }

    /// Read [`API_KEY_ENV`] and [`BASE_URL_ENV`] from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the provider configuration through an arbitrary variable lookup
    ///
    /// # Examples
    ///
    /// ```
    /// use model_registry::config::{DEFAULT_BASE_URL, ProviderConfig};
    ///
    /// let provider = ProviderConfig::from_lookup(|_| None);
    /// assert_eq!(provider.base_url(), DEFAULT_BASE_URL);
    /// assert_eq!(provider.api_key(), None);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(lookup(API_KEY_ENV), resolve_base_url(lookup(BASE_URL_ENV)))
    }

    /// Override the request timeout
    ///
    /// # Errors
    /// Returns an error if the timeout is zero or exceeds 300 seconds.
    pub fn with_request_timeout(mut self, seconds: u64) -> AppResult<Self> {
        validate_timeout(seconds)?;
        self.request_timeout_seconds = seconds;
        Ok(self)
    }

    /// Get the API key, if one was configured
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Get the resolved base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the per-request timeout in seconds
    pub fn request_timeout_seconds(&self) -> u64 {
        self.request_timeout_seconds
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .finish()
    }
}

fn validate_timeout(seconds: u64) -> AppResult<()> {
    if seconds == 0 {
        return Err(AppError::Config(
            "provider.request_timeout_seconds must be greater than 0".to_string(),
        ));
    }
    if seconds > MAX_TIMEOUT_SECONDS {
        return Err(AppError::Config(format!(
            "provider.request_timeout_seconds cannot exceed {} seconds, got {}",
            MAX_TIMEOUT_SECONDS, seconds
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path_display = path.as_ref().display().to_string();

        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| {
            AppError::ConfigFileRead {
                path: path_display.clone(),
                source,
            }
        })?;

        let config: Self =
            toml::from_str(&content).map_err(|source| AppError::ConfigParseFailed {
                path: path_display.clone(),
                source,
            })?;

        config
            .validate()
            .map_err(|e| AppError::ConfigValidationFailed {
                path: path_display,
                reason: e.to_string(),
            })?;

        tracing::debug!(path = %path.as_ref().display(), "Loaded configuration file");
        Ok(config)
    }

    /// Validate configuration after parsing
    pub fn validate(&self) -> AppResult<()> {
        validate_timeout(self.provider.request_timeout_seconds)?;

        if let Some(url) = &self.provider.base_url
            && url.trim().is_empty()
        {
            return Err(AppError::Config(
                "provider.base_url must not be empty (omit it to use the default)".to_string(),
            ));
        }

        match self.observability.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(AppError::Config(format!(
                "observability.log_level must be one of trace, debug, info, warn, error; got '{}'",
                other
            ))),
        }
    }

    /// Resolve the provider configuration against the process environment
    pub fn provider_config(&self) -> ProviderConfig {
        self.provider_config_with(|key| std::env::var(key).ok())
    }

    /// Resolve the provider configuration, with `lookup` overriding file values
    pub fn provider_config_with<F>(&self, lookup: F) -> ProviderConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty environment values never hide a file value. With no file key,
        // an empty OPENAI_API_KEY is still passed through unchanged.
        let api_key = match (lookup(API_KEY_ENV), &self.provider.api_key) {
            (Some(key), Some(file_key)) if key.is_empty() => Some(file_key.clone()),
            (Some(key), _) => Some(key),
            (None, file_key) => file_key.clone(),
        };
        let base_url = lookup(BASE_URL_ENV)
            .filter(|url| !url.is_empty())
            .or_else(|| self.provider.base_url.clone());

        ProviderConfig {
            api_key,
            base_url: resolve_base_url(base_url),
            request_timeout_seconds: self.provider.request_timeout_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_resolve_base_url_falls_back_when_absent() {
        assert_eq!(resolve_base_url(None), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_base_url_falls_back_when_empty() {
        assert_eq!(resolve_base_url(Some(String::new())), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_base_url_returns_value_verbatim() {
        assert_eq!(
            resolve_base_url(Some("https://custom.example/v1".to_string())),
            "https://custom.example/v1"
        );
        assert_eq!(
            resolve_base_url(Some("  https://custom.example/v1/ ".to_string())),
            "  https://custom.example/v1/ "
        );
    }

    #[test]
    fn test_from_lookup_without_variables() {
        let provider = ProviderConfig::from_lookup(lookup_from(&[]));
        assert_eq!(provider.base_url(), DEFAULT_BASE_URL);
        assert_eq!(provider.api_key(), None);
        assert_eq!(provider.request_timeout_seconds(), 60);
    }

    #[test]
    fn test_from_lookup_passes_empty_api_key_through() {
        let provider = ProviderConfig::from_lookup(lookup_from(&[(API_KEY_ENV, "")]));
        assert_eq!(provider.api_key(), Some(""));
    }

    #[test]
    fn test_from_lookup_reads_both_variables() {
        let provider = ProviderConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "sk-test"),
            (BASE_URL_ENV, "https://custom.example/v1"),
        ]));
        assert_eq!(provider.api_key(), Some("sk-test"));
        assert_eq!(provider.base_url(), "https://custom.example/v1");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let provider = ProviderConfig::new(Some("sk-secret".to_string()), DEFAULT_BASE_URL);
        let rendered = format!("{:?}", provider);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_with_request_timeout_bounds() {
        let provider = ProviderConfig::new(None, DEFAULT_BASE_URL);
        assert!(provider.clone().with_request_timeout(0).is_err());
        assert!(provider.clone().with_request_timeout(301).is_err());
        let provider = provider.with_request_timeout(300).expect("300 is allowed");
        assert_eq!(provider.request_timeout_seconds(), 300);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").expect("empty config should parse");
        config.validate().expect("defaults should validate");
        assert_eq!(config.provider.request_timeout_seconds, 60);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_environment_overrides_file_values() {
        let config: Config = toml::from_str(
            r#"
[provider]
base_url = "http://file.example/v1"
api_key = "file-key"
"#,
        )
        .expect("should parse");

        let provider = config.provider_config_with(lookup_from(&[
            (API_KEY_ENV, "env-key"),
            (BASE_URL_ENV, "http://env.example/v1"),
        ]));
        assert_eq!(provider.api_key(), Some("env-key"));
        assert_eq!(provider.base_url(), "http://env.example/v1");
    }

    #[test]
    fn test_file_values_used_when_environment_unset() {
        let config: Config = toml::from_str(
            r#"
[provider]
base_url = "http://file.example/v1"
api_key = "file-key"
request_timeout_seconds = 15
"#,
        )
        .expect("should parse");

        let provider = config.provider_config_with(lookup_from(&[]));
        assert_eq!(provider.api_key(), Some("file-key"));
        assert_eq!(provider.base_url(), "http://file.example/v1");
        assert_eq!(provider.request_timeout_seconds(), 15);
    }

    #[test]
    fn test_empty_environment_base_url_does_not_hide_file_value() {
        let config: Config = toml::from_str(
            r#"
[provider]
base_url = "http://file.example/v1"
"#,
        )
        .expect("should parse");

        let provider = config.provider_config_with(lookup_from(&[(BASE_URL_ENV, "")]));
        assert_eq!(provider.base_url(), "http://file.example/v1");
    }

    #[test]
    fn test_empty_environment_api_key_does_not_hide_file_value() {
        let config: Config = toml::from_str(
            r#"
[provider]
api_key = "file-key"
"#,
        )
        .expect("should parse");

        let provider = config.provider_config_with(lookup_from(&[(API_KEY_ENV, "")]));
        assert_eq!(provider.api_key(), Some("file-key"));
    }

    #[test]
    fn test_empty_environment_api_key_passes_through_without_file_value() {
        let provider = Config::default().provider_config_with(lookup_from(&[(API_KEY_ENV, "")]));
        assert_eq!(provider.api_key(), Some(""));
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let config: Config = toml::from_str(
            r#"
[observability]
log_level = "verbose"
"#,
        )
        .expect("should parse");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("log_level"));
    }

    #[test]
    fn test_validate_rejects_blank_base_url() {
        let config: Config = toml::from_str(
            r#"
[provider]
base_url = "   "
"#,
        )
        .expect("should parse");
        assert!(config.validate().is_err());
    }
}
