//! Configuration for Fortnite-API clients.
//!
//! [`FortniteApiConfig`] is the serializable settings bag both client builders
//! accept. It is validated on construction, and the API key is kept in a
//! [`SecretString`] so it never shows up in `Debug` output or serialized form.

use crate::client::{ClientConfig, RetryPolicy, DEFAULT_BASE_URL};
use crate::enums::GameLanguage;
use crate::flags::ResponseFlags;
use crate::Error;
use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Configuration for a Fortnite-API client instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FortniteApiConfig {
    /// Service base URL
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key, required by the stats endpoints only
    #[serde(default, skip_serializing, deserialize_with = "deserialize_api_key")]
    pub api_key: Option<SecretString>,

    /// Language used when a call does not name one
    #[serde(default)]
    pub default_language: GameLanguage,

    /// Whether beta endpoints may be called
    #[serde(default)]
    pub beta: bool,

    /// Optional fields requested from the service
    #[serde(default)]
    pub response_flags: ResponseFlags,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum number of retry attempts
    #[validate(range(min = 0, max = 10))]
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

const fn default_max_retries() -> u32 {
    4
}

fn deserialize_api_key<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let key: Option<String> = Option::deserialize(deserializer)?;
    Ok(key.filter(|k| !k.is_empty()).map(SecretString::from))
}

impl FortniteApiConfig {
    /// Create a configuration pointing at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or validation fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            base_url: base_url.into(),
            ..Self::default()
        };

        config
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {}", e)))?;

        Ok(config)
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the default language.
    #[must_use]
    pub const fn with_language(mut self, language: GameLanguage) -> Self {
        self.default_language = language;
        self
    }

    /// Enable or disable beta endpoints.
    #[must_use]
    pub const fn with_beta(mut self, beta: bool) -> Self {
        self.beta = beta;
        self
    }

    /// Set the response flags.
    #[must_use]
    pub const fn with_response_flags(mut self, flags: ResponseFlags) -> Self {
        self.response_flags = flags;
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set maximum retry attempts.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// True when an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Parse and validate the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::ConfigError(format!("Invalid base URL: {}", e)))
    }

    /// HTTP settings derived from this configuration.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_timeout(self.timeout())
            .with_retry_policy(RetryPolicy::new().with_max_retries(self.max_retries))
    }
}

impl Default for FortniteApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            default_language: GameLanguage::default(),
            beta: false,
            response_flags: ResponseFlags::INCLUDE_NOTHING,
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_config_new() {
        let config = FortniteApiConfig::new("https://fortnite-api.com").unwrap();
        assert_eq!(config.base_url, "https://fortnite-api.com");
        assert!(!config.has_api_key());
        assert!(!config.beta);
        assert_eq!(config.default_language, GameLanguage::English);
        assert_eq!(config.response_flags, ResponseFlags::INCLUDE_NOTHING);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.max_retries, 4);
    }

    #[test]
    fn test_config_invalid_url() {
        let result = FortniteApiConfig::new("not-a-url");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_config_builder() {
        let config = FortniteApiConfig::default()
            .with_api_key("secret-key")
            .with_language(GameLanguage::German)
            .with_beta(true)
            .with_response_flags(ResponseFlags::INCLUDE_ALL)
            .with_timeout(60)
            .with_max_retries(2);

        assert_eq!(
            config.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            Some("secret-key".to_string())
        );
        assert_eq!(config.default_language, GameLanguage::German);
        assert!(config.beta);
        assert_eq!(config.response_flags, ResponseFlags::INCLUDE_ALL);
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.client_config().retry_policy.max_retries, 2);
    }

    #[test]
    fn test_api_key_is_redacted() {
        let config = FortniteApiConfig::default().with_api_key("secret-key");
        assert!(!format!("{config:?}").contains("secret-key"));

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret-key"));
        assert!(!json.contains("api_key"));
    }

    #[test]
    fn test_config_deserialization() {
        let config: FortniteApiConfig = serde_json::from_str(
            r#"{"api_key": "abc", "default_language": "fr", "beta": true, "max_retries": 0}"#,
        )
        .unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.has_api_key());
        assert_eq!(config.default_language, GameLanguage::French);
        assert!(config.beta);
        assert_eq!(config.max_retries, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_api_key_is_none() {
        let config: FortniteApiConfig = serde_json::from_str(r#"{"api_key": ""}"#).unwrap();
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_parse_base_url() {
        let config = FortniteApiConfig::new("http://localhost:8080").unwrap();
        let url = config.parse_base_url().unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn test_config_validation_ranges() {
        let mut config = FortniteApiConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        config.request_timeout_secs = 301;
        assert!(config.validate().is_err());

        config.request_timeout_secs = 30;
        config.max_retries = 11;
        assert!(config.validate().is_err());

        config.max_retries = 3;
        assert!(config.validate().is_ok());
    }
}
