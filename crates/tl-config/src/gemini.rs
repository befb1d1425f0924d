//! Generative-text endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default generative-language API host.
fn default_endpoint() -> String {
    String::from("https://generativelanguage.googleapis.com")
}

/// Default model id.
fn default_model() -> String {
    String::from("gemini-2.5-flash")
}

/// Default transport timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API credential sent as the `key` query parameter.
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the API, without a trailing slash.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Transport timeout applied by the HTTP client. Not a retry budget.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    /// Check if a credential is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// The `generateContent` URL for the configured model, without the key.
    #[must_use]
    pub fn generate_url(&self) -> String {
        format!(
            "{}/v1/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    /// Reject values that would make every request fail before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-http(s) endpoint, a
    /// blank model, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(invalid("gemini.endpoint", "must start with http:// or https://"));
        }
        if self.model.trim().is_empty() {
            return Err(invalid("gemini.model", "must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("gemini.timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
