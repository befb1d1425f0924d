//! Insight requester.
//!
//! Issues exactly one `generateContent` call per invocation. There is no retry:
//! failures settle the request and the user decides whether to regenerate.

use std::time::Duration;

use tl_config::GeminiConfig;
use tl_core::insight::{InsightRequest, InsightResult};

use crate::error::InsightError;
use crate::prompt::{build_prompt, request_body};
use crate::response::GenerateResponse;
use crate::transport::{HttpTransport, Transport};

/// Sends chart summaries to the generative-text endpoint.
#[derive(Debug, Clone)]
pub struct InsightRequester<T = HttpTransport> {
    transport: T,
    config: GeminiConfig,
}

impl InsightRequester<HttpTransport> {
    /// Build a requester backed by `reqwest`, using the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: GeminiConfig) -> Result<Self, InsightError> {
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::new(transport, config))
    }
}

impl<T: Transport> InsightRequester<T> {
    #[must_use]
    pub const fn new(transport: T, config: GeminiConfig) -> Self {
        Self { transport, config }
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Request an insight for one chart.
    ///
    /// Always settles: errors are logged and mapped to
    /// [`InsightResult::Failure`] with a user-facing message.
    pub async fn request_insight(&self, request: &InsightRequest) -> InsightResult {
        match self.try_request(request).await {
            Ok(text) => InsightResult::Text(text),
            Err(InsightError::MissingCredential) => {
                tracing::warn!(chart = %request.chart_title, "insight requested without an API key");
                InsightResult::Failure(InsightError::MissingCredential.user_message().to_string())
            }
            Err(error) => {
                tracing::error!(chart = %request.chart_title, %error, "insight request failed");
                InsightResult::Failure(error.user_message().to_string())
            }
        }
    }

    /// Request an insight, returning the underlying error on failure.
    ///
    /// # Errors
    ///
    /// - [`InsightError::MissingCredential`] before any network call when no
    ///   key is configured.
    /// - [`InsightError::Http`] / [`InsightError::Transport`] if the exchange
    ///   fails.
    /// - [`InsightError::Api`] on a non-success status.
    /// - [`InsightError::Parse`] if the body is not valid JSON.
    pub async fn try_request(&self, request: &InsightRequest) -> Result<String, InsightError> {
        if !self.config.is_configured() {
            return Err(InsightError::MissingCredential);
        }

        let prompt = build_prompt(request)?;
        let endpoint = self.config.generate_url();
        let url = format!(
            "{endpoint}?key={}",
            urlencoding::encode(self.config.api_key.trim())
        );

        tracing::debug!(
            chart = %request.chart_title,
            kind = %request.chart_kind,
            rows = request.chart_data.len(),
            %endpoint,
            "requesting insight"
        );
        let resp = self.transport.post_json(&url, &request_body(&prompt)).await?;

        if !resp.is_success() {
            return Err(InsightError::Api {
                status: resp.status,
                message: resp.body,
            });
        }

        let data: GenerateResponse =
            serde_json::from_str(&resp.body).map_err(|e| InsightError::Parse(e.to_string()))?;
        Ok(data.into_text())
    }
}
