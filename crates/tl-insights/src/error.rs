//! Insight request error types.

use thiserror::Error;

/// Shown when no API credential is configured.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Gemini API key not configured. Please add \
    TRADELENS_GEMINI__API_KEY to your environment or .env file.";

/// Shown for every transport, server, or parse failure.
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to generate insights. Please try again.";

/// Errors that can occur while requesting an insight.
///
/// These never reach the UI directly: the requester collapses them into
/// [`user_message`](Self::user_message) and logs the cause.
#[derive(Debug, Error)]
pub enum InsightError {
    /// No API credential is configured. Detected before any network call.
    #[error("API credential is not configured")]
    MissingCredential,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure from a non-reqwest transport.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The response body was not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The request body could not be built.
    #[error("encode error: {0}")]
    Encode(String),
}

impl InsightError {
    /// The message surfaced to the user for this error.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingCredential => MISSING_CREDENTIAL_MESSAGE,
            _ => REQUEST_FAILED_MESSAGE,
        }
    }
}
