//! HTTP transport seam.
//!
//! [`Transport`] is the only place the requester touches the network, so tests
//! can swap in a recording fake and assert on call counts.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;

use crate::error::InsightError;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends one JSON POST and returns whatever the server answered.
///
/// Implementations report non-success statuses as a normal
/// [`TransportResponse`]; only failures to complete the exchange are errors.
pub trait Transport: Send + Sync {
    fn post_json(
        &self,
        url: &str,
        body: &Value,
    ) -> impl Future<Output = Result<TransportResponse, InsightError>> + Send;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::Http`] if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, InsightError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("tradelens/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Wrap an existing client.
    #[must_use]
    pub const fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse, InsightError> {
        let resp = self.http.post(url).json(body).send().await?;
        into_transport_response(resp).await
    }
}

async fn into_transport_response(
    resp: reqwest::Response,
) -> Result<TransportResponse, InsightError> {
    let status = resp.status().as_u16();
    let body = resp.text().await?;
    Ok(TransportResponse { status, body })
}
