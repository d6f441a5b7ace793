//! HTTP transport
//!
//! Defines the Transport trait and the reqwest implementation that posts
//! `generateContent` requests to Gemini.

use crate::config::GeminiConfig;
use crate::models::gemini::GenerateContentRequest;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Raw provider reply: status code plus the unparsed body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReply {
    pub status: u16,
    pub body: String,
}

impl ProviderReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport to the generative model endpoint
///
/// Returns `Err` only when no HTTP reply was obtained; non-success
/// statuses are returned as replies for the caller to classify.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Get the transport name
    fn name(&self) -> &str;

    /// Send one `generateContent` request authenticated with `api_key`
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<ProviderReply>;
}

/// reqwest-backed Gemini transport
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport for the configured endpoint
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &str {
        "gemini-http"
    }

    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<ProviderReply> {
        debug!("Sending Gemini generateContent request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            // The URL carries the API key
            .map_err(reqwest::Error::without_url)
            .context("Failed to send request")?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read Gemini response body")?;

        debug!("Gemini replied with status {} ({} bytes)", status, body.len());

        Ok(ProviderReply { status, body })
    }
}
