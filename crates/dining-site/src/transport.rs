//! HTTP access to the site API.
//!
//! `Transport` is the seam loaders and submitters talk to; `HttpTransport`
//! is the reqwest-backed implementation. No retries and no timeouts: a
//! request either completes with a status and body or fails outright.

use async_trait::async_trait;
use serde_json::Value;

use crate::types::{RawResponse, TransportError};

/// Something that can perform the two requests the page makes.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` relative to the API base.
    async fn get(&self, path: &str) -> Result<RawResponse, TransportError>;
    /// POST `body` as JSON to `path` relative to the API base.
    async fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed transport rooted at a base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for `base_url` (scheme required, trailing `/` ignored).
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            let error = TransportError::InvalidBaseUrl(base_url);
            tracing::error!(%error);
            return Err(error);
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(TransportError::from)?;

        tracing::debug!(%base_url, "created site api transport");
        Ok(Self { client, base_url })
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn finish(response: reqwest::Response) -> Result<RawResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<RawResponse, TransportError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        Self::finish(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse, TransportError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        // `.json` sets `Content-Type: application/json`.
        let response = self.client.post(&url).json(body).send().await?;
        Self::finish(response).await
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError::Network(e.to_string())
    }
}
