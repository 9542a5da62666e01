//! HTTP probe transport.
//!
//! A probe is a single GET against a login page URL. The status code is
//! returned uninterpreted; transport failures become `ProbeError`s.

use crate::error::ProbeError;
use async_trait::async_trait;

/// Something that can fetch the HTTP status of a URL.
///
/// `HttpTransport` is the production implementation. Tests substitute fakes
/// to control latency and responses.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one GET and return the response status code.
    async fn get_status(&self, url: &str) -> Result<u16, ProbeError>;
}

/// reqwest-backed transport using default client settings.
///
/// Redirects are followed with reqwest's default policy and no request
/// timeout is configured.
#[derive(Clone)]
pub struct HttpTransport {
    /// HTTP client shared by all probes of a run
    http_client: reqwest::Client,
}

impl HttpTransport {
    /// Create a new transport with a default HTTP client.
    pub fn new() -> Result<Self, ProbeError> {
        let http_client = reqwest::Client::builder().build().map_err(|e| {
            ProbeError::internal(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_status(&self, url: &str) -> Result<u16, ProbeError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::from_reqwest(url, &e))?;

        Ok(response.status().as_u16())
    }
}
