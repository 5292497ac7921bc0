//! Upstream client: rewrites `/api/` paths onto the backend origin and relays
//! the response body.

use bytes::Bytes;

/// The fixed backend all `/api/` requests are forwarded to.
pub const BACKEND_ORIGIN: &str = "https://viiibe-backend-hce5.vercel.app";

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Outbound HTTP client bound to a single backend origin.
///
/// The origin is [`BACKEND_ORIGIN`] in production; tests inject their own.
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Inbound path and query are kept verbatim, only scheme+host change.
    fn target_url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    /// Forward a GET and return the raw response body.
    ///
    /// The upstream status code is deliberately discarded: any response the
    /// backend manages to produce is relayed as a success. Only transport
    /// failures (connect, DNS, timeout) surface as errors.
    pub async fn forward_get(&self, path_and_query: &str) -> Result<Bytes, UpstreamError> {
        let response = self
            .client
            .get(self.target_url(path_and_query))
            .send()
            .await?;
        tracing::debug!(
            "upstream GET {} -> {}",
            path_and_query,
            response.status()
        );
        Ok(response.bytes().await?)
    }

    /// Forward a POST with the collected inbound body.
    ///
    /// The content type is forced to `application/json`; no other inbound
    /// header crosses the boundary.
    pub async fn forward_post(
        &self,
        path_and_query: &str,
        body: Bytes,
    ) -> Result<Bytes, UpstreamError> {
        let response = self
            .client
            .post(self.target_url(path_and_query))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        tracing::debug!(
            "upstream POST {} -> {}",
            path_and_query,
            response.status()
        );
        Ok(response.bytes().await?)
    }
}
