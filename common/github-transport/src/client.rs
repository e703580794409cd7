//! Default `reqwest`-backed transport

use crate::{HttpVersion, RequestOptions, Transport, TransportError, TransportResponse, codes};
use async_trait::async_trait;
use reqwest::{Client, Method, Version};
use std::collections::BTreeMap;
use tracing::debug;

/// Default User-Agent sent by [`ReqwestTransport::new`]
pub const DEFAULT_USER_AGENT: &str = concat!("github-transport/", env!("CARGO_PKG_VERSION"));

/// HTTP transport built on a shared `reqwest::Client`
///
/// Timeout, protocol version, headers and body come from each request's
/// [`RequestOptions`]. Options in [`RequestOptions::extra`] are ignored.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the default User-Agent
    pub fn new() -> Result<Self, TransportError> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    /// Create a transport sending `user_agent` on every request
    ///
    /// GitHub rejects requests without a User-Agent header.
    pub fn with_user_agent(user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| TransportError::new(codes::SETUP, e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an already configured `reqwest::Client`
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<TransportResponse, TransportError> {
        let method = Method::from_bytes(options.method.as_bytes()).map_err(|_| {
            TransportError::new(
                codes::INVALID_METHOD,
                format!("Invalid HTTP method: {}", options.method),
            )
        })?;

        let mut request = self
            .client
            .request(method, url)
            .timeout(options.timeout)
            .version(to_reqwest_version(options.http_version));

        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &options.body {
            request = request.body(body.clone());
        }

        let response = request.send().await?;

        let status = response.status();
        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await?;

        debug!(url, status = status.as_u16(), bytes = body.len(), "Transport response received");

        Ok(TransportResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            headers,
            body,
        })
    }
}

fn to_reqwest_version(version: HttpVersion) -> Version {
    match version {
        HttpVersion::Http10 => Version::HTTP_10,
        HttpVersion::Http11 => Version::HTTP_11,
        HttpVersion::Http2 => Version::HTTP_2,
    }
}
