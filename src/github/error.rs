//! Request outcomes other than a decoded success

use github_transport::{TransportError, TransportResponse};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Result of every endpoint call
pub type ApiResult = Result<Value, ApiError>;

/// Status line and headers of a response, without its body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: u16,
    pub reason: Option<String>,
    pub headers: BTreeMap<String, String>,
}

impl ResponseMeta {
    /// Look up a header by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl From<&TransportResponse> for ResponseMeta {
    fn from(response: &TransportResponse) -> Self {
        Self {
            status: response.status,
            reason: response.reason.clone(),
            headers: response.headers.clone(),
        }
    }
}

/// Why a request did not produce decoded JSON
///
/// The three kinds are kept apart so callers can tell a network failure from
/// an API error status from a malformed success body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The transport could not complete the request
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The API answered with any status other than exactly 200
    #[error("GitHub API returned {}", format_status(.0))]
    Status(ResponseMeta),

    /// A 200 response whose body is not valid JSON
    #[error("Failed to decode JSON response ({}): {message}", format_status(.meta))]
    Decode { meta: ResponseMeta, message: String },
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode { .. })
    }

    /// HTTP status code, when a response was received
    pub fn status(&self) -> Option<u16> {
        self.meta().map(|meta| meta.status)
    }

    /// Response metadata, when a response was received
    pub fn meta(&self) -> Option<&ResponseMeta> {
        match self {
            ApiError::Transport(_) => None,
            ApiError::Status(meta) | ApiError::Decode { meta, .. } => Some(meta),
        }
    }

    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            ApiError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

fn format_status(meta: &ResponseMeta) -> String {
    match &meta.reason {
        Some(reason) => format!("HTTP {} {}", meta.status, reason),
        None => format!("HTTP {}", meta.status),
    }
}
