//! Structured transport failures

use std::collections::BTreeMap;
use thiserror::Error;

/// Well-known error codes reported by [`crate::ReqwestTransport`]
pub mod codes {
    /// Generic request failure
    pub const REQUEST_FAILED: &str = "http_request_failed";
    /// The request did not complete within the configured timeout
    pub const TIMEOUT: &str = "http_request_timeout";
    /// A connection to the remote host could not be established
    pub const CONNECT: &str = "http_connect_failed";
    /// The response body could not be read
    pub const BODY: &str = "http_body_failed";
    /// The request method is not a valid HTTP method
    pub const INVALID_METHOD: &str = "http_invalid_method";
    /// The transport itself could not be constructed
    pub const SETUP: &str = "http_transport_setup";
}

/// A transport-level failure (DNS, connect, timeout, transport internals)
///
/// Carries a mapping of error code to the messages reported under that code,
/// so callers can inspect exactly what went wrong without string matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", format_errors(.errors))]
pub struct TransportError {
    errors: BTreeMap<String, Vec<String>>,
}

impl TransportError {
    /// Create an error with a single code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(code.into(), vec![message.into()]);
        Self { errors }
    }

    /// Record another message under `code`
    pub fn add(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(code.into())
            .or_default()
            .push(message.into());
    }

    /// Builder-style variant of [`TransportError::add`]
    pub fn with(mut self, code: impl Into<String>, message: impl Into<String>) -> Self {
        self.add(code, message);
        self
    }

    /// The first error code, in code order
    pub fn code(&self) -> Option<&str> {
        self.errors.keys().next().map(String::as_str)
    }

    /// All error codes
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Messages recorded under `code`
    pub fn messages(&self, code: &str) -> &[String] {
        self.errors.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The full code -> messages mapping
    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    pub fn is_timeout(&self) -> bool {
        self.errors.contains_key(codes::TIMEOUT)
    }

    pub fn is_connect(&self) -> bool {
        self.errors.contains_key(codes::CONNECT)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let code = if err.is_timeout() {
            codes::TIMEOUT
        } else if err.is_connect() {
            codes::CONNECT
        } else if err.is_body() || err.is_decode() {
            codes::BODY
        } else {
            codes::REQUEST_FAILED
        };
        TransportError::new(code, err.to_string())
    }
}

fn format_errors(errors: &BTreeMap<String, Vec<String>>) -> String {
    let parts: Vec<String> = errors
        .iter()
        .flat_map(|(code, messages)| {
            messages
                .iter()
                .map(move |message| format!("{}: {}", code, message))
        })
        .collect();

    if parts.is_empty() {
        "unknown transport error".to_string()
    } else {
        parts.join("; ")
    }
}
