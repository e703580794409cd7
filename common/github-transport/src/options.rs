//! Request options handed to a transport

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use tracing::warn;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP protocol version requested from the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpVersion {
    Http10,
    Http11,
    Http2,
}

impl HttpVersion {
    /// Parse a version string such as `"1.1"` or `"HTTP/2"`
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let value = value
            .strip_prefix("HTTP/")
            .or_else(|| value.strip_prefix("http/"))
            .unwrap_or(value);

        match value {
            "1" | "1.0" => Some(Self::Http10),
            "1.1" => Some(Self::Http11),
            "2" | "2.0" => Some(Self::Http2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http10 => "1.0",
            Self::Http11 => "1.1",
            Self::Http2 => "2",
        }
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP/{}", self.as_str())
    }
}

/// Everything a transport needs to perform one request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    /// Upper-case HTTP method
    pub method: String,
    pub timeout: Duration,
    pub http_version: HttpVersion,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
    /// Custom options the client does not interpret, passed through verbatim
    pub extra: BTreeMap<String, Value>,
}

impl RequestOptions {
    /// Options for `method` with the default timeout, HTTP/1.1, no headers and no body
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into().to_uppercase(),
            timeout: DEFAULT_TIMEOUT,
            http_version: HttpVersion::Http11,
            headers: BTreeMap::new(),
            body: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_http_version(mut self, version: HttpVersion) -> Self {
        self.http_version = version;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_header(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set a header, replacing any existing header with the same name
    /// regardless of case
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers
            .retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
    }

    /// Look up a header by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Merge caller-supplied options over these ones
    ///
    /// Recognized keys are `method`, `timeout` (seconds), `httpversion` /
    /// `http_version`, `headers` (merged per header name) and `body`. A
    /// recognized key whose value has an unusable shape is skipped with a
    /// warning. Any other key lands in [`RequestOptions::extra`].
    pub fn apply_overrides(&mut self, overrides: &Map<String, Value>) {
        for (key, value) in overrides {
            match key.as_str() {
                "method" => match value.as_str() {
                    Some(method) if !method.trim().is_empty() => {
                        self.method = method.trim().to_uppercase();
                    }
                    _ => ignored(key, value),
                },
                "timeout" => match value.as_f64().map(Duration::try_from_secs_f64) {
                    Some(Ok(timeout)) => self.timeout = timeout,
                    _ => ignored(key, value),
                },
                "httpversion" | "http_version" => {
                    let parsed = match value {
                        Value::String(version) => HttpVersion::parse(version),
                        Value::Number(version) => HttpVersion::parse(&version.to_string()),
                        _ => None,
                    };
                    match parsed {
                        Some(version) => self.http_version = version,
                        None => ignored(key, value),
                    }
                }
                "headers" => match value.as_object() {
                    Some(headers) => self.merge_headers(headers),
                    None => ignored(key, value),
                },
                "body" => {
                    self.body = match value {
                        Value::Null => None,
                        Value::String(body) => Some(body.clone()),
                        other => Some(other.to_string()),
                    };
                }
                _ => {
                    self.extra.insert(key.clone(), value.clone());
                }
            }
        }
    }

    fn merge_headers(&mut self, headers: &Map<String, Value>) {
        for (name, value) in headers {
            match value {
                Value::String(value) => self.set_header(name.as_str(), value.as_str()),
                Value::Number(_) | Value::Bool(_) => self.set_header(name.as_str(), value.to_string()),
                Value::Null => {
                    self.headers
                        .retain(|existing, _| !existing.eq_ignore_ascii_case(name));
                }
                _ => ignored(&format!("headers.{}", name), value),
            }
        }
    }
}

fn ignored(key: &str, value: &Value) {
    warn!(option = %key, value = %value, "Ignoring custom transport option with unusable value");
}
