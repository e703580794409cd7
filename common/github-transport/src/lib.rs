//! HTTP transport contract for the GitHub client
//!
//! The client never talks to the network itself. It hands a URL and a set of
//! [`RequestOptions`] to a [`Transport`] and gets back either a
//! [`TransportResponse`] or a structured [`TransportError`].
//!
//! ## Modules
//!
//! - `client`: Default `reqwest`-backed transport
//! - `options`: Request options and custom option merging
//! - `response`: Raw response returned by a transport
//! - `error`: Structured transport failures

mod client;
mod error;
mod options;
mod response;

use async_trait::async_trait;

// Re-export public API
pub use client::{DEFAULT_USER_AGENT, ReqwestTransport};
pub use error::{TransportError, codes};
pub use options::{DEFAULT_TIMEOUT, HttpVersion, RequestOptions};
pub use response::TransportResponse;

/// A host-provided HTTP transport
///
/// Implementations perform exactly one request per call and report either the
/// raw response (any status code) or a transport-level failure. They must not
/// retry and must not interpret the status code.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<TransportResponse, TransportError>;
}
