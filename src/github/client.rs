//! GitHub API client implementation
//!
//! This module provides the main `GithubClient` struct which serves as the entry point
//! for all GitHub API operations. The client owns its configuration and a shared
//! handle to the host's HTTP transport; it never performs network I/O itself.
//!
//! ## Architecture
//!
//! Endpoints are organized into separate modules that extend the `GithubClient`
//! with `impl` blocks:
//! - `users.rs` - User profiles
//! - `repositories.rs` - Repository listings and repository details
//! - `gists.rs` - Gists
//! - `issues.rs` - Issues
//!
//! Every endpoint builds its URL and hands it to [`GithubClient::make_request`],
//! which is the only place requests are issued and responses interpreted.

use super::error::{ApiError, ApiResult, ResponseMeta};
use super::query::{QueryParams, endpoint_url};
use super::types::RequestEvent;
use crate::config::ClientConfig;
use crate::constants::github::{
    AUTH_SCHEME, DEFAULT_USER_AGENT, HTTP_VERSION, REQUEST_TIMEOUT, TOKEN_ENV_VAR,
};
use crate::time_period::{DateInput, TimePeriod, TimePeriodError};
use github_transport::{
    RequestOptions, ReqwestTransport, Transport, TransportError, TransportResponse,
};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Callback invoked with every outgoing request
pub type RequestHook = Arc<dyn Fn(&RequestEvent<'_>) + Send + Sync>;

/// GitHub API client for a subset of the REST API v3
///
/// ## Example
///
/// ```rust,no_run
/// use github_rest::GithubClient;
///
/// # async fn example() -> anyhow::Result<()> {
/// let mut client = GithubClient::with_default_transport(Some("your_github_token".to_string()))?;
/// client.set_per_page(100);
///
/// match client.get_repo("rust-lang", "rust").await {
///     Ok(repo) => println!("Stars: {}", repo["stargazers_count"]),
///     Err(err) if err.is_status() => println!("API error: {}", err),
///     Err(err) => println!("Request failed: {}", err),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GithubClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    request_hook: Option<RequestHook>,
}

impl GithubClient {
    /// Create a new client using `transport` for all requests
    ///
    /// # Arguments
    /// * `transport` - The host's HTTP transport
    /// * `auth_token` - Optional personal access token; without one no
    ///   `Authorization` header is sent
    pub fn new(transport: impl Transport + 'static, auth_token: Option<String>) -> Self {
        Self::from_config(transport, ClientConfig::new(auth_token))
    }

    /// Create a client with an existing configuration
    pub fn from_config(transport: impl Transport + 'static, config: ClientConfig) -> Self {
        Self::from_shared(Arc::new(transport), config)
    }

    /// Create a client sharing an already wrapped transport
    pub fn from_shared(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self {
            config,
            transport,
            request_hook: None,
        }
    }

    /// Create a client whose token is read from the `GITHUB_TOKEN` environment variable
    ///
    /// An unset or empty variable yields an unauthenticated client.
    pub fn from_env(transport: impl Transport + 'static) -> Self {
        let token = std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty());
        Self::new(transport, token)
    }

    /// Create a client backed by the built-in `reqwest` transport
    pub fn with_default_transport(auth_token: Option<String>) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::with_user_agent(DEFAULT_USER_AGENT)?;
        Ok(Self::new(transport, auth_token))
    }

    /// A copy of this client, sharing the transport, with a modified configuration
    ///
    /// Use this to issue a request with different settings without touching
    /// the configuration other callers see:
    ///
    /// ```rust,no_run
    /// # use github_rest::GithubClient;
    /// # async fn example(client: &GithubClient) {
    /// let second_page = client
    ///     .scoped(|config| config.page = 2)
    ///     .get_user_repos("octocat")
    ///     .await;
    /// # }
    /// ```
    pub fn scoped(&self, configure: impl FnOnce(&mut ClientConfig)) -> Self {
        let mut scoped = self.clone();
        configure(&mut scoped.config);
        scoped
    }

    /// Current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api_base_url(&self) -> &str {
        &self.config.api_base_url
    }

    pub fn set_api_base_url(&mut self, api_base_url: impl Into<String>) {
        self.config.api_base_url = api_base_url.into();
    }

    pub fn per_page(&self) -> u32 {
        self.config.per_page
    }

    pub fn set_per_page(&mut self, per_page: u32) {
        self.config.per_page = per_page;
    }

    pub fn page(&self) -> u32 {
        self.config.page
    }

    pub fn set_page(&mut self, page: u32) {
        self.config.page = page;
    }

    pub fn timezone(&self) -> &str {
        &self.config.timezone
    }

    /// Set the IANA timezone name
    ///
    /// Only affects the `Time-Zone` header and time periods computed after
    /// this call; an already stored time period is left as is.
    pub fn set_timezone(&mut self, timezone: impl Into<String>) {
        self.config.timezone = timezone.into();
    }

    pub fn custom_transport_options(&self) -> &Map<String, Value> {
        &self.config.custom_transport_options
    }

    pub fn set_custom_transport_options(&mut self, options: Map<String, Value>) {
        self.config.custom_transport_options = options;
    }

    /// Check if the client has authentication configured
    pub fn is_authenticated(&self) -> bool {
        self.config.auth_token.is_some()
    }

    /// Get the authentication token (if available)
    pub fn auth_token(&self) -> Option<&str> {
        self.config.auth_token.as_deref()
    }

    pub fn time_period(&self) -> Option<&TimePeriod> {
        self.config.time_period.as_ref()
    }

    /// Store a time period as given
    ///
    /// Passing neither end clears the period.
    pub fn set_time_period(&mut self, since: Option<String>, until: Option<String>) {
        let period = TimePeriod::new(since, until);
        self.config.time_period = (!period.is_empty()).then_some(period);
    }

    pub fn clear_time_period(&mut self) {
        self.config.time_period = None;
    }

    /// Set the time period from a start date and an offset
    ///
    /// `until` becomes `since` as given and `since` is moved forward by
    /// `offset`. The sign of `offset` is ignored, so `"6 months"` and
    /// `"-6 months"` behave identically. Dates are interpreted in the
    /// configured timezone. On error the stored period is unchanged.
    ///
    /// # Example
    /// ```rust,no_run
    /// # use github_rest::GithubClient;
    /// # fn example(client: &mut GithubClient) -> Result<(), github_rest::TimePeriodError> {
    /// client.set_time_period_since("2014-06-07", "6 months")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn set_time_period_since(
        &mut self,
        since: impl Into<DateInput>,
        offset: &str,
    ) -> Result<(), TimePeriodError> {
        let period = TimePeriod::starting_at(since, offset, &self.config.timezone)?;
        self.config.time_period = Some(period);
        Ok(())
    }

    /// Set the time period from an end date and an offset
    ///
    /// `until` is kept as given and `since` is moved back by `offset`,
    /// whatever its sign.
    pub fn set_time_period_until(
        &mut self,
        until: impl Into<DateInput>,
        offset: &str,
    ) -> Result<(), TimePeriodError> {
        let period = TimePeriod::ending_at(until, offset, &self.config.timezone)?;
        self.config.time_period = Some(period);
        Ok(())
    }

    /// Register a callback that observes every outgoing request
    pub fn set_request_hook(&mut self, hook: impl Fn(&RequestEvent<'_>) + Send + Sync + 'static) {
        self.request_hook = Some(Arc::new(hook));
    }

    pub fn clear_request_hook(&mut self) {
        self.request_hook = None;
    }

    /// Options handed to the transport for a request with `method`
    ///
    /// Defaults are the method, the fixed timeout, HTTP/1.1, the `Time-Zone`
    /// header and the `Authorization` header when a token is configured.
    /// Custom transport options are merged over the defaults, after which the
    /// client's `Authorization` header is reapplied so it cannot be replaced.
    pub fn request_options(&self, method: &str) -> RequestOptions {
        let mut options = RequestOptions::new(method)
            .with_timeout(REQUEST_TIMEOUT)
            .with_http_version(HTTP_VERSION)
            .with_header("Time-Zone", self.config.timezone.as_str());

        options.apply_overrides(&self.config.custom_transport_options);

        if let Some(token) = &self.config.auth_token {
            options.set_header("Authorization", format!("{} {}", AUTH_SCHEME, token));
        }

        options
    }

    /// Perform a GET request against `url`
    pub async fn make_request(&self, url: &str) -> ApiResult {
        self.make_request_with_method(url, "GET").await
    }

    /// Perform a request against `url` and normalize the outcome
    ///
    /// # Returns
    /// - `Ok(value)` with the decoded JSON body for a 200 response
    /// - `Err(ApiError::Transport)` when the transport reports a failure
    /// - `Err(ApiError::Status)` with status and headers for any other status
    /// - `Err(ApiError::Decode)` when a 200 body is not valid JSON
    #[instrument(skip(self), level = "debug")]
    pub async fn make_request_with_method(&self, url: &str, method: &str) -> ApiResult {
        let options = self.request_options(method);

        debug!(url, method = %options.method, "Sending GitHub API request");
        if let Some(hook) = &self.request_hook {
            hook(&RequestEvent {
                url,
                method: &options.method,
                options: &options,
            });
        }

        let outcome = self.transport.request(url, &options).await;
        normalize_response(url, outcome)
    }

    /// Endpoint URL with no query string
    pub(crate) fn url(&self, path: &str) -> String {
        endpoint_url(&self.config.api_base_url, path, None)
    }

    /// Endpoint URL with the given query parameters
    pub(crate) fn url_with_query(&self, path: &str, query: &QueryParams) -> String {
        endpoint_url(&self.config.api_base_url, path, Some(query))
    }

    /// `page` and `per_page` for list endpoints
    pub(crate) fn pagination(&self) -> QueryParams {
        QueryParams::paginated(&self.config)
    }
}

impl fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubClient")
            .field("api_base_url", &self.config.api_base_url)
            .field("authenticated", &self.is_authenticated())
            .field("per_page", &self.config.per_page)
            .field("page", &self.config.page)
            .field("timezone", &self.config.timezone)
            .field("time_period", &self.config.time_period)
            .field("custom_transport_options", &self.config.custom_transport_options)
            .field("request_hook", &self.request_hook.is_some())
            .finish()
    }
}

fn normalize_response(
    url: &str,
    outcome: Result<TransportResponse, TransportError>,
) -> ApiResult {
    let response = match outcome {
        Ok(response) => response,
        Err(err) => {
            warn!(url, error = %err, "GitHub API request failed in transport");
            return Err(ApiError::Transport(err));
        }
    };

    if response.status != 200 {
        debug!(url, status = response.status, "GitHub API returned non-200 status");
        return Err(ApiError::Status(ResponseMeta::from(&response)));
    }

    serde_json::from_str(&response.body).map_err(|err| {
        warn!(url, error = %err, "GitHub API response body is not valid JSON");
        ApiError::Decode {
            meta: ResponseMeta::from(&response),
            message: err.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use github_transport::codes;
    use serde_json::json;

    #[test]
    fn test_normalize_success_decodes_json() {
        let response = TransportResponse::new(200, r#"{"login":"octocat"}"#);
        let value = normalize_response("u", Ok(response)).unwrap();
        assert_eq!(value, json!({"login": "octocat"}));
    }

    #[test]
    fn test_normalize_non_200_success_is_status_error() {
        for status in [201, 204, 301, 304] {
            let response = TransportResponse::new(status, r#"{"ok":true}"#);
            let err = normalize_response("u", Ok(response)).unwrap_err();
            assert_eq!(err.status(), Some(status));
            assert!(err.is_status());
        }
    }

    #[test]
    fn test_normalize_invalid_json_is_decode_error() {
        let response = TransportResponse::new(200, "<html>");
        let err = normalize_response("u", Ok(response)).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_normalize_transport_error_passes_through() {
        let failure = TransportError::new(codes::CONNECT, "connection refused");
        let err = normalize_response("u", Err(failure.clone())).unwrap_err();
        assert_eq!(err, ApiError::Transport(failure));
    }
}
