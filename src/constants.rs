//! Central constants for the github-rest client

/// Default values for GitHub API requests
pub mod github {
    use github_transport::HttpVersion;
    use std::time::Duration;

    /// GitHub API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Default number of items per page on list endpoints
    pub const DEFAULT_PER_PAGE: u32 = 30;

    /// Default page number on list endpoints
    pub const DEFAULT_PAGE: u32 = 1;

    /// Default timezone used for the `Time-Zone` header and time periods
    pub const DEFAULT_TIMEZONE: &str = "UTC";

    /// Per-request transport timeout
    pub const REQUEST_TIMEOUT: Duration = github_transport::DEFAULT_TIMEOUT;

    /// Protocol version requested unless overridden by custom options
    pub const HTTP_VERSION: HttpVersion = HttpVersion::Http11;

    /// Scheme used in the `Authorization` header
    pub const AUTH_SCHEME: &str = "token";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("github-rest/", env!("CARGO_PKG_VERSION"));

    /// Environment variable holding the API token
    pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "github-rest.yaml";
}
