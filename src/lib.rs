//! github-rest - A thin client for a subset of the GitHub REST API v3
//!
//! The client holds configuration, builds endpoint URLs, delegates each call to
//! an injected [`transport::Transport`] and normalizes the response into
//! decoded JSON or an [`ApiError`].

pub mod config;
pub mod constants;
pub mod github;
pub mod time_period;
pub mod utils;

/// Transport contract and the default `reqwest` transport
pub use github_transport as transport;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use config::{ClientConfig, ClientConfigBuilder};
pub use github::{ApiError, ApiResult, GithubClient, IssueQuery, OwnReposQuery, RequestEvent};
pub use time_period::{DateInput, TimePeriod, TimePeriodError};

/// Helper to load the configuration file from the current directory
pub fn load_default_config() -> anyhow::Result<ClientConfig> {
    ClientConfig::load(constants::config::DEFAULT_CONFIG_FILE)
}
