//! GitHub API integration module
//!
//! A thin client for a fixed subset of GitHub's REST API v3. Endpoints are
//! organized into separate sub-modules; all of them share one request
//! primitive on [`GithubClient`].
//!
//! ## Architecture
//!
//! - [`client`]: Core client with configuration and the request primitive
//! - [`error`]: Non-success request outcomes
//! - [`types`]: Endpoint filters and request events
//! - `users`, `repositories`, `gists`, `issues`: Endpoint methods
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use github_rest::github::GithubClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut client = GithubClient::with_default_transport(Some("your_token".to_string()))?;
//! client.set_time_period_until("2014-04-01", "6 months")?;
//!
//! let commits = client.get_repo_commits("rust-lang", "rust").await?;
//! println!("{} commits", commits.as_array().map_or(0, Vec::len));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
mod gists;
mod issues;
mod query;
mod repositories;
pub mod types;
mod users;

// Re-export commonly used items for convenience
pub use client::{GithubClient, RequestHook};
pub use error::{ApiError, ApiResult, ResponseMeta};
pub use types::{IssueQuery, OwnReposQuery, RequestEvent};
