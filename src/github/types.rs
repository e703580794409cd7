//! Endpoint filters and request events

use github_transport::RequestOptions;
use std::fmt::Display;

/// Filters for listing the authenticated user's repositories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnReposQuery {
    /// `all`, `owner`, `public`, `private` or `member`
    pub repo_type: Option<String>,
    /// `created`, `updated`, `pushed` or `full_name`
    pub sort: Option<String>,
    /// `asc` or `desc`
    pub direction: Option<String>,
}

impl OwnReposQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, repo_type: impl Into<String>) -> Self {
        self.repo_type = Some(repo_type.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }
}

/// Filters for listing a repository's issues
///
/// Every filter is optional and is left out of the query string when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueQuery {
    /// Milestone number, `*` or `none`
    pub milestone: Option<String>,
    /// `open`, `closed` or `all`
    pub state: Option<String>,
    /// Login, `*` or `none`
    pub assignee: Option<String>,
    pub creator: Option<String>,
    pub mentioned: Option<String>,
    /// Comma-separated label names
    pub labels: Option<String>,
    /// `created`, `updated` or `comments`
    pub sort: Option<String>,
    /// `asc` or `desc`
    pub direction: Option<String>,
    /// ISO-8601 timestamp
    pub since: Option<String>,
}

impl IssueQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a milestone number or one of the keywords `*` / `none`
    pub fn with_milestone(mut self, milestone: impl Display) -> Self {
        self.milestone = Some(milestone.to_string());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    pub fn with_mentioned(mut self, mentioned: impl Into<String>) -> Self {
        self.mentioned = Some(mentioned.into());
        self
    }

    pub fn with_labels(mut self, labels: impl Into<String>) -> Self {
        self.labels = Some(labels.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }
}

/// Emitted just before a request is handed to the transport
#[derive(Debug, Clone, Copy)]
pub struct RequestEvent<'a> {
    pub url: &'a str,
    pub method: &'a str,
    pub options: &'a RequestOptions,
}
