//! GitHub Repository API operations
//!
//! This module contains functionality for listing repositories and for
//! reading a single repository's details, languages, tags, branches, teams
//! and commits.

use super::client::GithubClient;
use super::error::ApiResult;
use super::types::OwnReposQuery;

impl GithubClient {
    /// List repositories the authenticated user has access to
    ///
    /// # Arguments
    /// * `query` - Optional `type`, `sort` and `direction` filters
    ///
    /// # Example
    /// ```rust,no_run
    /// use github_rest::{GithubClient, OwnReposQuery};
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = GithubClient::with_default_transport(Some("github_token".to_string()))?;
    /// let query = OwnReposQuery::new().with_type("owner").with_sort("pushed");
    /// let repos = client.get_own_repos(&query).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_own_repos(&self, query: &OwnReposQuery) -> ApiResult {
        let params = self
            .pagination()
            .push_opt("type", query.repo_type.as_deref())
            .push_opt("sort", query.sort.as_deref())
            .push_opt("direction", query.direction.as_deref());
        let url = self.url_with_query("/user/repos", &params);
        self.make_request(&url).await
    }

    /// List public repositories of a user
    pub async fn get_user_repos(&self, user: &str) -> ApiResult {
        let url = self.url_with_query(&format!("/users/{}/repos", user), &self.pagination());
        self.make_request(&url).await
    }

    /// List repositories of an organization
    pub async fn get_org_repos(&self, organization: &str) -> ApiResult {
        let url = self.url_with_query(
            &format!("/orgs/{}/repos", organization),
            &self.pagination(),
        );
        self.make_request(&url).await
    }

    /// Get repository information
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    ///
    /// # Example
    /// ```rust,no_run
    /// use github_rest::GithubClient;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = GithubClient::with_default_transport(None)?;
    /// let repo_info = client.get_repo("octocat", "Hello-World").await?;
    /// println!("Repository: {}", repo_info["full_name"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_repo(&self, owner: &str, repo: &str) -> ApiResult {
        let url = self.url(&format!("/repos/{}/{}", owner, repo));
        self.make_request(&url).await
    }

    /// List languages detected in a repository, keyed by language with byte counts
    pub async fn get_repo_languages(&self, owner: &str, repo: &str) -> ApiResult {
        let url = self.url(&format!("/repos/{}/{}/languages", owner, repo));
        self.make_request(&url).await
    }

    /// List tags of a repository
    pub async fn get_repo_tags(&self, owner: &str, repo: &str) -> ApiResult {
        let url = self.url_with_query(
            &format!("/repos/{}/{}/tags", owner, repo),
            &self.pagination(),
        );
        self.make_request(&url).await
    }

    /// List branches of a repository
    pub async fn get_repo_branches(&self, owner: &str, repo: &str) -> ApiResult {
        let url = self.url_with_query(
            &format!("/repos/{}/{}/branches", owner, repo),
            &self.pagination(),
        );
        self.make_request(&url).await
    }

    /// Get a single branch by name
    pub async fn get_repo_branch(&self, owner: &str, repo: &str, branch: &str) -> ApiResult {
        let url = self.url(&format!("/repos/{}/{}/branches/{}", owner, repo, branch));
        self.make_request(&url).await
    }

    /// List teams with access to a repository
    pub async fn get_repo_teams(&self, owner: &str, repo: &str) -> ApiResult {
        let url = self.url_with_query(
            &format!("/repos/{}/{}/teams", owner, repo),
            &self.pagination(),
        );
        self.make_request(&url).await
    }

    /// List commits of a repository
    ///
    /// The configured time period, when set, is sent as `since` / `until`.
    /// See [`GithubClient::set_time_period_since`] and
    /// [`GithubClient::set_time_period_until`].
    pub async fn get_repo_commits(&self, owner: &str, repo: &str) -> ApiResult {
        let period = self.time_period();
        let params = self
            .pagination()
            .push_opt("since", period.and_then(|p| p.since.as_deref()))
            .push_opt("until", period.and_then(|p| p.until.as_deref()));
        let url = self.url_with_query(&format!("/repos/{}/{}/commits", owner, repo), &params);
        self.make_request(&url).await
    }
}
