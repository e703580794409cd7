//! GitHub issue API operations

use super::client::GithubClient;
use super::error::ApiResult;
use super::types::IssueQuery;

impl GithubClient {
    /// List issues of a repository
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    /// * `query` - Filters; unset filters are left out of the request
    ///
    /// # Example
    /// ```rust,no_run
    /// use github_rest::{GithubClient, IssueQuery};
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = GithubClient::with_default_transport(None)?;
    /// let query = IssueQuery::new().with_state("open").with_labels("bug,ui");
    /// let issues = client.get_repo_issues("rust-lang", "rust", &query).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_repo_issues(&self, owner: &str, repo: &str, query: &IssueQuery) -> ApiResult {
        let params = self
            .pagination()
            .push_opt("milestone", query.milestone.as_deref())
            .push_opt("state", query.state.as_deref())
            .push_opt("assignee", query.assignee.as_deref())
            .push_opt("creator", query.creator.as_deref())
            .push_opt("mentioned", query.mentioned.as_deref())
            .push_opt("labels", query.labels.as_deref())
            .push_opt("sort", query.sort.as_deref())
            .push_opt("direction", query.direction.as_deref())
            .push_opt("since", query.since.as_deref());
        let url = self.url_with_query(&format!("/repos/{}/{}/issues", owner, repo), &params);
        self.make_request(&url).await
    }
}
