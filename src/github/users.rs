//! GitHub user API operations

use super::client::GithubClient;
use super::error::ApiResult;

impl GithubClient {
    /// Get the public profile of a user
    ///
    /// # Arguments
    /// * `username` - The user's login
    ///
    /// # Example
    /// ```rust,no_run
    /// use github_rest::GithubClient;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = GithubClient::with_default_transport(None)?;
    /// let profile = client.get_user_profile("octocat").await?;
    /// println!("Name: {}", profile["name"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_user_profile(&self, username: &str) -> ApiResult {
        let url = self.url(&format!("/users/{}", username));
        self.make_request(&url).await
    }
}
