//! GitHub gist API operations

use super::client::GithubClient;
use super::error::ApiResult;

impl GithubClient {
    /// List gists of a user
    ///
    /// # Arguments
    /// * `user` - The user's login
    /// * `since` - Only gists updated at or after this ISO-8601 timestamp
    pub async fn get_user_gists(&self, user: &str, since: Option<&str>) -> ApiResult {
        let params = self.pagination().push_opt("since", since);
        let url = self.url_with_query(&format!("/users/{}/gists", user), &params);
        self.make_request(&url).await
    }
}
