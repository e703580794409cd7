//! Endpoint URL and query-string construction

use crate::config::ClientConfig;
use std::fmt::Display;
use url::form_urlencoded;

/// Ordered query parameters; absent values are never added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// `page` and `per_page` taken from the configuration, in that order
    pub(crate) fn paginated(config: &ClientConfig) -> Self {
        Self::default()
            .push("page", config.page)
            .push("per_page", config.per_page)
    }

    pub(crate) fn push(mut self, key: &'static str, value: impl Display) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub(crate) fn push_opt<T: Display>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// `application/x-www-form-urlencoded` pairs joined with `&`
    pub(crate) fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(key, value)| (*key, value.as_str())))
            .finish()
    }
}

/// Base URL + path, plus `?query` when there are any parameters
///
/// Path segments are inserted as given. A trailing slash on the base URL is
/// dropped so paths never start with `//`.
pub(crate) fn endpoint_url(api_base_url: &str, path: &str, query: Option<&QueryParams>) -> String {
    let base = api_base_url.trim_end_matches('/');
    match query.map(QueryParams::encode) {
        Some(encoded) if !encoded.is_empty() => format!("{}{}?{}", base, path, encoded),
        _ => format!("{}{}", base, path),
    }
}
