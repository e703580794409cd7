//! Client configuration builder

use super::ClientConfig;
use crate::time_period::TimePeriod;
use serde_json::{Map, Value};

/// Builder for creating client configurations
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder starting from the defaults
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Set the API token
    pub fn with_auth_token(mut self, token: String) -> Self {
        self.config.auth_token = Some(token);
        self
    }

    /// Set the API base URL (e.g. a GitHub Enterprise `/api/v3` endpoint)
    pub fn with_api_base_url(mut self, api_base_url: String) -> Self {
        self.config.api_base_url = api_base_url;
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.config.per_page = per_page;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.config.page = page;
        self
    }

    /// Set the IANA timezone name
    pub fn with_timezone(mut self, timezone: String) -> Self {
        self.config.timezone = timezone;
        self
    }

    pub fn with_time_period(mut self, time_period: TimePeriod) -> Self {
        self.config.time_period = Some(time_period);
        self
    }

    /// Add a single custom transport option
    pub fn with_custom_option(mut self, key: String, value: Value) -> Self {
        self.config.custom_transport_options.insert(key, value);
        self
    }

    /// Replace all custom transport options
    pub fn with_custom_transport_options(mut self, options: Map<String, Value>) -> Self {
        self.config.custom_transport_options = options;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
