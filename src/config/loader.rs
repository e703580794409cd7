//! Configuration file loading and saving

use super::validation;
use crate::constants;
use crate::time_period::TimePeriod;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-client configuration
///
/// Every field can be changed between requests; changes apply to the next
/// request. Pagination values are passed to the API verbatim and are never
/// validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub api_base_url: String,
    /// Token sent as `Authorization: token <value>`; never written back to disk
    #[serde(skip_serializing)]
    pub auth_token: Option<String>,
    pub per_page: u32,
    pub page: u32,
    /// IANA timezone name, sent as `Time-Zone` and used for time periods
    pub timezone: String,
    /// Window applied to commit listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<TimePeriod>,
    /// Extra transport options merged over the request defaults
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub custom_transport_options: Map<String, Value>,
}

impl ClientConfig {
    /// Create a configuration with defaults and the given token
    pub fn new(auth_token: Option<String>) -> Self {
        Self {
            api_base_url: constants::github::API_BASE.to_string(),
            auth_token,
            per_page: constants::github::DEFAULT_PER_PAGE,
            page: constants::github::DEFAULT_PAGE,
            timezone: constants::github::DEFAULT_TIMEZONE.to_string(),
            time_period: None,
            custom_transport_options: Map::new(),
        }
    }

    /// Load configuration from a YAML file
    ///
    /// Missing keys take their defaults and an empty file yields the default
    /// configuration. The result is validated before it is returned.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;

        let config: ClientConfig = if content.trim().is_empty() {
            ClientConfig::default()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file '{}'", path))?
        };

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        let yaml_content = format!("---\n{}", yaml);

        std::fs::write(path, yaml_content)
            .with_context(|| format!("Failed to write config file '{}'", path))?;

        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self).map_err(validation::validation_errors_to_anyhow)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
