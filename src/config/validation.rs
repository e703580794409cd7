//! Configuration validation
//!
//! Only checks that would make every request fail are enforced here.
//! Pagination values are passed through to the API unchecked.

use super::ClientConfig;
use crate::time_period;
use anyhow::anyhow;
use chrono::DateTime;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// API base URL is empty
    EmptyApiBaseUrl,
    /// API base URL cannot be parsed
    InvalidApiBaseUrl(String),
    /// API base URL does not use http or https
    UnsupportedScheme(String),
    /// Timezone is not a known IANA name
    UnknownTimezone(String),
    /// A time period end is not an RFC 3339 timestamp
    InvalidTimestamp(&'static str, String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyApiBaseUrl => {
                write!(f, "API base URL cannot be empty")
            }
            ValidationError::InvalidApiBaseUrl(url) => {
                write!(f, "API base URL is not a valid URL: '{}'", url)
            }
            ValidationError::UnsupportedScheme(url) => {
                write!(f, "API base URL must start with http:// or https://: '{}'", url)
            }
            ValidationError::UnknownTimezone(tz) => {
                write!(f, "Unknown timezone: '{}'", tz)
            }
            ValidationError::InvalidTimestamp(field, value) => {
                write!(f, "time_period.{} is not an ISO-8601 timestamp: '{}'", field, value)
            }
        }
    }
}

/// Validates a complete client configuration
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(error) = validate_api_base_url(&config.api_base_url) {
        errors.push(error);
    }

    if time_period::parse_timezone(&config.timezone).is_err() {
        errors.push(ValidationError::UnknownTimezone(config.timezone.clone()));
    }

    if let Some(period) = &config.time_period {
        for (field, value) in [("since", &period.since), ("until", &period.until)] {
            if let Some(value) = value
                && DateTime::parse_from_rfc3339(value).is_err()
            {
                errors.push(ValidationError::InvalidTimestamp(field, value.clone()));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the API base URL
pub fn validate_api_base_url(api_base_url: &str) -> Result<(), ValidationError> {
    if api_base_url.trim().is_empty() {
        return Err(ValidationError::EmptyApiBaseUrl);
    }

    let parsed = url::Url::parse(api_base_url)
        .map_err(|_| ValidationError::InvalidApiBaseUrl(api_base_url.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ValidationError::UnsupportedScheme(api_base_url.to_string())),
    }
}

/// Convert validation errors into a single anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Invalid configuration: {}", messages.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_period::TimePeriod;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_enterprise_base_url_is_valid() {
        assert!(validate_api_base_url("https://github.example.com/api/v3").is_ok());
        assert!(validate_api_base_url("http://127.0.0.1:8080").is_ok());
    }

    #[test]
    fn test_invalid_base_urls() {
        assert_eq!(
            validate_api_base_url("   "),
            Err(ValidationError::EmptyApiBaseUrl)
        );
        assert_eq!(
            validate_api_base_url("api.github.com"),
            Err(ValidationError::InvalidApiBaseUrl("api.github.com".to_string()))
        );
        assert_eq!(
            validate_api_base_url("ftp://api.github.com"),
            Err(ValidationError::UnsupportedScheme("ftp://api.github.com".to_string()))
        );
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = ClientConfig::default();
        config.api_base_url = String::new();
        config.timezone = "Nowhere/Special".to_string();
        config.time_period = Some(TimePeriod::new(
            Some("last tuesday".to_string()),
            Some("2014-06-07T00:00:00Z".to_string()),
        ));

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyApiBaseUrl,
                ValidationError::UnknownTimezone("Nowhere/Special".to_string()),
                ValidationError::InvalidTimestamp("since", "last tuesday".to_string()),
            ]
        );
    }

    #[test]
    fn test_pagination_is_not_validated() {
        let mut config = ClientConfig::default();
        config.per_page = 0;
        config.page = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_errors_to_anyhow() {
        let error = validation_errors_to_anyhow(vec![
            ValidationError::EmptyApiBaseUrl,
            ValidationError::UnknownTimezone("X".to_string()),
        ]);
        assert_eq!(
            error.to_string(),
            "Invalid configuration: API base URL cannot be empty; Unknown timezone: 'X'"
        );
    }
}
