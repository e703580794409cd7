//! Configuration file and builder tests

use github_rest::{ClientConfig, ClientConfigBuilder, TimePeriod};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, yaml: &str) -> String {
    let path = dir.path().join("github-rest.yaml");
    fs::write(&path, yaml).expect("Failed to write config");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
api_base_url: https://github.example.com/api/v3
auth_token: secret
per_page: 100
page: 2
timezone: Europe/London
time_period:
  since: "2014-01-01T00:00:00Z"
  until: "2014-06-01T00:00:00Z"
custom_transport_options:
  timeout: 10
  headers:
    Accept: application/vnd.github.v3+json
"#,
    );

    let config = ClientConfig::load(&path).unwrap();

    assert_eq!(config.api_base_url, "https://github.example.com/api/v3");
    assert_eq!(config.auth_token.as_deref(), Some("secret"));
    assert_eq!(config.per_page, 100);
    assert_eq!(config.page, 2);
    assert_eq!(config.timezone, "Europe/London");
    assert_eq!(
        config.time_period,
        Some(TimePeriod::new(
            Some("2014-01-01T00:00:00Z".to_string()),
            Some("2014-06-01T00:00:00Z".to_string()),
        ))
    );
    assert_eq!(config.custom_transport_options.get("timeout"), Some(&json!(10)));
    assert_eq!(
        config.custom_transport_options.get("headers"),
        Some(&json!({"Accept": "application/vnd.github.v3+json"}))
    );
}

#[test]
fn test_load_partial_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "per_page: 50\n");

    let config = ClientConfig::load(&path).unwrap();

    assert_eq!(config.per_page, 50);
    assert_eq!(config.page, 1);
    assert_eq!(config.api_base_url, "https://api.github.com");
    assert_eq!(config.timezone, "UTC");
    assert!(config.auth_token.is_none());
}

#[test]
fn test_load_empty_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    assert_eq!(ClientConfig::load(&path).unwrap(), ClientConfig::default());
}

#[test]
fn test_load_missing_file() {
    let err = ClientConfig::load("/nonexistent/github-rest.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_load_malformed_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "per_page: [not, a, number]\n");

    let err = ClientConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "api_base_url: ftp://example.com\ntimezone: Mars/Olympus\n",
    );

    let message = ClientConfig::load(&path).unwrap_err().to_string();
    assert!(message.starts_with("Invalid configuration:"));
    assert!(message.contains("http:// or https://"));
    assert!(message.contains("Mars/Olympus"));
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.yaml").to_string_lossy().into_owned();

    let config = ClientConfigBuilder::new()
        .with_auth_token("secret".to_string())
        .with_per_page(75)
        .with_timezone("Asia/Tokyo".to_string())
        .with_custom_option("timeout".to_string(), json!(12))
        .build();
    config.save(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("---\n"));
    assert!(!written.contains("secret"));

    let reloaded = ClientConfig::load(&path).unwrap();
    assert_eq!(reloaded.per_page, 75);
    assert_eq!(reloaded.timezone, "Asia/Tokyo");
    assert!(reloaded.auth_token.is_none());
    assert_eq!(
        reloaded.custom_transport_options.get("timeout"),
        Some(&json!(12))
    );
}

#[test]
fn test_builder_time_period() {
    let period = TimePeriod::ending_at("2014-04-01", "1 month", "UTC").unwrap();
    let config = ClientConfigBuilder::new()
        .with_time_period(period.clone())
        .build();

    assert_eq!(config.time_period, Some(period));
    assert!(config.validate().is_ok());
}
