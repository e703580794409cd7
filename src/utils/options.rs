//! Parsing of `KEY=JSON` custom transport options from the command line

use anyhow::{Result, anyhow};
use serde_json::{Map, Value};

/// Parse a single `KEY=VALUE` pair
///
/// The value is read as JSON when possible (`timeout=10`,
/// `headers={"Accept":"application/vnd.github.v3+json"}`); anything else is
/// kept as a plain string (`method=HEAD`).
pub fn parse_custom_option(input: &str) -> Result<(String, Value)> {
    let (key, raw) = input
        .split_once('=')
        .ok_or_else(|| anyhow!("Custom option must look like KEY=VALUE: '{}'", input))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("Custom option key cannot be empty: '{}'", input));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Parse every `KEY=VALUE` pair, later keys overriding earlier ones
pub fn parse_custom_options(inputs: &[String]) -> Result<Map<String, Value>> {
    let mut options = Map::new();
    for input in inputs {
        let (key, value) = parse_custom_option(input)?;
        options.insert(key, value);
    }
    Ok(options)
}
