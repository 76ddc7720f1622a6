//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use chrono::Local;
use handy_core::{TimeInput, Value};

/// Read a command-line argument as a dynamic value
///
/// Valid JSON is decoded (`null`, `[]`, `{"a":1}`, `42`); anything else is
/// taken as a plain string.
pub fn parse_value(input: &str) -> Value {
    match Value::from_json_str(input) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Argument is not JSON ({}), treating as string", e);
            Value::String(input.to_string())
        }
    }
}

/// Resolve a timestamp argument (milliseconds or date text) to Unix milliseconds
pub fn parse_timestamp(input: &str) -> Result<i64> {
    let date = TimeInput::from(input)
        .resolve(&Local)
        .with_context(|| format!("Could not read '{}' as a timestamp", input))?;
    Ok(date.timestamp_millis())
}

/// Split a `key=value` argument
pub fn parse_pair(input: &str) -> Result<(String, String)> {
    let (key, value) = input
        .split_once('=')
        .with_context(|| format!("Expected key=value, got '{}'", input))?;
    if key.is_empty() {
        anyhow::bail!("Empty key in '{}'", input);
    }
    Ok((key.to_string(), value.to_string()))
}
