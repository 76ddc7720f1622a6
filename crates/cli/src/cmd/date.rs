//! Date formatting and relative time

use crate::system_config::SystemConfig;
use crate::util;
use anyhow::{Context, Result};
use chrono::Utc;
use handy_core::{format_date, format_date_in, relative_time, TimeInput};

/// Format a timestamp (default: now)
pub fn run_format(
    config: &SystemConfig,
    input: Option<&str>,
    format: Option<&str>,
    utc: bool,
) -> Result<()> {
    let input = match input {
        Some(text) => TimeInput::from(text),
        None => TimeInput::Date(Utc::now()),
    };
    let format = format.unwrap_or(config.date.format.as_str());

    let formatted = if utc || config.date.utc {
        format_date_in(&Utc, input, format)
    } else {
        format_date(input, format)
    }
    .context("Failed to format date")?;

    println!("{}", formatted);
    Ok(())
}

/// Print how long ago a timestamp was
pub fn run_ago(input: &str) -> Result<()> {
    let ts_ms = util::parse_timestamp(input)?;
    println!("{}", relative_time(ts_ms));
    Ok(())
}
