//! Text and collection helpers

use crate::util;
use anyhow::Result;
use handy_core::{join_url_params, number_to_chinese, separator, unique};

/// Print items with duplicates removed, one per line
pub fn run_unique(items: &[String]) -> Result<()> {
    for item in unique(items) {
        println!("{}", item);
    }
    Ok(())
}

/// Print `base` with `key=value` params appended
pub fn run_url(base: &str, params: &[String]) -> Result<()> {
    let pairs = params
        .iter()
        .map(|p| util::parse_pair(p))
        .collect::<Result<Vec<_>>>()?;
    println!("{}", join_url_params(base, pairs));
    Ok(())
}

pub fn run_separator(value: &str, group: usize, symbol: &str) -> Result<()> {
    println!("{}", separator(value, group, symbol));
    Ok(())
}

pub fn run_chinese(value: &str) -> Result<()> {
    let numeric = value.parse::<f64>().is_ok()
        && value.chars().all(|c| c.is_ascii_digit() || c == '-' || c == '.');
    if !numeric {
        anyhow::bail!("Not a number: '{}'", value);
    }
    println!("{}", number_to_chinese(value));
    Ok(())
}
