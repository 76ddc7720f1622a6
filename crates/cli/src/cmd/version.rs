//! Version comparison

use anyhow::{Context, Result};
use handy_core::compare_version;

/// Print -1, 0 or 1
pub fn run(a: &str, b: &str) -> Result<()> {
    let ordering = compare_version(a, b).context("Failed to compare versions")?;
    println!("{}", ordering as i32);
    Ok(())
}
