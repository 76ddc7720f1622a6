//! Configuration management command
//!
//! Provides CLI interface to view and edit the handy configuration file.

use crate::system_config::{self, SystemConfig};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

/// List all configuration values
pub fn run_list() -> Result<()> {
    let config = system_config::load()?;
    let config_path = system_config::config_file_path()
        .context("Could not determine config file path")?;

    println!("{}", "Configuration".bold());
    println!("{}: {}\n", "Location".dimmed(), config_path.display().dimmed());

    print_section(&config, "date", &["format", "utc"])?;
    print_section(&config, "random", &["length"])?;
    print_section(&config, "separator", &["group", "symbol"])?;
    print_section(&config, "timing", &["delay_ms"])?;

    println!("\n{}", "Valid Ranges:".bold());
    println!("  random.length: 1-4096");
    println!("  separator.group: 1-16");
    println!("  timing.delay_ms: 1-600,000");

    Ok(())
}

fn print_section(config: &SystemConfig, section: &str, keys: &[&str]) -> Result<()> {
    println!("{}", format!("[{}]", section).yellow());
    for key in keys {
        let value = config.get(&format!("{}.{}", section, key))?;
        println!("  {} = {}", key.cyan(), value);
    }
    Ok(())
}

/// Get a single configuration value
pub fn run_get(key: &str) -> Result<()> {
    let config = system_config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Set a configuration value
pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = system_config::load()?;
    config.set(key, value)?;
    system_config::save(&config)?;

    println!("{} {} = {}", "✓".green(), key.cyan(), value);
    Ok(())
}

/// Show the config file path and optionally create it
pub fn run_path(create: bool) -> Result<()> {
    let config_path = system_config::config_file_path()
        .context("Could not determine config file path")?;

    if create && !config_path.exists() {
        system_config::init_if_missing()?;
        println!("{} Created config file at: {}", "✓".green(), config_path.display());
    } else if config_path.exists() {
        println!("{}", config_path.display());
    } else {
        println!("{}", config_path.display());
        println!("{}", "File does not exist. Use --create to create it.".yellow());
    }

    Ok(())
}

/// Show example configuration
pub fn run_example() -> Result<()> {
    println!("{}", system_config::example_config());
    Ok(())
}
