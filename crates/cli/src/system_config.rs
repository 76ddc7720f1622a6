//! User configuration for the handy CLI
//!
//! Stored as TOML at `~/.config/handy/config.toml`; the `HANDY_CONFIG`
//! environment variable points at a different file. A missing file means
//! all defaults.

use anyhow::{Context, Result};
use handy_core::{DEFAULT_DATE_FORMAT, DEFAULT_RANDOM_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "HANDY_CONFIG";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub date: DateConfig,
    pub random: RandomConfig,
    pub separator: SeparatorConfig,
    pub timing: TimingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    /// Pattern for `format-date` (YYYY MM DD HH mm ss)
    pub format: String,
    /// Format in UTC instead of local time
    pub utc: bool,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_DATE_FORMAT.to_string(),
            utc: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Length of `random` strings
    pub length: usize,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_RANDOM_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparatorConfig {
    /// Digits per group
    pub group: usize,
    /// Text inserted between groups
    pub symbol: String,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self {
            group: 3,
            symbol: ",".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Default delay for `debounce` and `throttle` (milliseconds)
    pub delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { delay_ms: 300 }
    }
}

impl SystemConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.date.format.trim().is_empty() {
            anyhow::bail!("date.format must not be empty");
        }
        if !(1..=4096).contains(&self.random.length) {
            anyhow::bail!("random.length must be 1-4096 (got {})", self.random.length);
        }
        if !(1..=16).contains(&self.separator.group) {
            anyhow::bail!("separator.group must be 1-16 (got {})", self.separator.group);
        }
        if !(1..=600_000).contains(&self.timing.delay_ms) {
            anyhow::bail!("timing.delay_ms must be 1-600000 (got {})", self.timing.delay_ms);
        }
        Ok(())
    }

    /// Read a value by dotted key
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "date.format" => self.date.format.clone(),
            "date.utc" => self.date.utc.to_string(),
            "random.length" => self.random.length.to_string(),
            "separator.group" => self.separator.group.to_string(),
            "separator.symbol" => self.separator.symbol.clone(),
            "timing.delay_ms" => self.timing.delay_ms.to_string(),
            _ => anyhow::bail!(
                "Unknown config key: {}. Use 'handy config --list' to see available keys.",
                key
            ),
        };
        Ok(value)
    }

    /// Update a value by dotted key, then validate
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "date.format" => self.date.format = value.to_string(),
            "date.utc" => {
                self.date.utc = value
                    .parse()
                    .context("Invalid value: must be 'true' or 'false'")?;
            }
            "random.length" => {
                self.random.length = value
                    .parse()
                    .context("Invalid value: must be a positive integer")?;
            }
            "separator.group" => {
                self.separator.group = value
                    .parse()
                    .context("Invalid value: must be a positive integer")?;
            }
            "separator.symbol" => self.separator.symbol = value.to_string(),
            "timing.delay_ms" => {
                self.timing.delay_ms = value
                    .parse()
                    .context("Invalid value: must be a positive integer")?;
            }
            _ => anyhow::bail!(
                "Unknown config key: {}. Use 'handy config --list' to see available keys.",
                key
            ),
        }

        self.validate().context("Invalid configuration value")
    }
}

/// Location of the config file
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("handy").join("config.toml"))
}

/// Load configuration, falling back to defaults when the file is absent
pub fn load() -> Result<SystemConfig> {
    let Some(path) = config_file_path() else {
        tracing::debug!("No config directory, using defaults");
        return Ok(SystemConfig::default());
    };

    if !path.exists() {
        tracing::debug!("Config file {} not found, using defaults", path.display());
        return Ok(SystemConfig::default());
    }

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: SystemConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.display()))?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Write configuration to the config file
pub fn save(config: &SystemConfig) -> Result<()> {
    let path = config_file_path().context("Could not determine config file path")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let text = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(&path, text)
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    Ok(())
}

/// Write the default configuration if no file exists yet
pub fn init_if_missing() -> Result<()> {
    let path = config_file_path().context("Could not determine config file path")?;
    if !path.exists() {
        save(&SystemConfig::default())?;
    }
    Ok(())
}

/// Commented example file
pub fn example_config() -> String {
    format!(
        r#"# handy configuration

[date]
# Tokens: YYYY MM DD HH mm ss
format = "{}"
utc = false

[random]
# 1-4096
length = {}

[separator]
# 1-16
group = 3
symbol = ","

[timing]
# 1-600000
delay_ms = 300
"#,
        DEFAULT_DATE_FORMAT, DEFAULT_RANDOM_LENGTH
    )
}
