//! Configuration command and config-driven defaults

use crate::handy;
use anyhow::Result;

#[test]
fn test_defaults_without_file() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let result = handy!(&dir, "config", "--get", "date.format").assert_success()?;
    assert_eq!(result.output(), "YYYY-MM-DD HH:mm:ss");

    let result = handy!(&dir, "random").assert_success()?;
    assert_eq!(result.output().len(), 10);
    Ok(())
}

#[test]
fn test_set_then_use() -> Result<()> {
    let dir = tempfile::tempdir()?;

    handy!(&dir, "config", "--set", "random.length", "24").assert_success()?;
    handy!(&dir, "config", "--set", "separator.symbol", "_").assert_success()?;
    assert!(dir.path().join("config.toml").exists());

    let result = handy!(&dir, "config", "--get", "random.length").assert_success()?;
    assert_eq!(result.output(), "24");

    let result = handy!(&dir, "random").assert_success()?;
    assert_eq!(result.output().len(), 24);

    let result = handy!(&dir, "separator", "1000000").assert_success()?;
    assert_eq!(result.output(), "1_000_000");
    Ok(())
}

#[test]
fn test_set_rejects_invalid_values() -> Result<()> {
    let dir = tempfile::tempdir()?;

    handy!(&dir, "config", "--set", "random.length", "0").assert_failure()?;
    handy!(&dir, "config", "--set", "no.such.key", "1").assert_failure()?;
    handy!(&dir, "config", "--get", "no.such.key").assert_failure()?;
    assert!(!dir.path().join("config.toml").exists());
    Ok(())
}

#[test]
fn test_invalid_file_is_reported() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("config.toml"), "[random]\nlength = 0\n")?;

    let result = handy!(&dir, "uuid").assert_failure()?;
    assert!(result.contains_stderr("Invalid config"), "stderr: {}", result.stderr);
    Ok(())
}

#[test]
fn test_path_create_and_example() -> Result<()> {
    let dir = tempfile::tempdir()?;

    handy!(&dir, "config", "--path", "--create").assert_success()?;
    let text = std::fs::read_to_string(dir.path().join("config.toml"))?;
    assert!(text.contains("[date]"));

    let result = handy!(&dir, "config", "--example").assert_success()?;
    assert!(result.stdout.contains("delay_ms = 300"));
    Ok(())
}
