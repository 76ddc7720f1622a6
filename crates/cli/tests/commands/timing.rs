//! Debounce and throttle over stdin

use crate::handy;
use anyhow::Result;

#[test]
fn test_debounce_emits_last_line_of_burst() -> Result<()> {
    let dir = tempfile::tempdir()?;

    // The whole burst arrives well inside the quiet period; closing stdin flushes it
    let result = handy!(&dir, "debounce", "--delay-ms", "5000")
        .stdin("first\nsecond\nthird\n")
        .assert_success()?;

    assert_eq!(result.lines(), vec!["third"]);
    Ok(())
}

#[test]
fn test_throttle_keeps_first_line_of_window() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let result = handy!(&dir, "throttle", "--delay-ms", "60000")
        .stdin("first\nsecond\nthird\n")
        .assert_success()?;

    assert_eq!(result.lines(), vec!["first"]);
    Ok(())
}

#[test]
fn test_empty_input() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let result = handy!(&dir, "debounce").stdin("").assert_success()?;
    assert!(result.stdout.is_empty());

    let result = handy!(&dir, "throttle").stdin("").assert_success()?;
    assert!(result.stdout.is_empty());
    Ok(())
}
