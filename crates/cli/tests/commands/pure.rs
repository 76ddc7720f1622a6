//! Pure utility commands

use crate::handy;
use anyhow::Result;

#[test]
fn test_empty_values() -> Result<()> {
    let dir = tempfile::tempdir()?;

    for input in ["null", "\"\"", "   ", "[]", "{}"] {
        let result = handy!(&dir, "empty", input).assert_success()?;
        assert_eq!(result.output(), "true", "input: {:?}", input);
    }

    for input in ["test", "[1,2]", "{\"a\":1}", "123", "0", "false"] {
        let result = handy!(&dir, "empty", input).assert_success()?;
        assert_eq!(result.output(), "false", "input: {:?}", input);
    }
    Ok(())
}

#[test]
fn test_is_array_and_clone() -> Result<()> {
    let dir = tempfile::tempdir()?;

    assert_eq!(handy!(&dir, "is-array", "[1]").assert_success()?.output(), "true");
    assert_eq!(handy!(&dir, "is-array", "{}").assert_success()?.output(), "false");

    let result = handy!(&dir, "deep-clone", r#"{"b":[1,{"c":2}],"a":"x"}"#).assert_success()?;
    assert_eq!(result.output(), r#"{"a":"x","b":[1,{"c":2}]}"#);
    Ok(())
}

#[test]
fn test_calc_is_exact() -> Result<()> {
    let dir = tempfile::tempdir()?;

    assert_eq!(handy!(&dir, "calc", "add", "0.1", "0.2").assert_success()?.output(), "0.3");
    assert_eq!(handy!(&dir, "calc", "sub", "0.3", "0.1").assert_success()?.output(), "0.2");
    assert_eq!(handy!(&dir, "calc", "mul", "0.1", "0.2").assert_success()?.output(), "0.02");
    assert_eq!(handy!(&dir, "calc", "div", "0.3", "0.1").assert_success()?.output(), "3");
    assert_eq!(handy!(&dir, "calc", "add", "-0.1", "0.3").assert_success()?.output(), "0.2");
    assert_eq!(handy!(&dir, "calc", "div", "1", "0").assert_success()?.output(), "inf");

    handy!(&dir, "calc", "pow", "1", "2").assert_failure()?;
    Ok(())
}

#[test]
fn test_compare_versions() -> Result<()> {
    let dir = tempfile::tempdir()?;

    assert_eq!(handy!(&dir, "compare", "1.0.0", "1.0.1").assert_success()?.output(), "-1");
    assert_eq!(handy!(&dir, "compare", "1.0.1", "1.0.0").assert_success()?.output(), "1");
    assert_eq!(handy!(&dir, "compare", "1.0.0", "1.0.0").assert_success()?.output(), "0");
    assert_eq!(handy!(&dir, "compare", "1.2", "1.2.0").assert_success()?.output(), "0");

    let result = handy!(&dir, "compare", "1.x", "1.0").assert_failure()?;
    assert!(result.contains_stderr("Invalid version"), "stderr: {}", result.stderr);
    Ok(())
}

#[test]
fn test_format_date_utc() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let result = handy!(&dir, "format-date", "1704292205000", "--utc").assert_success()?;
    assert_eq!(result.output(), "2024-01-03 14:30:05");

    let result =
        handy!(&dir, "format-date", "2024-01-03T14:30:05Z", "--utc", "--format", "DD/MM/YYYY")
            .assert_success()?;
    assert_eq!(result.output(), "03/01/2024");

    handy!(&dir, "format-date", "not a date").assert_failure()?;
    Ok(())
}

#[test]
fn test_ago() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let result = handy!(&dir, "ago", "2000-01-01T00:00:00Z").assert_success()?;
    assert!(result.output().ends_with("years ago"), "got: {}", result.output());
    Ok(())
}

#[test]
fn test_random_generators() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let result = handy!(&dir, "random", "--length", "16", "-n", "3").assert_success()?;
    let lines = result.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.len() == 16));

    let result = handy!(&dir, "uuid").assert_success()?;
    assert_eq!(result.output().len(), 36);
    assert_eq!(&result.output()[14..15], "4");

    let result = handy!(&dir, "color", "-n", "5").assert_success()?;
    assert!(result.lines().iter().all(|c| c.len() == 7 && c.starts_with('#')));

    let result = handy!(&dir, "int", "-5", "5", "-n", "20").assert_success()?;
    for line in result.lines() {
        let n: i64 = line.parse()?;
        assert!((-5..=5).contains(&n));
    }
    Ok(())
}

#[test]
fn test_unique_and_url() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let result = handy!(&dir, "unique", "b", "a", "b", "c", "a").assert_success()?;
    assert_eq!(result.lines(), vec!["b", "a", "c"]);

    let result = handy!(&dir, "url", "https://example.com/s?x=1", "q=a b", "page=2")
        .assert_success()?;
    assert_eq!(result.output(), "https://example.com/s?x=1&q=a+b&page=2");

    handy!(&dir, "url", "/s", "missing-equals").assert_failure()?;
    Ok(())
}

#[test]
fn test_values_with_leading_hyphen() -> Result<()> {
    let dir = tempfile::tempdir()?;

    assert_eq!(handy!(&dir, "empty", "-1").assert_success()?.output(), "false");
    assert_eq!(handy!(&dir, "is-array", "-1").assert_success()?.output(), "false");
    assert_eq!(handy!(&dir, "deep-clone", "-1").assert_success()?.output(), "-1");

    let result = handy!(&dir, "unique", "-a", "b", "-a").assert_success()?;
    assert_eq!(result.lines(), vec!["-a", "b"]);

    let result = handy!(&dir, "url", "/s", "-x=1").assert_success()?;
    assert_eq!(result.output(), "/s?-x=1");
    Ok(())
}

#[test]
fn test_separator_and_chinese() -> Result<()> {
    let dir = tempfile::tempdir()?;

    assert_eq!(
        handy!(&dir, "separator", "1234567.89").assert_success()?.output(),
        "1,234,567.89"
    );
    assert_eq!(
        handy!(&dir, "separator", "-12345678", "-g", "4", "-s", " ").assert_success()?.output(),
        "-1234 5678"
    );
    assert_eq!(handy!(&dir, "chinese", "2024").assert_success()?.output(), "二零二四");
    handy!(&dir, "chinese", "abc").assert_failure()?;
    Ok(())
}
