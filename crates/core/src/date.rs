//! Date formatting and relative time

use crate::error::{Result, UtilError};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Format used when the caller does not supply one
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";

/// Tokens recognised by [`format_date`], matched leftmost first
static TOKENS: Lazy<Regex> =
    Lazy::new(|| Regex::new("YYYY|MM|DD|HH|mm|ss").expect("token pattern is valid"));

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S"];

/// A timestamp as accepted by the date utilities
#[derive(Debug, Clone, PartialEq)]
pub enum TimeInput {
    /// Unix milliseconds
    Millis(i64),
    /// Date text (RFC 3339, `YYYY-MM-DD HH:mm:ss`, `YYYY-MM-DD`, or digits as milliseconds)
    Text(String),
    /// Already resolved instant
    Date(DateTime<Utc>),
}

impl TimeInput {
    /// Resolve to an instant, reading offset-less text as wall time in `tz`
    pub fn resolve<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Utc>> {
        match self {
            TimeInput::Millis(ms) => Utc
                .timestamp_millis_opt(*ms)
                .single()
                .ok_or_else(|| UtilError::invalid_timestamp(ms.to_string())),
            TimeInput::Date(date) => Ok(*date),
            TimeInput::Text(text) => parse_text(text.trim(), tz),
        }
    }
}

fn parse_text<Tz: TimeZone>(text: &str, tz: &Tz) -> Result<DateTime<Utc>> {
    if let Ok(ms) = text.parse::<i64>() {
        return TimeInput::Millis(ms).resolve(tz);
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Ok(date.with_timezone(&Utc));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| UtilError::invalid_timestamp(text))?;

    tracing::trace!("Reading '{}' as wall time", text);

    // Ambiguous wall times (DST fold) resolve to the earlier instant
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|date| date.with_timezone(&Utc))
        .ok_or_else(|| UtilError::invalid_timestamp(text))
}

impl From<i64> for TimeInput {
    fn from(ms: i64) -> Self {
        TimeInput::Millis(ms)
    }
}

impl From<&str> for TimeInput {
    fn from(text: &str) -> Self {
        TimeInput::Text(text.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(text: String) -> Self {
        TimeInput::Text(text)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimeInput {
    fn from(date: DateTime<Tz>) -> Self {
        TimeInput::Date(date.with_timezone(&Utc))
    }
}

/// Format a timestamp in local time
///
/// Substitutes `YYYY`, `MM`, `DD`, `HH`, `mm` and `ss` in `format` with the
/// zero-padded year, month, day, hour, minute and second.
///
/// # Example
/// ```no_run
/// use handy_core::format_date;
///
/// let text = format_date(1_704_292_200_000i64, "YYYY-MM-DD")?;
/// # Ok::<(), handy_core::UtilError>(())
/// ```
pub fn format_date(input: impl Into<TimeInput>, format: &str) -> Result<String> {
    format_date_in(&Local, input, format)
}

/// Format a timestamp in the given timezone
pub fn format_date_in<Tz: TimeZone>(
    tz: &Tz,
    input: impl Into<TimeInput>,
    format: &str,
) -> Result<String> {
    let input: TimeInput = input.into();
    let date = input.resolve(tz)?.with_timezone(tz);

    let formatted = TOKENS.replace_all(format, |caps: &Captures| match &caps[0] {
        "YYYY" => format!("{:04}", date.year()),
        "MM" => format!("{:02}", date.month()),
        "DD" => format!("{:02}", date.day()),
        "HH" => format!("{:02}", date.hour()),
        "mm" => format!("{:02}", date.minute()),
        "ss" => format!("{:02}", date.second()),
        other => other.to_string(),
    });

    Ok(formatted.into_owned())
}

/// Convert a date to Unix milliseconds
pub fn to_timestamp<Tz: TimeZone>(date: &DateTime<Tz>) -> i64 {
    date.timestamp_millis()
}

/// Current time as Unix milliseconds
pub fn now_timestamp() -> i64 {
    to_timestamp(&Utc::now())
}

/// Describe how long ago `ts_ms` was, relative to `now_ms` ("3 minutes ago")
pub fn time_ago(ts_ms: i64, now_ms: i64) -> String {
    if ts_ms > now_ms {
        return "in the future".to_string();
    }

    // Spans wider than i64 saturate into the years branch
    let seconds = now_ms.saturating_sub(ts_ms) / 1000;

    if seconds < 60 {
        ago(seconds, "second")
    } else if seconds < 3600 {
        ago(seconds / 60, "minute")
    } else if seconds < 86400 {
        ago(seconds / 3600, "hour")
    } else if seconds < 365 * 86400 {
        ago(seconds / 86400, "day")
    } else {
        ago(seconds / (365 * 86400), "year")
    }
}

/// Describe how long ago `ts_ms` was, relative to the current time
pub fn relative_time(ts_ms: i64) -> String {
    time_ago(ts_ms, now_timestamp())
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
