//! Rendering with strftime patterns. Null-sentinel dates render as "".

use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::calendar::is_null_or_empty;
use crate::error::{Error, Result};

pub const DEFAULT_MONTH_PATTERN: &str = "%Y-%m";
pub const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d";
pub const DEFAULT_DATE_TIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Formats `value` with `pattern`, or returns "" for a null-sentinel date.
pub fn format_date_time(value: NaiveDateTime, pattern: &str) -> Result<String> {
    if is_null_or_empty(value) {
        return Ok(String::new());
    }

    let mut rendered = String::new();
    write!(rendered, "{}", value.format(pattern))
        .map_err(|_| Error::InvalidPattern(pattern.to_string()))?;
    Ok(rendered)
}

pub fn to_month_string(value: NaiveDateTime, pattern: &str) -> Result<String> {
    format_date_time(value, pattern)
}

pub fn to_date_pattern_string(value: NaiveDateTime, pattern: &str) -> Result<String> {
    format_date_time(value, pattern)
}

pub fn to_date_time_string(value: NaiveDateTime, pattern: &str) -> Result<String> {
    format_date_time(value, pattern)
}

/// Formats a present value, or returns `empty_content` for `None`.
pub fn format_date_time_or(
    value: Option<NaiveDateTime>,
    empty_content: &str,
    pattern: &str,
) -> Result<String> {
    match value {
        Some(value) => format_date_time(value, pattern),
        None => Ok(empty_content.to_string()),
    }
}

pub fn to_month_string_or(value: Option<NaiveDateTime>, empty_content: &str) -> Result<String> {
    format_date_time_or(value, empty_content, DEFAULT_MONTH_PATTERN)
}

pub fn to_date_pattern_string_or(
    value: Option<NaiveDateTime>,
    empty_content: &str,
) -> Result<String> {
    format_date_time_or(value, empty_content, DEFAULT_DATE_PATTERN)
}

pub fn to_date_time_string_or(
    value: Option<NaiveDateTime>,
    empty_content: &str,
) -> Result<String> {
    format_date_time_or(value, empty_content, DEFAULT_DATE_TIME_PATTERN)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::calendar::DB_NULL;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(7, 5, 3).unwrap()
    }

    #[test]
    fn default_patterns() {
        assert_eq!(to_month_string(sample(), DEFAULT_MONTH_PATTERN).unwrap(), "2024-03");
        assert_eq!(to_date_pattern_string(sample(), DEFAULT_DATE_PATTERN).unwrap(), "2024-03-09");
        assert_eq!(
            to_date_time_string(sample(), DEFAULT_DATE_TIME_PATTERN).unwrap(),
            "2024-03-09 07:05:03"
        );
        assert_eq!(to_date_time_string(sample(), "%d/%m/%Y").unwrap(), "09/03/2024");
    }

    #[test]
    fn null_sentinel_renders_empty() {
        assert_eq!(to_date_time_string(DB_NULL, DEFAULT_DATE_TIME_PATTERN).unwrap(), "");
    }

    #[test]
    fn absent_values_use_empty_content() {
        assert_eq!(to_month_string_or(None, "-").unwrap(), "-");
        assert_eq!(to_date_pattern_string_or(Some(sample()), "-").unwrap(), "2024-03-09");
        assert_eq!(to_date_time_string_or(None, "").unwrap(), "");
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(matches!(format_date_time(sample(), "%Q"), Err(Error::InvalidPattern(_))));
    }
}
