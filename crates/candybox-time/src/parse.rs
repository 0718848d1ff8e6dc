//! Lenient, culture-aware date parsing and exact pattern parsing.
//!
//! Accepted shapes, tried in order:
//!
//! - RFC 3339 and RFC 2822, plus `yyyy-MM-dd HH:mm:ss +hh:mm`
//! - numeric dates (`/`, `-` or `.` separated) in the culture's field order,
//!   always year first when the first field has more than two digits,
//!   optionally followed by a time
//! - English month names (`January 31, 2024`, `31 Jan 2024`)
//! - a bare time, dated today unless [`DateTimeStyles::NO_CURRENT_DATE_DEFAULT`]

use candybox_text::blank::is_blank;
use candybox_text::{Culture, DateOrder};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::calendar::DB_NULL;
use crate::error::{Error, Result};
use crate::styles::DateTimeStyles;

/// Pattern used by [`to_date_time_with_pattern`] callers with no preference.
pub const DEFAULT_PARSE_PATTERN: &str = "%Y-%m-%d";

static NUMERIC_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?<a>\d{1,4})(?<s1>[/.\-])(?<b>\d{1,2})(?<s2>[/.\-])(?<c>\d{1,4})(?:(?:\s+|T)(?<time>.+))?$",
    )
    .unwrap()
});

static TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?<h>\d{1,2}):(?<m>\d{1,2})(?::(?<s>\d{1,2})(?:\.(?<f>\d{1,7}))?)?(?:\s*(?<meridiem>[AaPp][Mm]))?$",
    )
    .unwrap()
});

const NAMED_DATE_FORMATS: [&str; 4] = ["%B %d, %Y", "%d %B %Y", "%B %d %Y", "%A, %B %d, %Y"];

const NAMED_TIME_SUFFIXES: [&str; 4] = [" %H:%M:%S", " %H:%M", " %I:%M:%S %p", " %I:%M %p"];

enum Parsed {
    Naive(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

/// Parses `value` as a date and time.
///
/// `None` for `culture` means the invariant culture (month before day).
/// Values that carry an offset are converted to local time, or to UTC with
/// [`DateTimeStyles::ADJUST_TO_UNIVERSAL`].
pub fn parse_date_time(
    value: &str,
    culture: Option<&Culture>,
    styles: DateTimeStyles,
) -> Result<NaiveDateTime> {
    if !styles.is_valid() {
        return Err(Error::InvalidStyles(styles.to_string()));
    }
    if is_blank(value) {
        return Err(Error::InvalidDateTime(value.to_string()));
    }

    let order = culture.map_or(DateOrder::MonthDayYear, Culture::date_order);
    let parsed = parse_parts(value.trim(), order, styles).ok_or_else(|| {
        tracing::debug!(value, ?order, "unrecognized date time");
        Error::InvalidDateTime(value.to_string())
    })?;

    interpret(parsed, styles).ok_or_else(|| Error::InvalidDateTime(value.to_string()))
}

/// Returns `true` when [`parse_date_time`] succeeds. Blank input is `false`.
pub fn is_date_time(value: &str, culture: Option<&Culture>, styles: DateTimeStyles) -> bool {
    !is_blank(value) && parse_date_time(value, culture, styles).is_ok()
}

/// Returns `true` for a date after the 1900-01-01 database null sentinel.
pub fn is_non_null_date_time(value: &str) -> bool {
    to_date_time(value).is_ok_and(|parsed| parsed > DB_NULL)
}

/// Parses with the invariant culture and no styles.
pub fn to_date_time(value: &str) -> Result<NaiveDateTime> {
    parse_date_time(value, None, DateTimeStyles::NONE)
}

/// Blank input is `None`; unparseable input is `default`.
pub fn to_date_time_or(value: &str, default: Option<NaiveDateTime>) -> Option<NaiveDateTime> {
    if is_blank(value) {
        return None;
    }
    to_date_time(value).ok().or(default)
}

/// Parses `value` with a `chrono` strftime `pattern`, exactly.
///
/// Date-only patterns produce midnight.
pub fn parse_with_pattern(value: &str, pattern: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, pattern).or_else(|source| {
        NaiveDate::parse_from_str(value, pattern)
            .map(|date| date.and_time(NaiveTime::MIN))
            .map_err(|_| Error::PatternMismatch {
                value: value.to_string(),
                pattern: pattern.to_string(),
                source,
            })
    })
}

/// Like [`parse_with_pattern`], returning `default` on any failure.
pub fn to_date_time_with_pattern(
    value: &str,
    pattern: &str,
    default: Option<NaiveDateTime>,
) -> Option<NaiveDateTime> {
    if is_blank(value) {
        return default;
    }
    parse_with_pattern(value, pattern).ok().or(default)
}

fn parse_parts(value: &str, order: DateOrder, styles: DateTimeStyles) -> Option<Parsed> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(Parsed::Offset(parsed));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Some(Parsed::Offset(parsed));
    }
    if let Ok(parsed) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S %:z") {
        return Some(Parsed::Offset(parsed));
    }

    if let Some(caps) = NUMERIC_DATE_REGEX.captures(value) {
        if caps["s1"] != caps["s2"] {
            return None;
        }
        let date = numeric_date(&caps["a"], &caps["b"], &caps["c"], order)?;
        let time = match caps.name("time") {
            Some(time) => parse_time(time.as_str())?,
            None => NaiveTime::MIN,
        };
        return Some(Parsed::Naive(date.and_time(time)));
    }

    if let Some(parsed) = named_date(value) {
        return Some(Parsed::Naive(parsed));
    }

    let time = parse_time(value)?;
    let date = if styles.contains(DateTimeStyles::NO_CURRENT_DATE_DEFAULT) {
        NaiveDate::from_ymd_opt(1, 1, 1)?
    } else {
        Local::now().date_naive()
    };
    Some(Parsed::Naive(date.and_time(time)))
}

fn numeric_date(a: &str, b: &str, c: &str, order: DateOrder) -> Option<NaiveDate> {
    let (year, month, day) = if a.len() > 2 {
        (a, b, c)
    } else {
        match order {
            DateOrder::MonthDayYear => (c, a, b),
            DateOrder::DayMonthYear => (c, b, a),
            DateOrder::YearMonthDay => (a, b, c),
        }
    };

    let year = expand_year(year)?;
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

/// Two-digit years fall in 1950..=2049.
fn expand_year(field: &str) -> Option<i32> {
    let year: i32 = field.parse().ok()?;
    Some(match field.len() {
        1 | 2 if year <= 49 => 2000 + year,
        1 | 2 => 1900 + year,
        _ => year,
    })
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    let caps = TIME_REGEX.captures(value.trim())?;

    let mut hour: u32 = caps["h"].parse().ok()?;
    let minute: u32 = caps["m"].parse().ok()?;
    let second: u32 = caps.name("s").map_or(Some(0), |s| s.as_str().parse().ok())?;
    let nanos: u32 = match caps.name("f") {
        Some(fraction) => format!("{:0<9}", fraction.as_str()).parse().ok()?,
        None => 0,
    };

    if let Some(meridiem) = caps.name("meridiem") {
        if hour == 0 || hour > 12 {
            return None;
        }
        let pm = meridiem.as_str().eq_ignore_ascii_case("pm");
        hour = hour % 12 + if pm { 12 } else { 0 };
    }

    NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
}

fn named_date(value: &str) -> Option<NaiveDateTime> {
    for date_format in NAMED_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, date_format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
        for time_format in NAMED_TIME_SUFFIXES {
            let format = format!("{}{}", date_format, time_format);
            if let Ok(parsed) = NaiveDateTime::parse_from_str(value, &format) {
                return Some(parsed);
            }
        }
    }
    None
}

fn interpret(parsed: Parsed, styles: DateTimeStyles) -> Option<NaiveDateTime> {
    let adjust = styles.contains(DateTimeStyles::ADJUST_TO_UNIVERSAL);
    match parsed {
        Parsed::Offset(value) if adjust => Some(value.naive_utc()),
        Parsed::Offset(value) => Some(value.with_timezone(&Local).naive_local()),
        Parsed::Naive(value) if styles.contains(DateTimeStyles::ASSUME_UNIVERSAL) => {
            if adjust {
                Some(value)
            } else {
                Some(Utc.from_utc_datetime(&value).with_timezone(&Local).naive_local())
            }
        }
        Parsed::Naive(value) if adjust && styles.contains(DateTimeStyles::ASSUME_LOCAL) => {
            Local
                .from_local_datetime(&value)
                .earliest()
                .map(|local| local.naive_utc())
        }
        Parsed::Naive(value) => Some(value),
    }
}
