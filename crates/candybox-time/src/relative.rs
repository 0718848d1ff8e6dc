//! "3 hours ago" style phrases.

use chrono::{Local, NaiveDateTime};

/// Template placeholders: `{0}` is the count, `{1}` the unit.
pub const DEFAULT_TEMPLATE: &str = "{0} {1} ago";
pub const DEFAULT_JUST_NOW: &str = "Just now";

const JUST_NOW_SECONDS: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// English unit name, singular only for a count of one.
    pub fn name(self, count: i64) -> &'static str {
        let (singular, plural) = match self {
            Self::Second => ("second", "seconds"),
            Self::Minute => ("minute", "minutes"),
            Self::Hour => ("hour", "hours"),
            Self::Day => ("day", "days"),
            Self::Week => ("week", "weeks"),
            Self::Month => ("month", "months"),
            Self::Year => ("year", "years"),
        };
        if count == 1 { singular } else { plural }
    }
}

#[derive(Debug, Clone)]
pub struct RelativeTimeOptions {
    template: String,
    just_now: String,
}

impl Default for RelativeTimeOptions {
    fn default() -> Self { Self::new() }
}

impl RelativeTimeOptions {
    pub fn new() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            just_now: DEFAULT_JUST_NOW.to_string(),
        }
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn just_now(mut self, just_now: impl Into<String>) -> Self {
        self.just_now = just_now.into();
        self
    }
}

/// Picks the unit for an elapsed number of seconds, or `None` for "just now".
///
/// Weeks cover 7 to 29 days, months are 30 days and years 365 days.
pub fn relative_unit(elapsed_seconds: i64) -> Option<(i64, TimeUnit)> {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    let days = elapsed_seconds.div_euclid(DAY);
    Some(match elapsed_seconds {
        s if s < JUST_NOW_SECONDS => return None,
        s if s < MINUTE => (s, TimeUnit::Second),
        s if s < HOUR => (s / MINUTE, TimeUnit::Minute),
        s if s < DAY => (s / HOUR, TimeUnit::Hour),
        _ if days < 7 => (days, TimeUnit::Day),
        _ if days < 30 => (days / 7, TimeUnit::Week),
        _ if days < 365 => (days / 30, TimeUnit::Month),
        _ => (days / 365, TimeUnit::Year),
    })
}

/// Describes how long before `now` the `value` lies.
///
/// Anything under 50 seconds, including future values, is "just now".
pub fn to_relative_time(
    value: NaiveDateTime,
    now: NaiveDateTime,
    options: &RelativeTimeOptions,
) -> String {
    let elapsed = (now - value).num_seconds();
    match relative_unit(elapsed) {
        None => options.just_now.clone(),
        Some((count, unit)) => options
            .template
            .replace("{0}", &count.to_string())
            .replace("{1}", unit.name(count)),
    }
}

/// [`to_relative_time`] against the local clock.
pub fn to_relative_time_from_now(value: NaiveDateTime, options: &RelativeTimeOptions) -> String {
    to_relative_time(value, Local::now().naive_local(), options)
}
