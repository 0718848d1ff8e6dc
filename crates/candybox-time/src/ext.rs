use candybox_text::Culture;
use chrono::NaiveDateTime;

use crate::error::Result;
use crate::relative::RelativeTimeOptions;
use crate::styles::DateTimeStyles;
use crate::{calendar, format, parse, relative};

/// Date parsing as methods on `str`.
pub trait DateStrExt {
    fn is_date_time(&self, culture: Option<&Culture>, styles: DateTimeStyles) -> bool;
    fn to_date_time(&self) -> Result<NaiveDateTime>;
    fn to_date_time_with_pattern(
        &self,
        pattern: &str,
        default: Option<NaiveDateTime>,
    ) -> Option<NaiveDateTime>;
}

impl DateStrExt for str {
    fn is_date_time(&self, culture: Option<&Culture>, styles: DateTimeStyles) -> bool {
        parse::is_date_time(self, culture, styles)
    }

    fn to_date_time(&self) -> Result<NaiveDateTime> { parse::to_date_time(self) }

    fn to_date_time_with_pattern(
        &self,
        pattern: &str,
        default: Option<NaiveDateTime>,
    ) -> Option<NaiveDateTime> {
        parse::to_date_time_with_pattern(self, pattern, default)
    }
}

/// Calendar helpers as methods on `NaiveDateTime`.
pub trait DateTimeExt {
    fn to_date_with_min_time(self) -> NaiveDateTime;
    fn to_date_with_max_time(self) -> Result<NaiveDateTime>;
    fn to_sql_server_safe_date_time(self) -> NaiveDateTime;
    fn first_day_of_month(self) -> NaiveDateTime;
    fn last_day_of_month(self, subtract_millis: i64) -> Result<NaiveDateTime>;
    fn is_weekend(self) -> bool;
    fn is_working_day(self) -> bool;
    fn is_null_or_empty(self) -> bool;
    fn to_date_time_string(self) -> Result<String>;
    fn to_relative_time(self, now: NaiveDateTime) -> String;
}

impl DateTimeExt for NaiveDateTime {
    fn to_date_with_min_time(self) -> NaiveDateTime { calendar::to_date_with_min_time(self) }

    fn to_date_with_max_time(self) -> Result<NaiveDateTime> {
        calendar::to_date_with_max_time(self)
    }

    fn to_sql_server_safe_date_time(self) -> NaiveDateTime {
        calendar::to_sql_server_safe_date_time(self)
    }

    fn first_day_of_month(self) -> NaiveDateTime { calendar::first_day_of_month(self) }

    fn last_day_of_month(self, subtract_millis: i64) -> Result<NaiveDateTime> {
        calendar::last_day_of_month(self, subtract_millis)
    }

    fn is_weekend(self) -> bool { calendar::is_weekend(self) }

    fn is_working_day(self) -> bool { calendar::is_working_day(self) }

    fn is_null_or_empty(self) -> bool { calendar::is_null_or_empty(self) }

    fn to_date_time_string(self) -> Result<String> {
        format::to_date_time_string(self, format::DEFAULT_DATE_TIME_PATTERN)
    }

    fn to_relative_time(self, now: NaiveDateTime) -> String {
        relative::to_relative_time(self, now, &RelativeTimeOptions::default())
    }
}
