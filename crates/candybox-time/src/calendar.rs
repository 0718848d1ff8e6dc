//! Day boundaries, SQL Server ranges and calendar arithmetic.

use chrono::{Datelike, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};

use crate::error::{Error, Result};

const fn date_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
    milli: u32,
) -> NaiveDateTime {
    let date = match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid date constant"),
    };
    let time = match NaiveTime::from_hms_milli_opt(hour, min, sec, milli) {
        Some(time) => time,
        None => panic!("invalid time constant"),
    };
    NaiveDateTime::new(date, time)
}

/// Sentinel databases use for "no date"; anything at or before it is empty.
pub const DB_NULL: NaiveDateTime = date_time(1900, 1, 1, 0, 0, 0, 0);

/// Smallest value of the SQL Server `datetime` type.
pub const SQL_SERVER_MIN: NaiveDateTime = date_time(1753, 1, 1, 0, 0, 0, 0);

/// Largest value of the SQL Server `datetime` type.
pub const SQL_SERVER_MAX: NaiveDateTime = date_time(9999, 12, 31, 23, 59, 59, 997);

pub fn sql_server_min_value() -> NaiveDateTime { SQL_SERVER_MIN }

pub fn sql_server_max_value() -> NaiveDateTime { SQL_SERVER_MAX }

/// Clamps into the SQL Server `datetime` range.
pub fn to_sql_server_safe_date_time(value: NaiveDateTime) -> NaiveDateTime {
    value.clamp(SQL_SERVER_MIN, SQL_SERVER_MAX)
}

/// Like [`to_sql_server_safe_date_time`]; `None` becomes the minimum.
pub fn to_sql_server_safe_date_time_opt(value: Option<NaiveDateTime>) -> NaiveDateTime {
    value.map_or(SQL_SERVER_MIN, to_sql_server_safe_date_time)
}

/// Midnight of the same day.
pub fn to_date_with_min_time(value: NaiveDateTime) -> NaiveDateTime {
    value.date().and_time(NaiveTime::MIN)
}

/// The last millisecond of the same day.
pub fn to_date_with_max_time(value: NaiveDateTime) -> Result<NaiveDateTime> {
    to_date_with_min_time(value)
        .checked_add_signed(TimeDelta::days(1) - TimeDelta::milliseconds(1))
        .ok_or(Error::OutOfRange(value))
}

/// One second short of 24 hours later. The time of day is kept.
pub fn to_system_date_with_max_time(value: NaiveDateTime) -> Result<NaiveDateTime> {
    value
        .checked_add_signed(TimeDelta::days(1) - TimeDelta::seconds(1))
        .ok_or(Error::OutOfRange(value))
}

/// Completed years between `birth` and `today`; zero for future births.
pub fn age(birth: NaiveDate, today: NaiveDate) -> u32 {
    if birth > today {
        return 0;
    }

    let years = u32::try_from(today.year() - birth.year()).unwrap_or(0);
    // Feb 29 birthdays fall on Feb 28 in common years
    let anniversary = birth.checked_add_months(Months::new(years * 12));
    match anniversary {
        Some(anniversary) if today < anniversary => years - 1,
        _ => years,
    }
}

/// [`age`] as of the local date.
pub fn age_today(birth: NaiveDate) -> u32 { age(birth, Local::now().date_naive()) }

pub fn is_weekend(value: impl Datelike) -> bool {
    matches!(value.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_working_day(value: impl Datelike) -> bool { !is_weekend(value) }

/// `true` at or before [`DB_NULL`].
pub fn is_null_or_empty(value: NaiveDateTime) -> bool { value <= DB_NULL }

/// Midnight on the first day of the month.
pub fn first_day_of_month(value: NaiveDateTime) -> NaiveDateTime {
    let date = value.date();
    date.with_day(1).unwrap_or(date).and_time(NaiveTime::MIN)
}

/// The start of next month minus `subtract_millis` milliseconds.
pub fn last_day_of_month(value: NaiveDateTime, subtract_millis: i64) -> Result<NaiveDateTime> {
    first_day_of_month(value)
        .checked_add_months(Months::new(1))
        .zip(TimeDelta::try_milliseconds(subtract_millis))
        .and_then(|(next, delta)| next.checked_sub_signed(delta))
        .ok_or(Error::OutOfRange(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, mi, s).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

    #[test]
    fn day_boundaries() {
        let value = at(2024, 5, 17, 13, 45, 0);
        assert_eq!(to_date_with_min_time(value), at(2024, 5, 17, 0, 0, 0));
        assert_eq!(
            to_date_with_max_time(value).unwrap(),
            day(2024, 5, 17).and_hms_milli_opt(23, 59, 59, 999).unwrap()
        );
        assert_eq!(to_system_date_with_max_time(value).unwrap(), at(2024, 5, 18, 13, 44, 59));
        assert_eq!(Some(value).map(to_date_with_min_time), Some(at(2024, 5, 17, 0, 0, 0)));
    }

    #[test]
    fn sql_server_clamp() {
        assert_eq!(to_sql_server_safe_date_time(at(1600, 1, 1, 0, 0, 0)), sql_server_min_value());
        assert_eq!(
            to_sql_server_safe_date_time(NaiveDateTime::MAX),
            sql_server_max_value()
        );
        let inside = at(2024, 1, 1, 0, 0, 0);
        assert_eq!(to_sql_server_safe_date_time(inside), inside);
        assert_eq!(to_sql_server_safe_date_time_opt(None), at(1753, 1, 1, 0, 0, 0));
    }

    #[test]
    fn ages() {
        assert_eq!(age(day(2000, 6, 15), day(2024, 6, 14)), 23);
        assert_eq!(age(day(2000, 6, 15), day(2024, 6, 15)), 24);
        assert_eq!(age(day(2000, 2, 29), day(2023, 2, 28)), 23);
        assert_eq!(age(day(2030, 1, 1), day(2024, 1, 1)), 0);
    }

    #[test]
    fn weekends() {
        assert!(is_weekend(day(2024, 6, 15)));
        assert!(is_weekend(at(2024, 6, 16, 9, 0, 0)));
        assert!(is_working_day(day(2024, 6, 17)));
    }

    #[test]
    fn null_sentinel() {
        assert!(is_null_or_empty(DB_NULL));
        assert!(is_null_or_empty(NaiveDateTime::MIN));
        assert!(!is_null_or_empty(at(1900, 1, 1, 0, 0, 1)));
    }

    #[test]
    fn month_bounds() {
        let value = at(2024, 2, 17, 13, 45, 0);
        assert_eq!(first_day_of_month(value), at(2024, 2, 1, 0, 0, 0));
        assert_eq!(
            last_day_of_month(value, 1).unwrap(),
            day(2024, 2, 29).and_hms_milli_opt(23, 59, 59, 999).unwrap()
        );
        assert_eq!(
            last_day_of_month(at(2024, 12, 5, 0, 0, 0), 0).unwrap(),
            at(2025, 1, 1, 0, 0, 0)
        );
    }

    #[test]
    fn shifts_past_the_calendar_are_errors() {
        let max = NaiveDateTime::MAX;
        assert!(matches!(to_date_with_max_time(max), Err(Error::OutOfRange(v)) if v == max));
        assert!(matches!(to_system_date_with_max_time(max), Err(Error::OutOfRange(_))));
        assert!(matches!(last_day_of_month(max, 1), Err(Error::OutOfRange(_))));

        let value = at(2024, 2, 10, 0, 0, 0);
        assert!(matches!(last_day_of_month(value, i64::MAX), Err(Error::OutOfRange(_))));
        assert!(matches!(last_day_of_month(value, i64::MIN), Err(Error::OutOfRange(_))));

        let min = NaiveDateTime::MIN;
        assert_eq!(to_date_with_max_time(min).unwrap().date(), min.date());
    }
}
