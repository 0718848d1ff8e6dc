//! Date and time helpers over `chrono` naive values.
//!
//! - `parse.rs` - Culture-aware lenient parsing and exact pattern parsing
//! - `styles.rs` - `DateTimeStyles` flags
//! - `relative.rs` - "3 hours ago" phrases
//! - `calendar.rs` - Day/month boundaries, SQL Server range, age, weekends
//! - `format.rs` - Pattern rendering with null-sentinel handling

pub use self::calendar::{DB_NULL, SQL_SERVER_MAX, SQL_SERVER_MIN};
pub use self::error::{Error, Result};
pub use self::ext::{DateStrExt, DateTimeExt};
pub use self::parse::{is_date_time, parse_date_time, to_date_time, to_date_time_with_pattern};
pub use self::relative::{RelativeTimeOptions, to_relative_time, to_relative_time_from_now};
pub use self::styles::DateTimeStyles;
pub use candybox_text::Culture;

pub mod calendar;
mod error;
mod ext;
pub mod format;
pub mod parse;
pub mod relative;
mod styles;
