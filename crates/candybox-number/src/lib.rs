//! Numeric formatting helpers.
//!
//! - `size.rs` - Byte counts as `"512 bytes"`, `"1KB"` ... `"16EB"`
//! - `range.rs` - Inclusive range and list membership checks

pub use self::error::{Error, Result};
pub use self::range::{between, is_in};
pub use self::size::{ToFileSizeString, f32_to_decimal, f64_to_decimal, format_file_size};

mod error;
pub mod range;
pub mod size;
