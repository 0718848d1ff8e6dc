//! Byte counts as human-readable sizes.
//!
//! Every input is converted to [`Decimal`] first, so integers, floats and
//! decimals of the same magnitude render identically.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Error, Result};

const KB: u64 = 1024;

/// Units above bytes, each 1024 times the previous.
pub const UNITS: [&str; 6] = ["KB", "MB", "GB", "TB", "PB", "EB"];

/// Formats `size` with zero decimals in the largest unit it reaches:
/// `"512 bytes"`, `"1KB"`, `"16EB"`.
pub fn format_file_size(size: Decimal) -> Result<String> {
    if size < Decimal::ZERO {
        return Err(Error::NegativeSize(size.to_string()));
    }

    let step = Decimal::from(KB);
    if size < step {
        return Ok(format!("{} bytes", round(size)));
    }

    let mut threshold = step;
    let mut unit = UNITS[0];
    for next_unit in &UNITS[1..] {
        let next = threshold * step;
        if size < next {
            break;
        }
        threshold = next;
        unit = *next_unit;
    }
    Ok(format!("{}{}", round(size / threshold), unit))
}

fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts to a decimal with 7 significant digits.
pub fn f32_to_decimal(value: f32) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(Error::NotFinite(f64::from(value)));
    }
    float_to_decimal(f64::from(value), Decimal::from_f32_retain(value), 7)
}

/// Converts to a decimal with 15 significant digits.
pub fn f64_to_decimal(value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(Error::NotFinite(value));
    }
    float_to_decimal(value, Decimal::from_f64_retain(value), 15)
}

fn float_to_decimal(value: f64, exact: Option<Decimal>, digits: u32) -> Result<Decimal> {
    // below the smallest representable scale the value is zero
    if value.abs() < 1e-28 {
        return Ok(Decimal::ZERO);
    }

    exact
        .and_then(|exact| exact.round_sf_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero))
        .map(|rounded| rounded.normalize())
        .ok_or_else(|| {
            tracing::debug!(value, "float outside decimal range");
            Error::OutOfRange(value.to_string())
        })
}

pub trait ToFileSizeString {
    fn to_file_size_string(&self) -> Result<String>;
}

macro_rules! impl_to_file_size_string_int {
    ($($ty:ty),* $(,)?) => {$(
        impl ToFileSizeString for $ty {
            fn to_file_size_string(&self) -> Result<String> {
                format_file_size(Decimal::from(*self))
            }
        }
    )*};
}

impl_to_file_size_string_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl ToFileSizeString for f32 {
    fn to_file_size_string(&self) -> Result<String> { format_file_size(f32_to_decimal(*self)?) }
}

impl ToFileSizeString for f64 {
    fn to_file_size_string(&self) -> Result<String> { format_file_size(f64_to_decimal(*self)?) }
}

impl ToFileSizeString for Decimal {
    fn to_file_size_string(&self) -> Result<String> { format_file_size(*self) }
}
