//! Typed conversions from text with integer-style parsing.

use rust_decimal::Decimal;

use crate::blank::is_blank;
use crate::error::{Error, Result};
use crate::number::{FromStyled, NumberStyles, try_parse};

fn parse_required<T: FromStyled>(value: &str) -> Result<T> {
    if is_blank(value) {
        return Err(Error::BlankArgument { name: "value" });
    }
    try_parse(value, NumberStyles::INTEGER).ok_or_else(|| {
        tracing::debug!(value, type_name = T::TYPE_NAME, "integer parse failed");
        Error::InvalidNumber {
            type_name: T::TYPE_NAME,
            value:     value.to_string(),
        }
    })
}

pub fn to_byte(value: &str) -> Result<u8> { parse_required(value) }

pub fn to_i16(value: &str) -> Result<i16> { parse_required(value) }

pub fn to_i32(value: &str) -> Result<i32> { parse_required(value) }

pub fn to_i64(value: &str) -> Result<i64> { parse_required(value) }

pub fn to_byte_or(value: &str, default: u8) -> u8 { to_byte(value).unwrap_or(default) }

pub fn to_i16_or(value: &str, default: i16) -> i16 { to_i16(value).unwrap_or(default) }

pub fn to_i32_or(value: &str, default: i32) -> i32 { to_i32(value).unwrap_or(default) }

pub fn to_i64_or(value: &str, default: i64) -> i64 { to_i64(value).unwrap_or(default) }

/// Parses a decimal with [`NumberStyles::NUMBER`], returning `default` when
/// the value is blank or unparseable.
pub fn to_decimal(value: &str, default: Option<Decimal>) -> Option<Decimal> {
    if is_blank(value) {
        return default;
    }
    try_parse(value, NumberStyles::NUMBER).or(default)
}
