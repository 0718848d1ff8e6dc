//! Name and number conversions for enums that list their members.
//!
//! Rust enums carry no runtime member table, so a type opts in through
//! [`EnumMembers`], usually with [`enum_members!`](crate::enum_members).
//!
//! ```
//! use candybox_text::{enum_members, enums::{EnumExt, to_enum}};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Level { Low, High }
//!
//! enum_members!(Level { Low = 1, High = 2 });
//!
//! assert_eq!(to_enum::<Level>("high", true).unwrap(), Level::High);
//! assert_eq!(Level::Low.int_value(), 1);
//! ```

use chrono::Weekday;

use crate::blank::{is_blank, trim_blank};
use crate::error::{Error, Result};

pub trait EnumMembers: Sized + Copy + PartialEq + 'static {
    fn type_name() -> &'static str;

    /// Every member as `(name, number, value)`, in declaration order.
    fn members() -> &'static [(&'static str, i64, Self)];
}

/// Implements [`EnumMembers`] for a fieldless enum.
#[macro_export]
macro_rules! enum_members {
    ($ty:ident { $($variant:ident = $number:expr),* $(,)? }) => {
        impl $crate::enums::EnumMembers for $ty {
            fn type_name() -> &'static str { stringify!($ty) }

            fn members() -> &'static [(&'static str, i64, Self)] {
                &[$((stringify!($variant), $number, $ty::$variant)),*]
            }
        }
    };
}

/// Parses a member name, or a member number written as digits.
///
/// Blank input is a null-argument error; anything else that matches no
/// member is [`Error::UnknownEnumMember`].
pub fn to_enum<T: EnumMembers>(value: &str, ignore_case: bool) -> Result<T> {
    if is_blank(value) {
        return Err(Error::NullArgument { name: "value" });
    }

    let name = value.trim();
    let by_name = T::members().iter().find(|(member, _, _)| {
        if ignore_case { member.eq_ignore_ascii_case(name) } else { *member == name }
    });
    if let Some((_, _, member)) = by_name {
        return Ok(*member);
    }

    if let Ok(number) = name.parse::<i64>() {
        return from_number(number);
    }

    tracing::debug!(value, type_name = T::type_name(), "no enum member matches");
    Err(Error::UnknownEnumMember {
        value:     value.to_string(),
        type_name: T::type_name(),
    })
}

/// [`to_enum`] ignoring case.
pub fn to_enum_ignore_case<T: EnumMembers>(value: &str) -> Result<T> { to_enum(value, true) }

/// Maps a member number back to the member.
pub fn from_number<T: EnumMembers>(number: i64) -> Result<T> {
    T::members()
        .iter()
        .find(|(_, n, _)| *n == number)
        .map(|(_, _, member)| *member)
        .ok_or_else(|| Error::UnknownEnumMember {
            value:     number.to_string(),
            type_name: T::type_name(),
        })
}

pub trait EnumExt: EnumMembers {
    fn name(&self) -> &'static str {
        Self::members()
            .iter()
            .find(|(_, _, member)| member == self)
            .map_or("", |(name, _, _)| *name)
    }

    fn int_value(&self) -> i64 {
        Self::members()
            .iter()
            .find(|(_, _, member)| member == self)
            .map_or(0, |(_, number, _)| *number)
    }

    fn byte_value(&self) -> Result<u8> {
        let number = self.int_value();
        u8::try_from(number).map_err(|_| Error::InvalidNumber {
            type_name: "byte",
            value:     number.to_string(),
        })
    }

    fn eq_int(&self, value: i64) -> bool { self.int_value() == value }

    fn eq_byte(&self, value: u8) -> bool { self.int_value() == i64::from(value) }

    /// Compares against a member name, ignoring case and surrounding
    /// invisible characters.
    fn eq_name(&self, value: &str) -> bool {
        self.name().eq_ignore_ascii_case(&trim_blank(value))
    }
}

impl<T: EnumMembers> EnumExt for T {}

/// Days numbered from Sunday = 0.
impl EnumMembers for Weekday {
    fn type_name() -> &'static str { "Weekday" }

    fn members() -> &'static [(&'static str, i64, Self)] {
        &[
            ("Sunday", 0, Weekday::Sun),
            ("Monday", 1, Weekday::Mon),
            ("Tuesday", 2, Weekday::Tue),
            ("Wednesday", 3, Weekday::Wed),
            ("Thursday", 4, Weekday::Thu),
            ("Friday", 5, Weekday::Fri),
            ("Saturday", 6, Weekday::Sat),
        ]
    }
}
