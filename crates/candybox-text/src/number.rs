//! Numeric literal parsing controlled by [`NumberStyles`] flags.
//!
//! The grammar is the invariant one: `.` decimal separator, `,` group
//! separator, `¤` currency symbol and ASCII whitespace.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{Error, Result};

const CURRENCY_SYMBOL: char = '\u{a4}';

/// Bitset selecting which features a numeric literal may use.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberStyles(u32);

impl NumberStyles {
    pub const NONE: Self = Self(0);
    pub const ALLOW_LEADING_WHITE: Self = Self(0x001);
    pub const ALLOW_TRAILING_WHITE: Self = Self(0x002);
    pub const ALLOW_LEADING_SIGN: Self = Self(0x004);
    pub const ALLOW_TRAILING_SIGN: Self = Self(0x008);
    pub const ALLOW_PARENTHESES: Self = Self(0x010);
    pub const ALLOW_DECIMAL_POINT: Self = Self(0x020);
    pub const ALLOW_THOUSANDS: Self = Self(0x040);
    pub const ALLOW_EXPONENT: Self = Self(0x080);
    pub const ALLOW_CURRENCY_SYMBOL: Self = Self(0x100);
    pub const ALLOW_HEX_SPECIFIER: Self = Self(0x200);

    pub const INTEGER: Self = Self::ALLOW_LEADING_WHITE
        .union(Self::ALLOW_TRAILING_WHITE)
        .union(Self::ALLOW_LEADING_SIGN);
    pub const HEX_NUMBER: Self = Self::ALLOW_LEADING_WHITE
        .union(Self::ALLOW_TRAILING_WHITE)
        .union(Self::ALLOW_HEX_SPECIFIER);
    pub const NUMBER: Self = Self::INTEGER
        .union(Self::ALLOW_TRAILING_SIGN)
        .union(Self::ALLOW_DECIMAL_POINT)
        .union(Self::ALLOW_THOUSANDS);
    pub const FLOAT: Self = Self::INTEGER
        .union(Self::ALLOW_DECIMAL_POINT)
        .union(Self::ALLOW_EXPONENT);
    pub const CURRENCY: Self = Self::NUMBER
        .union(Self::ALLOW_PARENTHESES)
        .union(Self::ALLOW_CURRENCY_SYMBOL);
    pub const ANY: Self = Self::CURRENCY.union(Self::ALLOW_EXPONENT);

    const NAMES: [(Self, &'static str); 10] = [
        (Self::ALLOW_LEADING_WHITE, "AllowLeadingWhite"),
        (Self::ALLOW_TRAILING_WHITE, "AllowTrailingWhite"),
        (Self::ALLOW_LEADING_SIGN, "AllowLeadingSign"),
        (Self::ALLOW_TRAILING_SIGN, "AllowTrailingSign"),
        (Self::ALLOW_PARENTHESES, "AllowParentheses"),
        (Self::ALLOW_DECIMAL_POINT, "AllowDecimalPoint"),
        (Self::ALLOW_THOUSANDS, "AllowThousands"),
        (Self::ALLOW_EXPONENT, "AllowExponent"),
        (Self::ALLOW_CURRENCY_SYMBOL, "AllowCurrencySymbol"),
        (Self::ALLOW_HEX_SPECIFIER, "AllowHexSpecifier"),
    ];

    pub const fn bits(self) -> u32 { self.0 }

    pub const fn union(self, other: Self) -> Self { Self(self.0 | other.0) }

    pub const fn contains(self, other: Self) -> bool { self.0 & other.0 == other.0 }

    /// Hex literals only combine with the whitespace flags.
    fn is_valid_hex_combination(self) -> bool {
        !self.contains(Self::ALLOW_HEX_SPECIFIER) || self.0 & !Self::HEX_NUMBER.0 == 0
    }
}

impl BitOr for NumberStyles {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self { self.union(rhs) }
}

impl BitOrAssign for NumberStyles {
    fn bitor_assign(&mut self, rhs: Self) { *self = self.union(rhs); }
}

impl fmt::Display for NumberStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("None");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for NumberStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumberStyles({})", self)
    }
}

/// A literal split into its parts, digits only.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DecimalLiteral {
    negative: bool,
    integer:  String,
    fraction: String,
    exponent: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Literal {
    Decimal(DecimalLiteral),
    Hex(u128),
}

fn is_number_white(c: char) -> bool {
    matches!(c, '\u{09}'..='\u{0d}' | ' ')
}

fn scan(input: &str, styles: NumberStyles) -> Option<Literal> {
    let mut s = input;
    if styles.contains(NumberStyles::ALLOW_LEADING_WHITE) {
        s = s.trim_start_matches(is_number_white);
    }
    if styles.contains(NumberStyles::ALLOW_TRAILING_WHITE) {
        s = s.trim_end_matches(is_number_white);
    }

    if styles.contains(NumberStyles::ALLOW_HEX_SPECIFIER) {
        let digits = s.trim_start_matches('0');
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_hexdigit()) || digits.len() > 32 {
            return None;
        }
        return u128::from_str_radix(if digits.is_empty() { "0" } else { digits }, 16)
            .ok()
            .map(Literal::Hex);
    }

    let chars: Vec<char> = s.chars().collect();
    let mut pos = 0;
    let mut negative = false;
    let mut signed = false;
    let mut parenthesized = false;
    let mut currency = false;

    let peek = |pos: usize| chars.get(pos).copied();

    // prefix: '(' then currency and sign in either order
    if styles.contains(NumberStyles::ALLOW_PARENTHESES) && peek(pos) == Some('(') {
        parenthesized = true;
        negative = true;
        pos += 1;
    }
    for _ in 0..2 {
        match peek(pos) {
            Some(CURRENCY_SYMBOL) if styles.contains(NumberStyles::ALLOW_CURRENCY_SYMBOL) && !currency => {
                currency = true;
                pos += 1;
            }
            Some(c @ ('+' | '-'))
                if styles.contains(NumberStyles::ALLOW_LEADING_SIGN) && !signed && !parenthesized =>
            {
                signed = true;
                negative = c == '-';
                pos += 1;
            }
            _ => break,
        }
    }

    let mut integer = String::new();
    while let Some(c) = peek(pos) {
        if c.is_ascii_digit() {
            integer.push(c);
        } else if c == ',' && styles.contains(NumberStyles::ALLOW_THOUSANDS) && !integer.is_empty() {
            // group separators carry no value
        } else {
            break;
        }
        pos += 1;
    }

    let mut fraction = String::new();
    if styles.contains(NumberStyles::ALLOW_DECIMAL_POINT) && peek(pos) == Some('.') {
        pos += 1;
        while let Some(c) = peek(pos).filter(char::is_ascii_digit) {
            fraction.push(c);
            pos += 1;
        }
    }

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut exponent: i32 = 0;
    if styles.contains(NumberStyles::ALLOW_EXPONENT) && matches!(peek(pos), Some('e' | 'E')) {
        pos += 1;
        let exponent_negative = match peek(pos) {
            Some('-') => {
                pos += 1;
                true
            }
            Some('+') => {
                pos += 1;
                false
            }
            _ => false,
        };
        let start = pos;
        while let Some(c) = peek(pos).filter(char::is_ascii_digit) {
            exponent = exponent.saturating_mul(10).saturating_add(c as i32 - '0' as i32);
            pos += 1;
        }
        if pos == start {
            return None;
        }
        if exponent_negative {
            exponent = -exponent;
        }
    }

    // suffix: currency and trailing sign in either order, then ')'
    for _ in 0..2 {
        match peek(pos) {
            Some(CURRENCY_SYMBOL) if styles.contains(NumberStyles::ALLOW_CURRENCY_SYMBOL) && !currency => {
                currency = true;
                pos += 1;
            }
            Some(c @ ('+' | '-'))
                if styles.contains(NumberStyles::ALLOW_TRAILING_SIGN) && !signed && !parenthesized =>
            {
                signed = true;
                negative = c == '-';
                pos += 1;
            }
            _ => break,
        }
    }
    if parenthesized {
        if peek(pos) != Some(')') {
            return None;
        }
        pos += 1;
    }

    if pos != chars.len() {
        return None;
    }

    Some(Literal::Decimal(DecimalLiteral { negative, integer, fraction, exponent }))
}

impl DecimalLiteral {
    /// Integral value of the literal, or `None` when a non-zero fraction
    /// remains after applying the exponent or the value exceeds `i128`.
    fn to_i128(&self) -> Option<i128> {
        let digits: Vec<u8> = self
            .integer
            .bytes()
            .chain(self.fraction.bytes())
            .map(|b| b - b'0')
            .collect();
        let point = self.integer.len() as i64 + i64::from(self.exponent);

        let (whole, rest): (&[u8], &[u8]) = if point <= 0 {
            (&[], &digits[..])
        } else if point as usize >= digits.len() {
            (&digits[..], &[])
        } else {
            digits.split_at(point as usize)
        };
        if rest.iter().any(|d| *d != 0) {
            return None;
        }

        let mut value: i128 = 0;
        for d in whole {
            value = value.checked_mul(10)?.checked_add(i128::from(*d))?;
        }
        let padding = (point - digits.len() as i64).max(0);
        if value != 0 {
            for _ in 0..padding {
                value = value.checked_mul(10)?;
            }
        }

        Some(if self.negative { -value } else { value })
    }

    fn mantissa(&self) -> String {
        let sign = if self.negative { "-" } else { "" };
        let integer = if self.integer.is_empty() { "0" } else { &self.integer };
        if self.fraction.is_empty() {
            format!("{}{}", sign, integer)
        } else {
            format!("{}{}.{}", sign, integer, self.fraction)
        }
    }
}

/// Types that can be parsed from a literal under [`NumberStyles`].
pub trait FromStyled: Sized {
    const TYPE_NAME: &'static str;

    fn from_styled(value: &str, styles: NumberStyles) -> Option<Self>;

    fn supports(styles: NumberStyles) -> bool { styles.is_valid_hex_combination() }
}

macro_rules! impl_from_styled_int {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl FromStyled for $ty {
            const TYPE_NAME: &'static str = $name;

            fn from_styled(value: &str, styles: NumberStyles) -> Option<Self> {
                match scan(value, styles)? {
                    Literal::Hex(raw) => {
                        let bits = <$ty>::BITS;
                        if raw >> bits != 0 {
                            return None;
                        }
                        // hex is a bit pattern, negative for signed types with the top bit set
                        let value = if <$ty>::MIN != 0 && (raw >> (bits - 1)) & 1 == 1 {
                            raw as i128 - (1i128 << bits)
                        } else {
                            raw as i128
                        };
                        <$ty>::try_from(value).ok()
                    }
                    Literal::Decimal(literal) => <$ty>::try_from(literal.to_i128()?).ok(),
                }
            }
        }
    )*};
}

impl_from_styled_int! {
    u8 => "byte",
    i8 => "sbyte",
    i16 => "short",
    u16 => "ushort",
    i32 => "int",
    u32 => "uint",
    i64 => "long",
    u64 => "ulong",
}

macro_rules! impl_from_styled_float {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl FromStyled for $ty {
            const TYPE_NAME: &'static str = $name;

            fn from_styled(value: &str, styles: NumberStyles) -> Option<Self> {
                match scan(value, styles)? {
                    Literal::Hex(_) => None,
                    Literal::Decimal(literal) => {
                        format!("{}e{}", literal.mantissa(), literal.exponent).parse().ok()
                    }
                }
            }

            fn supports(styles: NumberStyles) -> bool {
                !styles.contains(NumberStyles::ALLOW_HEX_SPECIFIER)
            }
        }
    )*};
}

impl_from_styled_float! {
    f32 => "float",
    f64 => "double",
}

impl FromStyled for Decimal {
    const TYPE_NAME: &'static str = "decimal";

    fn from_styled(value: &str, styles: NumberStyles) -> Option<Self> {
        let Literal::Decimal(literal) = scan(value, styles)? else {
            return None;
        };
        let mantissa = literal.mantissa();
        if literal.exponent == 0 {
            Decimal::from_str(&mantissa).ok()
        } else {
            Decimal::from_scientific(&format!("{}e{}", mantissa, literal.exponent)).ok()
        }
    }

    fn supports(styles: NumberStyles) -> bool {
        !styles.contains(NumberStyles::ALLOW_HEX_SPECIFIER)
    }
}

/// Parses `value` under `styles`, returning `None` on any failure.
pub fn try_parse<T: FromStyled>(value: &str, styles: NumberStyles) -> Option<T> {
    if !T::supports(styles) {
        return None;
    }
    T::from_styled(value, styles)
}

/// Parses `value` under `styles`.
pub fn parse_number<T: FromStyled>(value: &str, styles: NumberStyles) -> Result<T> {
    if !T::supports(styles) {
        return Err(Error::UnsupportedStyles {
            styles:    styles.to_string(),
            type_name: T::TYPE_NAME,
        });
    }
    T::from_styled(value, styles).ok_or_else(|| Error::InvalidNumber {
        type_name: T::TYPE_NAME,
        value:     value.to_string(),
    })
}
