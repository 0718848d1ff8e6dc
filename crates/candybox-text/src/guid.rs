//! Exact GUID parsing and rendering in the five classic layouts.
//!
//! | Specifier | Layout |
//! |---|---|
//! | `N` | `00000000000000000000000000000000` |
//! | `D` | `00000000-0000-0000-0000-000000000000` |
//! | `B` | `{00000000-0000-0000-0000-000000000000}` |
//! | `P` | `(00000000-0000-0000-0000-000000000000)` |
//! | `X` | `{0x00000000,0x0000,0x0000,{0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00}}` |

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::error::{Error, Result};

static HEX_LAYOUT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\{0[xX](?<a>[0-9a-fA-F]{1,8}),0[xX](?<b>[0-9a-fA-F]{1,4}),0[xX](?<c>[0-9a-fA-F]{1,4}),\{(?<d>0[xX][0-9a-fA-F]{1,2}(?:,0[xX][0-9a-fA-F]{1,2}){7})\}\}$",
    )
    .unwrap()
});

/// Specifiers accepted by [`GuidFormat::from_specifier`].
pub const GUID_SPECIFIERS: [&str; 10] = ["D", "d", "N", "n", "P", "p", "B", "b", "X", "x"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuidFormat {
    /// 32 digits.
    Digits,
    /// 32 digits separated by hyphens.
    #[default]
    Hyphens,
    /// Hyphenated, enclosed in braces.
    Braces,
    /// Hyphenated, enclosed in parentheses.
    Parentheses,
    /// Hexadecimal field list.
    Hex,
}

impl GuidFormat {
    pub fn from_specifier(specifier: &str) -> Option<Self> {
        match specifier {
            "N" | "n" => Some(Self::Digits),
            "D" | "d" => Some(Self::Hyphens),
            "B" | "b" => Some(Self::Braces),
            "P" | "p" => Some(Self::Parentheses),
            "X" | "x" => Some(Self::Hex),
            _ => None,
        }
    }

    /// Like [`from_specifier`](Self::from_specifier), falling back to
    /// [`GuidFormat::Hyphens`] for unknown specifiers.
    pub fn from_specifier_or_default(specifier: &str) -> Self {
        Self::from_specifier(specifier).unwrap_or_default()
    }

    pub fn specifier(self) -> char {
        match self {
            Self::Digits => 'N',
            Self::Hyphens => 'D',
            Self::Braces => 'B',
            Self::Parentheses => 'P',
            Self::Hex => 'X',
        }
    }

    /// Parses `value`, requiring it to match this layout exactly.
    pub fn parse_exact(self, value: &str) -> Option<Uuid> {
        match self {
            Self::Digits => parse_digits(value),
            Self::Hyphens => parse_hyphenated(value),
            Self::Braces => value
                .strip_prefix('{')
                .and_then(|v| v.strip_suffix('}'))
                .and_then(parse_hyphenated),
            Self::Parentheses => value
                .strip_prefix('(')
                .and_then(|v| v.strip_suffix(')'))
                .and_then(parse_hyphenated),
            Self::Hex => parse_hex_layout(value),
        }
    }

    pub fn format(self, guid: &Uuid) -> String {
        match self {
            Self::Digits => guid.simple().to_string(),
            Self::Hyphens => guid.hyphenated().to_string(),
            Self::Braces => guid.braced().to_string(),
            Self::Parentheses => format!("({})", guid.hyphenated()),
            Self::Hex => {
                let (a, b, c, d) = guid.as_fields();
                let tail: Vec<String> = d.iter().map(|byte| format!("0x{:02x}", byte)).collect();
                format!("{{0x{:08x},0x{:04x},0x{:04x},{{{}}}}}", a, b, c, tail.join(","))
            }
        }
    }
}

fn parse_digits(value: &str) -> Option<Uuid> {
    if value.len() != 32 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Uuid::try_parse(value).ok()
}

fn parse_hyphenated(value: &str) -> Option<Uuid> {
    let bytes = value.as_bytes();
    if bytes.len() != 36 {
        return None;
    }
    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        8 | 13 | 18 | 23 => *b == b'-',
        _ => b.is_ascii_hexdigit(),
    });
    if !well_formed {
        return None;
    }
    Uuid::try_parse(value).ok()
}

fn parse_hex_layout(value: &str) -> Option<Uuid> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let caps = HEX_LAYOUT_REGEX.captures(&compact)?;

    let a = u32::from_str_radix(&caps["a"], 16).ok()?;
    let b = u16::from_str_radix(&caps["b"], 16).ok()?;
    let c = u16::from_str_radix(&caps["c"], 16).ok()?;

    let mut d = [0u8; 8];
    for (slot, part) in d.iter_mut().zip(caps["d"].split(',')) {
        *slot = u8::from_str_radix(&part[2..], 16).ok()?;
    }

    Some(Uuid::from_fields(a, b, c, &d))
}

/// Returns `true` when `value` is a GUID in the layout named by `specifier`.
///
/// Unknown specifiers fall back to `D`; blank input is never a GUID.
pub fn is_guid(value: &str, specifier: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    GuidFormat::from_specifier_or_default(specifier)
        .parse_exact(value)
        .is_some()
}

/// Parses a GUID in the layout named by `specifier`.
///
/// Blank input is `Ok(None)`; unknown specifiers fall back to `D`.
pub fn to_guid(value: &str, specifier: &str) -> Result<Option<Uuid>> {
    if value.trim().is_empty() {
        return Ok(None);
    }

    let format = GuidFormat::from_specifier_or_default(specifier);
    match format.parse_exact(value) {
        Some(guid) => Ok(Some(guid)),
        None => {
            tracing::debug!(value, format = %format.specifier(), "guid does not match layout");
            Err(Error::InvalidGuid {
                value:  value.to_string(),
                format: format.specifier(),
            })
        }
    }
}

/// Renders `guid` in the layout named by `specifier` (lowercase hex).
pub fn format_guid(guid: &Uuid, specifier: &str) -> String {
    GuidFormat::from_specifier_or_default(specifier).format(guid)
}
