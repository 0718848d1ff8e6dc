//! Shape checks over text.
//!
//! Validators never fail on blank input, they answer `false`. The two bound
//! checks are the exception: they also validate their arguments and report
//! misuse as an [`Error`].

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use url::Url;

use crate::blank::is_blank;
use crate::culture::Culture;
use crate::encode::TextEncoding;
use crate::error::{Error, Result};
use crate::number::{NumberStyles, try_parse};

pub use crate::blank::{is_not_null_or_blank, is_null_or_blank};
pub use crate::guid::is_guid;

// atext per RFC 5322, widened to any non-ASCII character
const ATOM: &str = r#"[^\s\x00-\x1f\x7f()<>\[\]:;@\\,."]+"#;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let local = format!(r#"(?:{ATOM}(?:\.{ATOM})*|"(?:[^"\\\r\n]|\\.)*")"#);
    let domain = format!(r#"(?:{ATOM}(?:\.{ATOM})*|\[[^\[\]\\\r\n]*\])"#);
    Regex::new(&format!("^{local}@{domain}$")).unwrap()
});

static CHINESE_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1[3-9]\d{9}$").unwrap());

static LETTER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

/// Returns `true` for a bare address such as `user@example.com`.
///
/// Surrounding whitespace is ignored; display names (`Name <a@b.c>`) and
/// comments are rejected.
pub fn is_email(value: &str) -> bool {
    if is_blank(value) {
        return false;
    }
    EMAIL_REGEX.is_match(value.trim())
}

pub fn is_chinese_mobile(value: &str) -> bool {
    !is_blank(value) && CHINESE_MOBILE_REGEX.is_match(value)
}

/// Returns `true` for an absolute URL with a host and no fragment.
///
/// A query string is accepted only when `allow_query` is set. `mailto:`
/// URLs take their host from the address after `@`.
pub fn is_url(value: &str, allow_query: bool) -> bool {
    if is_blank(value) {
        return false;
    }

    let Ok(url) = Url::parse(value.trim()) else {
        return false;
    };

    let has_host = url_host(&url).is_some_and(|host| !host.is_empty());
    has_host && url.fragment().is_none() && (allow_query || url.query().is_none())
}

fn url_host(url: &Url) -> Option<&str> {
    match url.host_str() {
        Some(host) => Some(host),
        None if url.scheme() == "mailto" => url.path().rsplit_once('@').map(|(_, host)| host),
        None => None,
    }
}

/// Returns `true` when any character is a CJK unified ideograph.
pub fn is_hans(value: &str) -> bool {
    value.chars().any(|c| ('\u{4e00}'..='\u{9fa5}').contains(&c))
}

fn check_bounds(value: Option<&str>, min_length: i64, max_length: i64) -> Result<&str> {
    let value = value.ok_or(Error::NullArgument { name: "value" })?;
    if min_length < 0 {
        return Err(Error::Negative { name: "min_length", value: min_length });
    }
    if max_length < min_length {
        return Err(Error::InvertedBounds {
            name:       "max_length",
            value:      max_length,
            lower_name: "min_length",
            lower:      min_length,
        });
    }
    Ok(value)
}

fn within(count: usize, min: i64, max: i64) -> bool {
    i64::try_from(count).is_ok_and(|count| (min..=max).contains(&count))
}

/// Checks `min_length <= chars <= max_length`.
pub fn is_valid_length(value: Option<&str>, min_length: i64, max_length: i64) -> Result<bool> {
    let value = check_bounds(value, min_length, max_length)?;
    Ok(within(value.chars().count(), min_length, max_length))
}

/// Checks the UTF-8 byte count against the bounds.
pub fn is_valid_byte_count(value: Option<&str>, min_count: i64, max_count: i64) -> Result<bool> {
    is_valid_byte_count_in(value, min_count, max_count, TextEncoding::default())
}

pub fn is_valid_byte_count_in(
    value: Option<&str>,
    min_count: i64,
    max_count: i64,
    encoding: TextEncoding,
) -> Result<bool> {
    let value = check_bounds(value, min_count, max_count)?;
    Ok(within(encoding.byte_count(value), min_count, max_count))
}

pub fn is_valid_culture_identifier(value: &str) -> bool {
    !is_blank(value) && Culture::parse(value).is_ok()
}

pub fn is_byte(value: &str, styles: NumberStyles) -> bool {
    !is_blank(value) && try_parse::<u8>(value, styles).is_some()
}

pub fn is_short(value: &str, styles: NumberStyles) -> bool {
    !is_blank(value) && try_parse::<i16>(value, styles).is_some()
}

pub fn is_int32(value: &str, styles: NumberStyles) -> bool {
    !is_blank(value) && try_parse::<i32>(value, styles).is_some()
}

pub fn is_int64(value: &str, styles: NumberStyles) -> bool {
    !is_blank(value) && try_parse::<i64>(value, styles).is_some()
}

pub fn is_decimal(value: &str, styles: NumberStyles) -> bool {
    !is_blank(value) && try_parse::<Decimal>(value, styles).is_some()
}

pub fn is_float(value: &str, styles: NumberStyles) -> bool {
    !is_blank(value) && try_parse::<f32>(value, styles).is_some()
}

pub fn is_letter(value: &str) -> bool { LETTER_REGEX.is_match(value) }

pub fn is_base64_string(value: &str) -> bool {
    !is_blank(value) && value.len() % 4 == 0 && STANDARD.decode(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_addresses() {
        assert!(is_email("user@example.com"));
        assert!(is_email("  first.last+tag@sub.example.org "));
        assert!(is_email("\"quoted local\"@example.com"));
        assert!(is_email("admin@[127.0.0.1]"));
        assert!(!is_email("Display Name <user@example.com>"));
        assert!(!is_email("user@@example.com"));
        assert!(!is_email("user.@example.com"));
        assert!(!is_email("no-at-sign"));
        assert!(!is_email("   "));
    }

    #[test]
    fn chinese_mobile_numbers() {
        assert!(is_chinese_mobile("13800138000"));
        assert!(is_chinese_mobile("19912345678"));
        assert!(!is_chinese_mobile("12800138000"));
        assert!(!is_chinese_mobile("1380013800"));
        assert!(!is_chinese_mobile(""));
    }

    #[test]
    fn urls() {
        assert!(is_url("https://example.com", false));
        assert!(!is_url("https://example.com?q=1", false));
        assert!(is_url("https://example.com?q=1", true));
        assert!(!is_url("https://example.com#top", true));
        assert!(!is_url("https://example.com?q=1#top", true));
        assert!(!is_url("/relative/path", true));
        assert!(!is_url("mailto:", true));
        assert!(!is_url("mailto:nobody", true));
        assert!(!is_url("urn:isbn:0451450523", true));
        assert!(!is_url("", true));
    }

    #[test]
    fn mailto_urls_use_the_address_host() {
        assert!(is_url("mailto:user@example.com", false));
        assert!(is_url("mailto:user@example.com?subject=hi", true));
        assert!(!is_url("mailto:user@example.com?subject=hi", false));
    }

    #[test]
    fn hans() {
        assert!(is_hans("hello 世界"));
        assert!(!is_hans("hello"));
        assert!(!is_hans(""));
    }

    #[test]
    fn length_bounds() {
        assert!(is_valid_length(Some("héllo"), 5, 5).unwrap());
        assert!(!is_valid_length(Some("hello"), 0, 4).unwrap());
        assert!(matches!(is_valid_length(None, 0, 1), Err(Error::NullArgument { .. })));
        assert!(matches!(is_valid_length(Some("a"), -1, 1), Err(Error::Negative { .. })));
        assert!(matches!(is_valid_length(Some("a"), 2, 1), Err(Error::InvertedBounds { .. })));
    }

    #[test]
    fn byte_count_bounds() {
        assert!(!is_valid_byte_count(Some("héllo"), 5, 5).unwrap());
        assert!(is_valid_byte_count(Some("héllo"), 6, 6).unwrap());
        assert!(is_valid_byte_count_in(Some("héllo"), 5, 5, TextEncoding::Latin1).unwrap());
        assert!(is_valid_byte_count_in(Some("ab"), 4, 4, TextEncoding::Utf16Le).unwrap());
    }

    #[test]
    fn cultures() {
        assert!(is_valid_culture_identifier("en-US"));
        assert!(is_valid_culture_identifier("zh-Hans"));
        assert!(!is_valid_culture_identifier("xx-YY"));
        assert!(!is_valid_culture_identifier(" "));
    }

    #[test]
    fn numeric_literals() {
        assert!(is_byte("255", NumberStyles::INTEGER));
        assert!(!is_byte("256", NumberStyles::INTEGER));
        assert!(is_short("-32768", NumberStyles::INTEGER));
        assert!(is_int32("1,000", NumberStyles::NUMBER));
        assert!(!is_int32("1,000", NumberStyles::INTEGER));
        assert!(is_int64("7fffffffffffffff", NumberStyles::HEX_NUMBER));
        assert!(is_decimal("79228162514264337593543950335", NumberStyles::NUMBER));
        assert!(is_float("1.5e10", NumberStyles::FLOAT));
        assert!(!is_float("", NumberStyles::FLOAT));
    }

    #[test]
    fn letters_and_base64() {
        assert!(is_letter("abcXYZ"));
        assert!(!is_letter("abc1"));
        assert!(!is_letter(""));

        assert!(is_base64_string("aGVsbG8="));
        assert!(!is_base64_string("aGVsbG8"));
        assert!(!is_base64_string("****"));
        assert!(!is_base64_string(""));
    }
}
