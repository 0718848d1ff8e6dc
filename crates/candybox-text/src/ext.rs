use rust_decimal::Decimal;
use uuid::Uuid;

use crate::encode::TextEncoding;
use crate::error::Result;
use crate::number::NumberStyles;
use crate::{blank, encode, guid, html, parse, sanitize, transform, validate};

/// Method-call access to the free functions of this crate.
///
/// ```
/// use candybox_text::StrExt;
///
/// assert!("user@example.com".is_email());
/// assert_eq!("a b".url_encode(), "a+b");
/// ```
pub trait StrExt {
    fn is_blank(&self) -> bool;
    fn is_email(&self) -> bool;
    fn is_chinese_mobile(&self) -> bool;
    fn is_url(&self, allow_query: bool) -> bool;
    fn is_hans(&self) -> bool;
    fn is_guid(&self, specifier: &str) -> bool;
    fn is_valid_culture_identifier(&self) -> bool;
    fn is_int32(&self, styles: NumberStyles) -> bool;
    fn is_decimal(&self, styles: NumberStyles) -> bool;
    fn is_letter(&self) -> bool;
    fn is_base64_string(&self) -> bool;

    fn trim_all(&self) -> String;
    fn trim_blank(&self) -> String;
    fn reverse_chars(&self) -> String;
    fn first_char_to_upper(&self) -> String;
    fn remove_new_lines(&self) -> String;
    fn html_encode(&self) -> String;
    fn html_decode(&self) -> String;
    fn url_encode(&self) -> String;
    fn url_decode(&self) -> String;
    fn to_base64_string(&self) -> String;
    fn from_base64_string(&self) -> Result<String>;

    fn to_i32(&self) -> Result<i32>;
    fn to_i64(&self) -> Result<i64>;
    fn to_decimal(&self) -> Option<Decimal>;
    fn to_guid(&self, specifier: &str) -> Result<Option<Uuid>>;
    fn to_safe_file_name(&self) -> Result<Option<String>>;
}

impl StrExt for str {
    fn is_blank(&self) -> bool { blank::is_blank(self) }

    fn is_email(&self) -> bool { validate::is_email(self) }

    fn is_chinese_mobile(&self) -> bool { validate::is_chinese_mobile(self) }

    fn is_url(&self, allow_query: bool) -> bool { validate::is_url(self, allow_query) }

    fn is_hans(&self) -> bool { validate::is_hans(self) }

    fn is_guid(&self, specifier: &str) -> bool { guid::is_guid(self, specifier) }

    fn is_valid_culture_identifier(&self) -> bool { validate::is_valid_culture_identifier(self) }

    fn is_int32(&self, styles: NumberStyles) -> bool { validate::is_int32(self, styles) }

    fn is_decimal(&self, styles: NumberStyles) -> bool { validate::is_decimal(self, styles) }

    fn is_letter(&self) -> bool { validate::is_letter(self) }

    fn is_base64_string(&self) -> bool { validate::is_base64_string(self) }

    fn trim_all(&self) -> String { blank::trim_all(self) }

    fn trim_blank(&self) -> String { blank::trim_blank(self) }

    fn reverse_chars(&self) -> String { transform::reverse(self) }

    fn first_char_to_upper(&self) -> String { transform::first_char_to_upper(self) }

    fn remove_new_lines(&self) -> String { transform::remove_new_lines(self) }

    fn html_encode(&self) -> String { html::html_encode(self) }

    fn html_decode(&self) -> String { html::html_decode(self) }

    fn url_encode(&self) -> String { encode::url_encode(self) }

    fn url_decode(&self) -> String { encode::url_decode(self) }

    fn to_base64_string(&self) -> String { encode::to_base64_string(self, TextEncoding::Utf8) }

    fn from_base64_string(&self) -> Result<String> {
        encode::from_base64_string(self, TextEncoding::Utf8)
    }

    fn to_i32(&self) -> Result<i32> { parse::to_i32(self) }

    fn to_i64(&self) -> Result<i64> { parse::to_i64(self) }

    fn to_decimal(&self) -> Option<Decimal> { parse::to_decimal(self, None) }

    fn to_guid(&self, specifier: &str) -> Result<Option<Uuid>> { guid::to_guid(self, specifier) }

    fn to_safe_file_name(&self) -> Result<Option<String>> {
        sanitize::to_safe_file_name(self, sanitize::DEFAULT_REPLACEMENT)
    }
}
