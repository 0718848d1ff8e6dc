use crate::blank::is_blank;
use crate::error::{Error, Result};

pub use crate::blank::{trim_all, trim_blank};
pub use crate::encode::{from_base64_string, to_base64_string, url_decode, url_encode};
pub use crate::html::{html_decode, html_encode};

/// Appended by [`truncate`] when nothing else is given.
pub const DEFAULT_TRUNCATE_MARKER: &str = " ...";

pub const YES: &str = "Yes";
pub const NO: &str = "No";

pub fn reverse(value: &str) -> String {
    if is_blank(value) {
        return String::new();
    }
    value.chars().rev().collect()
}

/// Cuts `value` to `length` chars and appends `marker`.
///
/// `None` and blank values come back as they are, as do values that already
/// fit.
pub fn truncate(value: Option<&str>, length: i64, marker: &str) -> Result<Option<String>> {
    if length < 0 {
        return Err(Error::Negative { name: "length", value: length });
    }
    let Some(value) = value else {
        return Ok(None);
    };
    if is_blank(value) {
        return Ok(Some(value.to_string()));
    }

    let length = usize::try_from(length).unwrap_or(usize::MAX);
    match value.char_indices().nth(length) {
        Some((cut, _)) => Ok(Some(format!("{}{}", &value[..cut], marker))),
        None => Ok(Some(value.to_string())),
    }
}

pub fn first_char_to_upper(value: &str) -> String {
    if is_blank(value) {
        return String::new();
    }
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keeps ASCII letters and digits. Other chars are dropped, or swapped for
/// `replacement` when one is given.
pub fn replace_special_characters(value: &str, replacement: Option<char>) -> String {
    if is_blank(value) {
        return String::new();
    }
    value
        .chars()
        .filter_map(|c| if c.is_ascii_alphanumeric() { Some(c) } else { replacement })
        .collect()
}

pub fn remove_new_lines(value: &str) -> String {
    if is_blank(value) {
        return String::new();
    }
    value.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

/// Round trip through UTF-8 bytes.
pub fn to_utf8(value: &str) -> String {
    if is_blank(value) {
        return String::new();
    }
    String::from_utf8_lossy(value.as_bytes()).into_owned()
}

/// Picks a label for `value`, e.g. `to_yes_no(flag, YES, NO)`.
pub fn to_yes_no<'a>(value: bool, true_label: &'a str, false_label: &'a str) -> &'a str {
    if value { true_label } else { false_label }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_by_char() {
        assert_eq!(reverse("abc"), "cba");
        assert_eq!(reverse("héllo"), "olléh");
        assert_eq!(reverse(" \t"), "");
    }

    #[test]
    fn truncate_appends_marker() {
        let truncated = truncate(Some("hello world"), 5, DEFAULT_TRUNCATE_MARKER).unwrap();
        assert_eq!(truncated.as_deref(), Some("hello ..."));
        assert_eq!(truncate(Some("hi"), 10, DEFAULT_TRUNCATE_MARKER).unwrap().as_deref(), Some("hi"));
        assert_eq!(truncate(Some("hello"), 5, "…").unwrap().as_deref(), Some("hello"));
        assert_eq!(truncate(Some("héllo"), 2, "…").unwrap().as_deref(), Some("hé…"));
    }

    #[test]
    fn truncate_leaves_absent_and_blank_values() {
        assert_eq!(truncate(None, 3, DEFAULT_TRUNCATE_MARKER).unwrap(), None);
        assert_eq!(truncate(Some("   "), 1, DEFAULT_TRUNCATE_MARKER).unwrap().as_deref(), Some("   "));
        assert!(matches!(truncate(Some("x"), -1, ""), Err(Error::Negative { value: -1, .. })));
    }

    #[test]
    fn first_char() {
        assert_eq!(first_char_to_upper("hello world"), "Hello world");
        assert_eq!(first_char_to_upper("ßx"), "SSx");
        assert_eq!(first_char_to_upper(""), "");
    }

    #[test]
    fn special_characters() {
        assert_eq!(replace_special_characters("a-b c!1", None), "abc1");
        assert_eq!(replace_special_characters("a-b c!1", Some('_')), "a_b_c_1");
        assert_eq!(replace_special_characters("é", None), "");
    }

    #[test]
    fn new_lines_and_labels() {
        assert_eq!(remove_new_lines("a\r\nb\nc\r"), "abc");
        assert_eq!(to_utf8("héllo"), "héllo");
        assert_eq!(to_yes_no(true, YES, NO), "Yes");
        assert_eq!(to_yes_no(false, "on", "off"), "off");
    }
}
