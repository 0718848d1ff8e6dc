//! Blank detection and invisible-character trimming.
//!
//! `str::trim` only strips Unicode whitespace. The helpers here also strip
//! ASCII control characters, which routinely leak into user input through
//! copy and paste.

/// Characters treated as invisible: C0 controls, space, DEL, NEL and the
/// Unicode line/paragraph separators.
pub const INVISIBLE_CHARS: [char; 37] = [
    '\u{00}', '\u{01}', '\u{02}', '\u{03}', '\u{04}', '\u{05}', '\u{06}', '\u{07}', '\u{08}',
    '\u{09}', '\u{0a}', '\u{0b}', '\u{0c}', '\u{0d}', '\u{0e}', '\u{0f}', '\u{10}', '\u{11}',
    '\u{12}', '\u{13}', '\u{14}', '\u{15}', '\u{16}', '\u{17}', '\u{18}', '\u{19}', '\u{1a}',
    '\u{1b}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{1f}', '\u{20}', '\u{7f}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

pub fn is_invisible(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{20}' | '\u{7f}' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Returns `true` for an empty string or one made only of whitespace and
/// invisible characters.
pub fn is_blank(value: &str) -> bool {
    value.chars().all(|c| c.is_whitespace() || is_invisible(c))
}

/// Returns `true` when `value` is `None` or blank.
pub fn is_null_or_blank(value: Option<&str>) -> bool {
    value.is_none_or(is_blank)
}

pub fn is_not_null_or_blank(value: Option<&str>) -> bool {
    !is_null_or_blank(value)
}

/// Removes every invisible character, wherever it occurs.
///
/// Blank input yields an empty string.
pub fn trim_all(value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }

    value.chars().filter(|c| !is_invisible(*c)).collect()
}

/// Removes leading and trailing invisible characters, keeping interior ones.
pub fn trim_blank(value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }

    value.trim_matches(is_invisible).to_string()
}
