//! Replacing characters the host file system rejects.

use crate::blank::is_blank;
use crate::error::{Error, Result};

/// Replacement used when callers have no preference.
pub const DEFAULT_REPLACEMENT: char = '_';

#[cfg(windows)]
const INVALID_FILE_NAME_CHARS: &[char] = &[
    '"', '<', '>', '|', '\0', '\u{1}', '\u{2}', '\u{3}', '\u{4}', '\u{5}', '\u{6}', '\u{7}',
    '\u{8}', '\t', '\n', '\u{b}', '\u{c}', '\r', '\u{e}', '\u{f}', '\u{10}', '\u{11}', '\u{12}',
    '\u{13}', '\u{14}', '\u{15}', '\u{16}', '\u{17}', '\u{18}', '\u{19}', '\u{1a}', '\u{1b}',
    '\u{1c}', '\u{1d}', '\u{1e}', '\u{1f}', ':', '*', '?', '\\', '/',
];

#[cfg(windows)]
const INVALID_PATH_CHARS: &[char] = &[
    '|', '\0', '\u{1}', '\u{2}', '\u{3}', '\u{4}', '\u{5}', '\u{6}', '\u{7}', '\u{8}', '\t', '\n',
    '\u{b}', '\u{c}', '\r', '\u{e}', '\u{f}', '\u{10}', '\u{11}', '\u{12}', '\u{13}', '\u{14}',
    '\u{15}', '\u{16}', '\u{17}', '\u{18}', '\u{19}', '\u{1a}', '\u{1b}', '\u{1c}', '\u{1d}',
    '\u{1e}', '\u{1f}',
];

#[cfg(not(windows))]
const INVALID_FILE_NAME_CHARS: &[char] = &['\0', '/'];

#[cfg(not(windows))]
const INVALID_PATH_CHARS: &[char] = &['\0'];

/// Characters that may not appear in a file name on this platform.
pub fn invalid_file_name_chars() -> &'static [char] { INVALID_FILE_NAME_CHARS }

/// Characters that may not appear in a path on this platform.
pub fn invalid_path_chars() -> &'static [char] { INVALID_PATH_CHARS }

fn replace_invalid(value: &str, replacement: char, invalid: &[char]) -> Result<Option<String>> {
    if is_blank(value) {
        return Ok(None);
    }
    if invalid.contains(&replacement) {
        return Err(Error::InvalidReplacement(replacement));
    }

    let safe: String = value
        .chars()
        .map(|c| if invalid.contains(&c) { replacement } else { c })
        .collect();
    if safe != value {
        tracing::trace!(value, safe = %safe, "replaced invalid file system characters");
    }
    Ok(Some(safe))
}

/// Replaces every char that is invalid in a file name with `replacement`.
///
/// Blank input yields `Ok(None)`.
pub fn to_safe_file_name(value: &str, replacement: char) -> Result<Option<String>> {
    replace_invalid(value, replacement, INVALID_FILE_NAME_CHARS)
}

/// Replaces every char that is invalid in a path with `replacement`.
///
/// Separators are kept, so only the narrower path set is replaced.
pub fn to_safe_file_path(value: &str, replacement: char) -> Result<Option<String>> {
    replace_invalid(value, replacement, INVALID_PATH_CHARS)
}
