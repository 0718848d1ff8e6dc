//! Argument guards.
//!
//! Each guard returns the checked value on success, so calls chain into
//! assignments, and a [`VerifyError`] naming the parameter on failure.
//!
//! ```
//! use candybox_verify::{between, not_null_or_white_space};
//!
//! fn rename(name: Option<&str>, retries: u8) -> candybox_verify::Result<String> {
//!     let name = not_null_or_white_space(name, "name")?;
//!     between(retries, 1, 5, "retries")?;
//!     Ok(name.to_uppercase())
//! }
//!
//! assert_eq!(rename(Some("log"), 3).unwrap(), "LOG");
//! assert_eq!(rename(Some("  "), 3).unwrap_err().name(), "name");
//! ```

use std::fmt::Display;

use candybox_text::validate::is_url;

pub use self::error::{Result, VerifyError};

mod error;

pub fn not_null<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(VerifyError::Null { name })
}

/// Rejects `None`, `""` and strings made only of whitespace.
pub fn not_null_or_white_space<'a>(
    value: Option<&'a str>,
    name: &'static str,
) -> Result<&'a str> {
    let value = not_null(value, name)?;
    if value.chars().all(char::is_whitespace) {
        return Err(VerifyError::WhiteSpace { name });
    }
    Ok(value)
}

pub fn not_null_or_empty<'a, T>(
    collection: Option<&'a [T]>,
    name: &'static str,
) -> Result<&'a [T]> {
    let collection = not_null(collection, name)?;
    if collection.is_empty() {
        return Err(VerifyError::Empty { name });
    }
    Ok(collection)
}

/// Inclusive range guard.
pub fn between<T>(value: T, lower: T, upper: T, name: &'static str) -> Result<T>
where
    T: PartialOrd + Display,
{
    if !candybox_number::between(&value, &lower, &upper) {
        return Err(VerifyError::OutOfRange {
            name,
            value: value.to_string(),
            lower: lower.to_string(),
            upper: upper.to_string(),
        });
    }
    Ok(value)
}

pub fn is_true(condition: bool, message: impl Into<String>, name: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(VerifyError::Condition { name, message: message.into() })
    }
}

pub fn is_false(condition: bool, message: impl Into<String>, name: &'static str) -> Result<()> {
    is_true(!condition, message, name)
}

/// Requires an absolute URL with a host and no fragment. A query string is
/// accepted only with `allow_query`.
pub fn valid_url<'a>(
    url: Option<&'a str>,
    allow_query: bool,
    name: &'static str,
) -> Result<&'a str> {
    let url = not_null_or_white_space(url, name)?;
    if !is_url(url, allow_query) {
        tracing::trace!(url, name, "rejected url");
        return Err(VerifyError::InvalidUrl { name, url: url.to_string() });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_checks() {
        assert_eq!(not_null(Some(3), "count"), Ok(3));
        assert_eq!(not_null::<i32>(None, "count"), Err(VerifyError::Null { name: "count" }));
    }

    #[test]
    fn white_space() {
        assert_eq!(not_null_or_white_space(Some("hi"), "v"), Ok("hi"));
        assert_eq!(not_null_or_white_space(None, "v"), Err(VerifyError::Null { name: "v" }));
        for blank in ["", "   ", "\t\n"] {
            assert_eq!(
                not_null_or_white_space(Some(blank), "v"),
                Err(VerifyError::WhiteSpace { name: "v" })
            );
        }
    }

    #[test]
    fn collections() {
        assert_eq!(not_null_or_empty(Some(&[1, 2, 3][..]), "items").unwrap().len(), 3);
        assert_eq!(
            not_null_or_empty::<i32>(Some(&[][..]), "items"),
            Err(VerifyError::Empty { name: "items" })
        );
        assert_eq!(
            not_null_or_empty::<i32>(None, "items"),
            Err(VerifyError::Null { name: "items" })
        );
    }

    #[test]
    fn ranges_are_inclusive() {
        assert_eq!(between(5, 1, 10, "n"), Ok(5));
        assert_eq!(between(1, 1, 10, "n"), Ok(1));
        assert_eq!(between(10, 1, 10, "n"), Ok(10));
        let err = between(11, 1, 10, "n").unwrap_err();
        assert_eq!(err.to_string(), "the 'n' must be between 1 and 10, got 11");
    }

    #[test]
    fn conditions() {
        assert!(is_true(true, "must hold", "flag").is_ok());
        assert!(is_false(false, "must not hold", "flag").is_ok());
        assert_eq!(
            is_true(false, "must hold", "flag"),
            Err(VerifyError::Condition { name: "flag", message: "must hold".into() })
        );
        assert_eq!(is_false(true, "nope", "flag").unwrap_err().name(), "flag");
    }

    #[test]
    fn urls() {
        let url = "https://example.com/a";
        assert_eq!(valid_url(Some(url), false, "url"), Ok(url));
        assert!(matches!(
            valid_url(Some("https://example.com/?q=1"), false, "url"),
            Err(VerifyError::InvalidUrl { .. })
        ));
        assert!(valid_url(Some("https://example.com/?q=1"), true, "url").is_ok());
        assert_eq!(valid_url(Some(" "), true, "url"), Err(VerifyError::WhiteSpace { name: "url" }));
        assert!(matches!(
            valid_url(Some("not a url"), true, "url"),
            Err(VerifyError::InvalidUrl { .. })
        ));
    }
}
