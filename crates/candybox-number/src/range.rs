use crate::error::{Error, Result};

/// Inclusive range check: `lower <= value <= upper`.
pub fn between<T: PartialOrd>(value: &T, lower: &T, upper: &T) -> bool {
    value >= lower && value <= upper
}

/// Returns whether `item` equals any element of `list`.
///
/// An empty list is a caller error rather than a `false`.
pub fn is_in<T: PartialEq>(item: &T, list: &[T]) -> Result<bool> {
    if list.is_empty() {
        return Err(Error::EmptyList { name: "list" });
    }
    Ok(list.contains(item))
}
