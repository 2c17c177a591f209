//! Required-field validation.

use crate::error::{Error, Result};
use crate::wire::Recipients;

/// Values that can be present but empty.
pub trait IsEmpty {
    /// Returns true if the value counts as missing.
    fn is_empty_value(&self) -> bool;
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for &str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for Recipients {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for bool {
    fn is_empty_value(&self) -> bool {
        false
    }
}

/// Returns the value if it is present and non-empty.
///
/// # Errors
///
/// Returns [`Error::MissingField`] naming `field` if the value is absent,
/// an empty string, or an empty list.
pub fn require<T: IsEmpty>(field: &'static str, value: Option<T>) -> Result<T> {
    match value {
        Some(value) if !value.is_empty_value() => Ok(value),
        _ => Err(Error::MissingField(field)),
    }
}

/// Returns the value only if it is present and non-empty.
///
/// Used for optional fields, where an empty value is treated as absent.
#[must_use]
pub fn present<T: IsEmpty>(value: Option<T>) -> Option<T> {
    value.filter(|v| !v.is_empty_value())
}
