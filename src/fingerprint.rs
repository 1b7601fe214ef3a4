//! Lookup fingerprint validation.
//!
//! A fingerprint is the validated address string used both as the lookup key
//! and as the history key. Validation is deliberately shape-only: four groups
//! of 1-3 ASCII digits separated by dots. Octet range (0-255) and
//! reserved/private ranges are NOT checked, because the lookup service accepts
//! any well-formed string and decides for itself.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error_handling::ValidationError;

// [0-9] rather than \d: regex's \d matches every Unicode decimal digit.
static DOTTED_QUAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").expect("dotted-quad pattern is valid")
});

/// An address string that passed `validate`.
///
/// Holds the trimmed input exactly as typed; nothing else is normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidIp(String);

impl ValidIp {
    /// Borrow the address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the address string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ValidIp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validates a raw address string.
///
/// Leading and trailing whitespace is trimmed first; anything left must match
/// the dotted-quad shape exactly.
///
/// # Errors
///
/// - `ValidationError::Empty` if the input is blank after trimming
/// - `ValidationError::Malformed` otherwise
///
/// # Examples
///
/// ```
/// use ipgeo_client::{validate, ValidationError};
///
/// assert_eq!(validate(" 8.8.8.8 ").unwrap().as_str(), "8.8.8.8");
/// assert_eq!(validate("   "), Err(ValidationError::Empty));
/// assert_eq!(validate("8.8.8"), Err(ValidationError::Malformed));
/// ```
pub fn validate(raw: &str) -> Result<ValidIp, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !DOTTED_QUAD.is_match(trimmed) {
        return Err(ValidationError::Malformed);
    }
    Ok(ValidIp(trimmed.to_string()))
}
