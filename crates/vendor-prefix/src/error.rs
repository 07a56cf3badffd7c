//! Error types for preference handling.
//!
//! Prefix lookups never fail; only writes to the preference store can be
//! rejected.

use thiserror::Error;

/// Errors returned when writing preferences.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PreferenceError {
    /// The preference was never defined.
    #[error("undefined preference: {0}")]
    Undefined(String),

    /// The value's type differs from the preference's default.
    #[error("preference {key} expects a {expected} value, got {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}
