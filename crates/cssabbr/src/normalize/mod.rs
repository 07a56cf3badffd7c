//! Value normalization.
//!
//! Maps each [`ValueToken`] to its canonical CSS text. Normalization is pure
//! and looks at one token at a time; the only context it receives is the
//! resolved property name and the [`NormalizeOptions`] passed in by the
//! caller. The set of unitless properties is part of those options, the
//! resolver owns it.
//!
//! - [`units`]: numbers, default units and unit aliases
//! - [`color`]: hex expansion, color aliases and `rgba()` conversion

pub mod color;
pub mod units;

use crate::dictionary::KEYWORD_ALIASES;
use crate::types::{TokenKind, ValueToken};

pub use color::normalize_color;
pub use units::normalize_number;

/// Knobs for number normalization.
#[derive(Clone, Copy, Debug)]
pub struct NormalizeOptions<'a> {
    /// Append a default unit to bare nonzero numbers.
    pub auto_unit: bool,
    /// Unit appended to bare integers.
    pub int_unit: &'a str,
    /// Unit appended to bare fractional numbers.
    pub float_unit: &'a str,
    /// Properties whose numbers stay unitless.
    pub unitless: &'a [String],
}

impl Default for NormalizeOptions<'_> {
    fn default() -> Self {
        Self {
            auto_unit: true,
            int_unit: "px",
            float_unit: "px",
            unitless: &[],
        }
    }
}

impl NormalizeOptions<'_> {
    pub fn is_unitless(&self, property: &str) -> bool {
        self.unitless.iter().any(|p| p == property)
    }
}

/// Normalizes a single token.
///
/// # Examples
///
/// ```
/// use cssabbr::normalize::{normalize_token, NormalizeOptions};
/// use cssabbr::ValueToken;
///
/// let options = NormalizeOptions::default();
/// assert_eq!(normalize_token(&ValueToken::keyword("s"), None, &options), "solid");
/// assert_eq!(normalize_token(&ValueToken::color("#0"), None, &options), "#000");
/// ```
pub fn normalize_token(token: &ValueToken, property: Option<&str>, options: &NormalizeOptions<'_>) -> String {
    match token.kind {
        TokenKind::Number => normalize_number(&token.raw, property, options),
        TokenKind::Color => normalize_color(&token.raw),
        TokenKind::Keyword => normalize_keyword(&token.raw),
        TokenKind::Variable => token.raw.clone(),
    }
}

/// Expands keyword aliases (`s` -> `solid`); other words pass through.
pub fn normalize_keyword(raw: &str) -> String {
    KEYWORD_ALIASES
        .get(raw)
        .map_or_else(|| raw.to_string(), |keyword| (*keyword).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_aliases() {
        assert_eq!(normalize_keyword("s"), "solid");
        assert_eq!(normalize_keyword("i"), "inherit");
        assert_eq!(normalize_keyword("a"), "auto");
        assert_eq!(normalize_keyword("auto"), "auto");
        assert_eq!(normalize_keyword("foo"), "foo");
    }

    #[test]
    fn test_bold_and_center_aliases() {
        assert_eq!(normalize_keyword("b"), "bold");
        assert_eq!(normalize_keyword("c"), "center");
    }

    #[test]
    fn test_variables_are_untouched() {
        let token = ValueToken::variable("$size32");
        assert_eq!(
            normalize_token(&token, Some("margin"), &NormalizeOptions::default()),
            "$size32"
        );
    }
}
