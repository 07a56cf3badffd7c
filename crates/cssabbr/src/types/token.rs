//! Typed value atoms produced by the tokenizer.

use std::fmt;

/// Classification of a single value atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric value with optional sign, fraction and unit: `10`, `-.5em`, `10%`.
    Number,
    /// Hex color, alias or alpha-bearing color: `#0`, `#fc0.333`, `#t`.
    Color,
    /// Variable reference: `$size`, `$size32`.
    Variable,
    /// Anything else, usually a keyword or keyword alias: `s`, `blue`, `auto`.
    Keyword,
}

/// A classified atom of an abbreviation value.
///
/// Tokens keep their raw text exactly as typed; canonical forms are produced
/// by [`normalize_token`](crate::normalize::normalize_token).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueToken {
    pub kind: TokenKind,
    pub raw: String,
}

impl ValueToken {
    pub fn new(kind: TokenKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }

    pub fn number(raw: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, raw)
    }

    pub fn color(raw: impl Into<String>) -> Self {
        Self::new(TokenKind::Color, raw)
    }

    pub fn variable(raw: impl Into<String>) -> Self {
        Self::new(TokenKind::Variable, raw)
    }

    pub fn keyword(raw: impl Into<String>) -> Self {
        Self::new(TokenKind::Keyword, raw)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ValueToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
