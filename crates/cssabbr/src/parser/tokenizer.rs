//! Value tokenizer for abbreviation values.
//!
//! Splits a compact value such as `1-s#0` or `10em-10px10` into typed atoms.
//! At every cursor position the matchers below are tried in order and the
//! first one that succeeds wins:
//!
//! 1. `#…` color (hex digits, optional `.alpha` suffix, or a color alias)
//! 2. `$…` variable reference
//! 3. number starting with a digit or `.`, followed by an optional unit
//! 4. `-` + number, the sign of the number (only when the `-` does not
//!    directly follow a digit)
//! 5. separator (`-` or whitespace), produces no token
//! 6. keyword run
//!
//! The tokenizer is total: any character no matcher accepts becomes a
//! one-character keyword.

use crate::dictionary::is_color_alias;
use crate::types::ValueToken;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{alpha1, anychar, char, digit1, hex_digit1, satisfy},
    combinator::{map, opt, recognize, value, verify},
    sequence::{pair, preceded, tuple},
};

/// Splits `input` into value tokens.
///
/// # Examples
///
/// ```
/// use cssabbr::parser::tokenize;
///
/// let tokens = tokenize("10em-10px10");
/// let raw: Vec<_> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(raw, ["10em", "-10px", "10"]);
/// ```
pub fn tokenize(input: &str) -> Vec<ValueToken> {
    let mut tokens = Vec::new();
    let mut rest = input;
    let mut after_digit = false;

    while !rest.is_empty() {
        let (remaining, token) = match next_token(rest, after_digit) {
            Ok(step) => step,
            // unreachable in practice: the last matcher accepts any character
            Err(_) => break,
        };

        let consumed = &rest[..rest.len() - remaining.len()];
        after_digit = consumed
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_digit() || c == '.');

        if let Some(token) = token {
            log::trace!("tokenize: {:?} {:?}", token.kind, token.raw);
            tokens.push(token);
        }
        rest = remaining;
    }

    tokens
}

/// Tokenizes and returns the raw token texts, the shape callers usually want.
pub fn parse_value(input: &str) -> Vec<String> {
    tokenize(input).into_iter().map(|t| t.raw).collect()
}

/// Runs the ordered matchers once. `None` means a separator was consumed.
fn next_token(input: &str, after_digit: bool) -> IResult<&str, Option<ValueToken>> {
    // A sign never follows a digit: `10-10` is two numbers, not `10` and `-10`.
    if !after_digit {
        if let Ok((rest, token)) = signed_number(input) {
            return Ok((rest, Some(token)));
        }
    }

    alt((
        map(color, Some),
        map(variable, Some),
        map(number, Some),
        value(None, separator),
        map(keyword, Some),
        map(recognize(anychar), |s: &str| Some(ValueToken::keyword(s))),
    ))(input)
}

/// `.5` style alpha suffix attached to a color.
fn alpha_suffix(input: &str) -> IResult<&str, &str> {
    recognize(pair(char('.'), digit1))(input)
}

fn color(input: &str) -> IResult<&str, ValueToken> {
    map(
        recognize(preceded(
            char('#'),
            alt((
                recognize(pair(hex_digit1, opt(alpha_suffix))),
                verify(alpha1, is_color_alias),
                recognize(opt(alpha_suffix)),
            )),
        )),
        ValueToken::color,
    )(input)
}

fn variable(input: &str) -> IResult<&str, ValueToken> {
    map(
        recognize(pair(
            char('$'),
            take_while(|c: char| c.is_alphanumeric() || c == '_'),
        )),
        ValueToken::variable,
    )(input)
}

/// Digits with an optional fraction (`10`, `1.5`) or a bare fraction (`.5`).
/// A dot without fraction digits is not part of the number.
fn numeric_body(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        recognize(pair(char('.'), digit1)),
    ))(input)
}

fn unit(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_ascii_alphabetic() || c == '%')(input)
}

fn number(input: &str) -> IResult<&str, ValueToken> {
    map(recognize(pair(numeric_body, unit)), ValueToken::number)(input)
}

fn signed_number(input: &str) -> IResult<&str, ValueToken> {
    map(
        recognize(tuple((char('-'), numeric_body, unit))),
        ValueToken::number,
    )(input)
}

fn separator(input: &str) -> IResult<&str, char> {
    alt((char('-'), satisfy(char::is_whitespace)))(input)
}

fn keyword(input: &str) -> IResult<&str, ValueToken> {
    map(
        take_while1(|c: char| {
            !(c == '-' || c == '#' || c == '$' || c == '.' || c.is_ascii_digit() || c.is_whitespace())
        }),
        ValueToken::keyword,
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TokenKind;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_classifies_each_kind() {
        assert_eq!(
            kinds("1-s#0$a"),
            [
                TokenKind::Number,
                TokenKind::Keyword,
                TokenKind::Color,
                TokenKind::Variable
            ]
        );
    }

    #[test]
    fn test_dash_after_digit_is_separator() {
        assert_eq!(parse_value("10-10"), ["10", "10"]);
    }

    #[test]
    fn test_dash_after_unit_is_sign() {
        assert_eq!(parse_value("10em-10px"), ["10em", "-10px"]);
    }

    #[test]
    fn test_double_dash_is_separator_and_sign() {
        assert_eq!(parse_value("10-10--10"), ["10", "10", "-10"]);
    }

    #[test]
    fn test_variable_keeps_digits() {
        assert_eq!(parse_value("$size32"), ["$size32"]);
    }

    #[test]
    fn test_color_alpha_suffix_stays_in_token() {
        assert_eq!(parse_value("#fc0.333"), ["#fc0.333"]);
        assert_eq!(kinds("#f.5"), [TokenKind::Color]);
    }

    #[test]
    fn test_color_alias_is_consumed() {
        assert_eq!(parse_value("#t"), ["#t"]);
    }

    #[test]
    fn test_bare_hash_is_color() {
        assert_eq!(tokenize("#"), [ValueToken::color("#")]);
    }

    #[test]
    fn test_stray_characters_become_keywords() {
        assert_eq!(parse_value("."), ["."]);
        assert_eq!(parse_value("a.b"), ["a", ".", "b"]);
    }

    #[test]
    fn test_number_needs_fraction_digits_after_dot() {
        assert_eq!(parse_value("10.e"), ["10", ".", "e"]);
        assert_eq!(parse_value("10."), ["10", "."]);
        assert_eq!(parse_value("1.5e"), ["1.5e"]);
    }

    #[test]
    fn test_trailing_dash_produces_nothing() {
        assert!(tokenize("-").is_empty());
        assert_eq!(parse_value("5-"), ["5"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }
}
