//! Property resolution and declaration assembly.
//!
//! A [`Resolver`] turns an abbreviation like `bd1-s-blue` or `poa!` into a
//! [`Declaration`]:
//!
//! 1. A trailing `!` is stripped and marks the declaration important.
//! 2. The abbreviation is split into name and raw value.
//! 3. The name is looked up in the user snippets, then the built-in
//!    dictionary.
//! 4. A raw value, if any, is tokenized and normalized against the resolved
//!    property and replaces the snippet's default value. Fused snippets
//!    ignore the raw value.
//!
//! The unitless-property policy lives in [`ResolverOptions`] and is handed to
//! the normalizer explicitly.

use crate::dictionary::{SNIPPETS, Snippet, UNITLESS_PROPERTIES};
use crate::normalize::{NormalizeOptions, normalize_token};
use crate::parser::{split_at_value, tokenize};
use crate::types::{Declaration, TokenKind};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static DEFAULT_RESOLVER: Lazy<Resolver> = Lazy::new(Resolver::new);

/// Unit policy applied while normalizing values.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolverOptions {
    /// Append a unit to bare nonzero numbers.
    pub auto_unit: bool,
    /// Unit for bare integers (`px`).
    pub int_unit: String,
    /// Unit for bare fractional numbers (`px`).
    pub float_unit: String,
    /// Properties that take plain numbers (`z-index`, `line-height`, …).
    pub unitless_properties: Vec<String>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            auto_unit: true,
            int_unit: "px".to_string(),
            float_unit: "px".to_string(),
            unitless_properties: UNITLESS_PROPERTIES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Resolves abbreviations into declarations.
///
/// # Examples
///
/// ```
/// use cssabbr::Resolver;
///
/// let resolver = Resolver::new();
/// assert_eq!(resolver.resolve("p10").to_string(), "padding: 10px");
/// assert_eq!(resolver.resolve("bd1-s-blue").to_string(), "border: 1px solid blue");
/// assert_eq!(resolver.resolve("poa!").to_string(), "position: absolute !important");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    options: ResolverOptions,
    snippets: HashMap<String, Snippet>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ResolverOptions) -> Self {
        Self {
            options,
            snippets: HashMap::new(),
        }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut ResolverOptions {
        &mut self.options
    }

    /// Adds a user snippet that takes precedence over the built-in dictionary.
    pub fn add_snippet(&mut self, abbr: impl Into<String>, snippet: Snippet) {
        let abbr = abbr.into();
        log::debug!("user snippet {abbr:?} -> {}", snippet.property());
        self.snippets.insert(abbr, snippet);
    }

    /// Builder form of [`add_snippet`](Self::add_snippet).
    pub fn with_snippet(mut self, abbr: impl Into<String>, snippet: Snippet) -> Self {
        self.add_snippet(abbr, snippet);
        self
    }

    /// Finds the snippet for an abbreviated name.
    pub fn lookup(&self, name: &str) -> Option<&Snippet> {
        self.snippets.get(name).or_else(|| SNIPPETS.get(name))
    }

    fn normalize_options(&self) -> NormalizeOptions<'_> {
        NormalizeOptions {
            auto_unit: self.options.auto_unit,
            int_unit: &self.options.int_unit,
            float_unit: &self.options.float_unit,
            unitless: &self.options.unitless_properties,
        }
    }

    /// Tokenizes `value` and normalizes every token, joined with spaces.
    pub fn normalize_value(&self, value: &str, property: Option<&str>) -> String {
        let options = self.normalize_options();
        tokenize(value)
            .iter()
            .map(|token| normalize_token(token, property, &options))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Resolves an abbreviation into a declaration.
    pub fn resolve(&self, abbr: &str) -> Declaration {
        let (abbr, important) = match abbr.strip_suffix('!') {
            Some(rest) => (rest, true),
            None => (abbr, false),
        };

        let (name, raw) = split_at_value(abbr);
        let mut declaration = match self.lookup(name) {
            Some(snippet) if snippet.is_fused() => {
                Declaration::new(snippet.property(), snippet.default_value())
            }
            Some(snippet) => self.assemble(snippet, raw, ""),
            None => match self.resolve_keyword_suffix(name) {
                Some((snippet, keywords)) => self.assemble(snippet, raw, keywords),
                None => {
                    log::trace!("no snippet for {name:?}");
                    Declaration::new(name, self.normalize_value(raw, Some(name)))
                }
            },
        };

        declaration.important = important;
        log::trace!("resolved {abbr:?} -> {declaration}");
        declaration
    }

    /// Fills a snippet with keyword text from the name and the raw value.
    fn assemble(&self, snippet: &Snippet, raw: &str, keywords: &str) -> Declaration {
        let property = snippet.property();
        let values: Vec<String> = [keywords, raw]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| self.normalize_value(part, Some(property)))
            .collect();

        if values.is_empty() {
            Declaration::new(property, snippet.default_value())
        } else {
            Declaration::new(property, values.join(" "))
        }
    }

    /// `m-a` -> (`m` snippet, `a`) when the tail is made only of keywords.
    fn resolve_keyword_suffix<'a>(&self, name: &'a str) -> Option<(&Snippet, &'a str)> {
        let (head, tail) = name.split_once('-')?;
        if tail.is_empty() {
            return None;
        }

        let snippet = self.lookup(head).filter(|s| !s.is_fused())?;
        let all_keywords = tokenize(tail)
            .iter()
            .all(|token| token.kind == TokenKind::Keyword);

        if all_keywords {
            log::debug!("keyword suffix {tail:?} on {}", snippet.property());
            Some((snippet, tail))
        } else {
            None
        }
    }
}

/// Resolves `abbr` with the default resolver.
///
/// # Examples
///
/// ```
/// assert_eq!(cssabbr::resolve("p").to_string(), "padding: ${1}");
/// assert_eq!(cssabbr::resolve("p5!").to_string(), "padding: 5px !important");
/// ```
pub fn resolve(abbr: &str) -> Declaration {
    DEFAULT_RESOLVER.resolve(abbr)
}

/// Alias of [`resolve`].
pub fn parse(abbr: &str) -> Declaration {
    resolve(abbr)
}

/// Normalizes a raw value with the default resolver's unit policy.
pub fn normalize_value(value: &str, property: Option<&str>) -> String {
    DEFAULT_RESOLVER.normalize_value(value, property)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fused_snippet_ignores_value() {
        assert_eq!(resolve("poa10").to_string(), "position: absolute");
    }

    #[test]
    fn test_keyword_suffix_on_property_snippet() {
        assert_eq!(resolve("m-a").to_string(), "margin: auto");
        assert_eq!(resolve("p-i").to_string(), "padding: inherit");
        assert_eq!(resolve("m-a-i").to_string(), "margin: auto inherit");
    }

    #[test]
    fn test_keyword_suffix_uses_alias_table() {
        assert_eq!(normalize_value("b-c", None), "bold center");
        assert_eq!(resolve("ta-c-x").to_string(), "text-align: center x");
        assert_eq!(resolve("w10w").to_string(), "width: 10vw");
        assert_eq!(resolve("h100h").to_string(), "height: 100vh");
    }

    #[test]
    fn test_trailing_dot_is_not_part_of_number() {
        assert_eq!(resolve("p10.e").to_string(), "padding: 10px . e");
        assert_eq!(resolve("p1.5e").to_string(), "padding: 1.5em");
    }

    #[test]
    fn test_unknown_name_keeps_literal() {
        assert_eq!(resolve("something").to_string(), "something: ");
        assert_eq!(resolve("margin-a").to_string(), "margin-a: ");
    }

    #[test]
    fn test_unknown_name_with_value_is_normalized() {
        assert_eq!(resolve("foo10").to_string(), "foo: 10px");
    }

    #[test]
    fn test_user_snippet_overrides_builtin() {
        let resolver = Resolver::new().with_snippet("p", Snippet::parse("place-items:${1:center}"));
        assert_eq!(resolver.resolve("p").to_string(), "place-items: ${1:center}");
        assert_eq!(resolver.resolve("pt").to_string(), "padding-top: ${1}");
    }

    #[test]
    fn test_options_drive_units() {
        let mut resolver = Resolver::new();
        resolver.options_mut().int_unit = "rem".to_string();
        resolver.options_mut().unitless_properties.push("width".to_string());
        assert_eq!(resolver.resolve("m2").to_string(), "margin: 2rem");
        assert_eq!(resolver.resolve("w2").to_string(), "width: 2");

        let resolver = Resolver::with_options(ResolverOptions {
            auto_unit: false,
            ..ResolverOptions::default()
        });
        assert_eq!(resolver.resolve("p10").to_string(), "padding: 10");
    }

    #[test]
    fn test_bare_bang_is_important_without_value() {
        let decl = resolve("p!");
        assert!(decl.important);
        assert_eq!(decl.value, "${1}");
    }
}
