//! Static lookup tables used by the resolver and normalizer.
//!
//! All tables are compile-time [`phf`] maps: they are built once, never
//! mutated, and safe to read from any thread. User-supplied snippets are
//! layered on top by [`Resolver`](crate::resolver::Resolver) rather than
//! written into these tables.

use phf::{phf_map, phf_set};
use std::borrow::Cow;

/// What an abbreviated property name expands to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Snippet {
    /// Canonical property with no default value, emits a `${1}` tab stop.
    Property(Cow<'static, str>),
    /// Canonical property with a multi-slot placeholder template.
    Template {
        property: Cow<'static, str>,
        value: Cow<'static, str>,
    },
    /// Property and value fused into one abbreviation, e.g. `poa`.
    Fused {
        property: Cow<'static, str>,
        value: Cow<'static, str>,
    },
}

impl Snippet {
    /// Parses a user snippet written as `property:value`.
    ///
    /// An empty value or a lone `${1}` gives a [`Snippet::Property`], a value
    /// with placeholders a [`Snippet::Template`], anything else a
    /// [`Snippet::Fused`]. A string without `:` is taken as a bare property.
    pub fn parse(source: &str) -> Self {
        let source = source.trim().trim_end_matches(';');
        let Some((property, value)) = source.split_once(':') else {
            return Snippet::Property(Cow::Owned(source.trim().to_string()));
        };

        let property = Cow::Owned(property.trim().to_string());
        let value = value.trim();
        if value.is_empty() || value == "${1}" {
            Snippet::Property(property)
        } else if value.contains("${") {
            Snippet::Template {
                property,
                value: Cow::Owned(value.to_string()),
            }
        } else {
            Snippet::Fused {
                property,
                value: Cow::Owned(value.to_string()),
            }
        }
    }

    /// The canonical property name this snippet resolves to.
    pub fn property(&self) -> &str {
        match self {
            Snippet::Property(property)
            | Snippet::Template { property, .. }
            | Snippet::Fused { property, .. } => property,
        }
    }

    /// Value emitted when the abbreviation carries no value of its own.
    pub fn default_value(&self) -> &str {
        match self {
            Snippet::Property(_) => "${1}",
            Snippet::Template { value, .. } | Snippet::Fused { value, .. } => value,
        }
    }

    pub fn is_fused(&self) -> bool {
        matches!(self, Snippet::Fused { .. })
    }
}

const fn prop(property: &'static str) -> Snippet {
    Snippet::Property(Cow::Borrowed(property))
}

const fn template(property: &'static str, value: &'static str) -> Snippet {
    Snippet::Template {
        property: Cow::Borrowed(property),
        value: Cow::Borrowed(value),
    }
}

const fn fused(property: &'static str, value: &'static str) -> Snippet {
    Snippet::Fused {
        property: Cow::Borrowed(property),
        value: Cow::Borrowed(value),
    }
}

/// Abbreviated property names.
pub static SNIPPETS: phf::Map<&'static str, Snippet> = phf_map! {
    // Positioning
    "pos" => template("position", "${1:relative}"),
    "pos-s" => fused("position", "static"),
    "pos-a" => fused("position", "absolute"),
    "pos-r" => fused("position", "relative"),
    "pos-f" => fused("position", "fixed"),
    "poa" => fused("position", "absolute"),
    "por" => fused("position", "relative"),
    "pof" => fused("position", "fixed"),
    "t" => prop("top"),
    "r" => prop("right"),
    "b" => prop("bottom"),
    "l" => prop("left"),
    "z" => prop("z-index"),
    "fl" => template("float", "${1:left}"),
    "fl-n" => fused("float", "none"),
    "fl-l" => fused("float", "left"),
    "fl-r" => fused("float", "right"),
    "cl" => template("clear", "${1:both}"),
    "cl-n" => fused("clear", "none"),
    "cl-b" => fused("clear", "both"),

    // Display
    "d" => template("display", "${1:block}"),
    "d-n" => fused("display", "none"),
    "d-b" => fused("display", "block"),
    "d-f" => fused("display", "flex"),
    "d-i" => fused("display", "inline"),
    "d-ib" => fused("display", "inline-block"),
    "d-if" => fused("display", "inline-flex"),
    "d-g" => fused("display", "grid"),
    "d-tb" => fused("display", "table"),
    "d-tbc" => fused("display", "table-cell"),
    "v" => template("visibility", "${1:hidden}"),
    "v-v" => fused("visibility", "visible"),
    "v-h" => fused("visibility", "hidden"),
    "ov" => template("overflow", "${1:hidden}"),
    "ov-v" => fused("overflow", "visible"),
    "ov-h" => fused("overflow", "hidden"),
    "ov-s" => fused("overflow", "scroll"),
    "ov-a" => fused("overflow", "auto"),
    "ovx" => template("overflow-x", "${1:hidden}"),
    "ovy" => template("overflow-y", "${1:hidden}"),
    "cur" => template("cursor", "${1:pointer}"),
    "cur-p" => fused("cursor", "pointer"),
    "cur-d" => fused("cursor", "default"),
    "zm" => fused("zoom", "1"),
    "op" => prop("opacity"),

    // Box model
    "m" => prop("margin"),
    "mt" => prop("margin-top"),
    "mr" => prop("margin-right"),
    "mb" => prop("margin-bottom"),
    "ml" => prop("margin-left"),
    "m-a" => fused("margin", "auto"),
    "p" => prop("padding"),
    "pt" => prop("padding-top"),
    "pr" => prop("padding-right"),
    "pb" => prop("padding-bottom"),
    "pl" => prop("padding-left"),
    "w" => prop("width"),
    "h" => prop("height"),
    "maw" => prop("max-width"),
    "mah" => prop("max-height"),
    "miw" => prop("min-width"),
    "mih" => prop("min-height"),
    "bxz" => template("box-sizing", "${1:border-box}"),
    "bxz-cb" => fused("box-sizing", "content-box"),
    "bxz-bb" => fused("box-sizing", "border-box"),
    "bxsh" => template("box-shadow", "${1:inset }${2:hoff} ${3:voff} ${4:blur} ${5:color}"),
    "bxsh-n" => fused("box-shadow", "none"),

    // Border and outline
    "bd" => template("border", "${1:1px} ${2:solid} ${3:#000}"),
    "bd-n" => fused("border", "none"),
    "bdt" => template("border-top", "${1:1px} ${2:solid} ${3:#000}"),
    "bdr" => template("border-right", "${1:1px} ${2:solid} ${3:#000}"),
    "bdb" => template("border-bottom", "${1:1px} ${2:solid} ${3:#000}"),
    "bdl" => template("border-left", "${1:1px} ${2:solid} ${3:#000}"),
    "bdc" => template("border-color", "${1:#000}"),
    "bdw" => prop("border-width"),
    "bds" => template("border-style", "${1:solid}"),
    "bdrs" => prop("border-radius"),
    "bdcl" => template("border-collapse", "${1:collapse}"),
    "bdsp" => prop("border-spacing"),
    "bdi" => template("border-image", "url(${1})"),
    "ol" => template("outline", "${1:1px} ${2:solid} ${3:#000}"),
    "ol-n" => fused("outline", "none"),

    // Background and color
    "c" => template("color", "${1:#000}"),
    "bg" => template("background", "${1:#000}"),
    "bg-n" => fused("background", "none"),
    "bgc" => template("background-color", "${1:#fff}"),
    "bgi" => template("background-image", "url(${1})"),
    "bgr" => template("background-repeat", "${1:no-repeat}"),
    "bgp" => template("background-position", "${1:0} ${2:0}"),
    "bgsz" => prop("background-size"),
    "bgcp" => template("background-clip", "${1:padding-box}"),
    "bgo" => template("background-origin", "${1:padding-box}"),

    // Typography
    "f" => template("font", "${1:1em} ${2:Arial,sans-serif}"),
    "fz" => prop("font-size"),
    "ff" => prop("font-family"),
    "fw" => template("font-weight", "${1:bold}"),
    "fw-b" => fused("font-weight", "bold"),
    "fw-n" => fused("font-weight", "normal"),
    "fs" => template("font-style", "${1:italic}"),
    "fs-i" => fused("font-style", "italic"),
    "fs-n" => fused("font-style", "normal"),
    "lh" => prop("line-height"),
    "ta" => template("text-align", "${1:left}"),
    "ta-l" => fused("text-align", "left"),
    "ta-c" => fused("text-align", "center"),
    "ta-r" => fused("text-align", "right"),
    "ta-j" => fused("text-align", "justify"),
    "td" => template("text-decoration", "${1:none}"),
    "td-n" => fused("text-decoration", "none"),
    "td-u" => fused("text-decoration", "underline"),
    "tt" => template("text-transform", "${1:uppercase}"),
    "tt-u" => fused("text-transform", "uppercase"),
    "tt-l" => fused("text-transform", "lowercase"),
    "ti" => prop("text-indent"),
    "tsh" => template("text-shadow", "${1:hoff} ${2:voff} ${3:blur} ${4:#000}"),
    "va" => template("vertical-align", "${1:top}"),
    "ws" => template("white-space", "${1:nowrap}"),
    "wob" => template("word-break", "${1:break-all}"),
    "lis" => prop("list-style"),
    "lis-n" => fused("list-style", "none"),
    "cnt" => template("content", "'${1}'"),
    "us" => template("user-select", "${1:none}"),
    "hyp" => prop("hyphens"),

    // Transforms, transitions, animation
    "trf" => prop("transform"),
    "trfo" => template("transform-origin", "${1:0} ${2:0}"),
    "trfs" => template("transform-style", "${1:preserve-3d}"),
    "trs" => template("transition", "${1:prop} ${2:time}"),
    "trsde" => template("transition-delay", "${1:time}"),
    "trsdu" => template("transition-duration", "${1:time}"),
    "trsp" => template("transition-property", "${1:prop}"),
    "trstf" => template("transition-timing-function", "${1:ease}"),
    "anim" => prop("animation"),
    "animn" => prop("animation-name"),
    "animdel" => template("animation-delay", "${1:time}"),
    "animdur" => template("animation-duration", "${1:0}s"),
    "persp" => prop("perspective"),
    "app" => template("appearance", "${1:none}"),
    "bfv" => template("backface-visibility", "${1:hidden}"),

    // Flexbox
    "fx" => prop("flex"),
    "fxd" => template("flex-direction", "${1:row}"),
    "fxw" => template("flex-wrap", "${1:wrap}"),
    "fxg" => prop("flex-grow"),
    "fxsh" => prop("flex-shrink"),
    "fxb" => prop("flex-basis"),
    "jc" => template("justify-content", "${1:center}"),
    "ai" => template("align-items", "${1:center}"),
    "ac" => template("align-content", "${1:center}"),
    "as" => template("align-self", "${1:center}"),
    "ord" => prop("order"),
};

/// Keyword shorthands expanded by the normalizer.
pub static KEYWORD_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "a" => "auto",
    "i" => "inherit",
    "s" => "solid",
    "da" => "dashed",
    "do" => "dotted",
    "t" => "transparent",
    "n" => "none",
    "u" => "unset",
    "b" => "bold",
    "c" => "center",
};

/// Color tokens that are complete keywords rather than hex payloads (`#t`).
pub static COLOR_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "t" => "transparent",
};

/// One- or two-letter unit shorthands (`10e` -> `10em`).
pub static UNIT_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "e" => "em",
    "p" => "%",
    "x" => "ex",
    "r" => "rem",
    "w" => "vw",
    "h" => "vh",
};

/// Full unit names that are never treated as aliases.
pub static KNOWN_UNITS: phf::Set<&'static str> = phf_set! {
    "%", "px", "em", "ex", "rem", "ch", "pt", "pc", "cm", "mm", "in", "q",
    "vw", "vh", "vmin", "vmax", "fr", "deg", "rad", "grad", "turn",
    "s", "ms", "hz", "khz", "dpi", "dpcm", "dppx",
};

/// Properties whose bare numbers never get a unit appended.
pub const UNITLESS_PROPERTIES: &[&str] = &[
    "z-index",
    "line-height",
    "opacity",
    "font-weight",
    "zoom",
    "flex",
    "flex-grow",
    "flex-shrink",
    "order",
    "orphans",
    "widows",
];

/// Returns `true` if `name` is a color alias such as `t`.
pub fn is_color_alias(name: &str) -> bool {
    COLOR_ALIASES.contains_key(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_snippet_defaults_to_tab_stop() {
        let snippet = SNIPPETS.get("p").expect("padding snippet");
        assert_eq!(snippet.property(), "padding");
        assert_eq!(snippet.default_value(), "${1}");
    }

    #[test]
    fn test_parse_user_snippets() {
        assert_eq!(Snippet::parse("gap"), prop("gap"));
        assert_eq!(Snippet::parse("gap:${1}"), prop("gap"));
        assert_eq!(
            Snippet::parse("inset: ${1:0} ${2:0};"),
            template("inset", "${1:0} ${2:0}")
        );
        assert_eq!(Snippet::parse("d:contents"), fused("d", "contents"));
    }

    #[test]
    fn test_alias_tables_do_not_overlap_units() {
        for alias in UNIT_ALIASES.keys() {
            assert!(!KNOWN_UNITS.contains(*alias), "{alias} shadows a unit");
        }
    }
}
