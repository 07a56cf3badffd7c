//! Built-in vendor preferences.
//!
//! Each built-in vendor has a base property list (`css.{vendor}Properties`)
//! and an addon list (`css.{vendor}PropertiesAddon`) users edit to add or
//! remove single properties without replacing the base list.

use crate::preferences::Preferences;

pub const AUTO_INSERT_VENDOR_PREFIXES: &str = "css.autoInsertVendorPrefixes";
pub const ALIGN_VENDOR: &str = "css.alignVendor";

/// Built-in vendors: (key, prefix, supported properties).
pub const BUILTIN_VENDORS: &[(&str, &str, &str)] = &[
    ("w", "webkit", WEBKIT_PROPERTIES),
    ("m", "moz", MOZ_PROPERTIES),
    ("s", "ms", MS_PROPERTIES),
    ("o", "o", OPERA_PROPERTIES),
];

const WEBKIT_PROPERTIES: &str = "animation, animation-delay, animation-direction, animation-duration, \
    animation-fill-mode, animation-iteration-count, animation-name, animation-play-state, \
    animation-timing-function, appearance, backface-visibility, background-clip, \
    background-composite, background-origin, background-size, border-fit, \
    border-horizontal-spacing, border-image, border-vertical-spacing, box-align, box-direction, \
    box-flex, box-flex-group, box-lines, box-ordinal-group, box-orient, box-pack, box-reflect, \
    box-shadow, color-correction, column-break-after, column-break-before, column-break-inside, \
    column-count, column-gap, column-rule-color, column-rule-style, column-rule-width, \
    column-span, column-width, dashboard-region, font-smoothing, highlight, \
    hyphenate-character, hyphenate-limit-after, hyphenate-limit-before, hyphens, \
    line-box-contain, line-break, line-clamp, locale, margin-before-collapse, \
    margin-after-collapse, marquee-direction, marquee-increment, marquee-repetition, \
    marquee-style, mask-attachment, mask-box-image, mask-box-image-outset, \
    mask-box-image-repeat, mask-box-image-slice, mask-box-image-source, mask-box-image-width, \
    mask-clip, mask-composite, mask-image, mask-origin, mask-position, mask-repeat, mask-size, \
    nbsp-mode, perspective, perspective-origin, rtl-ordering, text-combine, \
    text-decorations-in-effect, text-emphasis-color, text-emphasis-position, \
    text-emphasis-style, text-fill-color, text-orientation, text-security, text-stroke-color, \
    text-stroke-width, transform, transition, transform-origin, transform-style, \
    transition-delay, transition-duration, transition-property, transition-timing-function, \
    user-drag, user-modify, user-select, writing-mode, svg-shadow, box-sizing, border-radius";

const MOZ_PROPERTIES: &str = "animation-delay, animation-direction, animation-duration, \
    animation-fill-mode, animation-iteration-count, animation-name, animation-play-state, \
    animation-timing-function, appearance, backface-visibility, background-inline-policy, \
    binding, border-bottom-colors, border-image, border-left-colors, border-right-colors, \
    border-top-colors, box-align, box-direction, box-flex, box-ordinal-group, box-orient, \
    box-pack, box-shadow, box-sizing, column-count, column-gap, column-rule-color, \
    column-rule-style, column-rule-width, column-width, float-edge, font-feature-settings, \
    font-language-override, force-broken-image-icon, hyphens, image-region, orient, \
    outline-radius-bottomleft, outline-radius-bottomright, outline-radius-topleft, \
    outline-radius-topright, perspective, perspective-origin, stack-sizing, tab-size, \
    text-blink, text-decoration-color, text-decoration-line, text-decoration-style, \
    text-size-adjust, transform, transform-origin, transform-style, transition, \
    transition-delay, transition-duration, transition-property, transition-timing-function, \
    user-focus, user-input, user-modify, user-select, window-shadow, background-clip, \
    border-radius";

const MS_PROPERTIES: &str = "accelerator, backface-visibility, background-position-x, \
    background-position-y, behavior, block-progression, box-align, box-direction, box-flex, \
    box-line-progression, box-lines, box-ordinal-group, box-orient, box-pack, \
    content-zoom-boundary, content-zoom-boundary-max, content-zoom-boundary-min, \
    content-zoom-chaining, content-zoom-snap, content-zoom-snap-points, content-zoom-snap-type, \
    content-zooming, filter, flow-from, flow-into, font-feature-settings, grid-column, \
    grid-column-align, grid-column-span, grid-columns, grid-layer, grid-row, grid-row-align, \
    grid-row-span, grid-rows, high-contrast-adjust, hyphenate-limit-chars, \
    hyphenate-limit-lines, hyphenate-limit-zone, hyphens, ime-mode, interpolation-mode, \
    layout-flow, layout-grid, layout-grid-char, layout-grid-line, layout-grid-mode, \
    layout-grid-type, line-break, overflow-style, perspective, perspective-origin, \
    perspective-origin-x, perspective-origin-y, scroll-boundary, scroll-boundary-bottom, \
    scroll-boundary-left, scroll-boundary-right, scroll-boundary-top, scroll-chaining, \
    scroll-rails, scroll-snap-points-x, scroll-snap-points-y, scroll-snap-type, scroll-snap-x, \
    scroll-snap-y, scrollbar-arrow-color, scrollbar-base-color, scrollbar-darkshadow-color, \
    scrollbar-face-color, scrollbar-highlight-color, scrollbar-shadow-color, \
    scrollbar-track-color, text-align-last, text-autospace, text-justify, text-kashida-space, \
    text-overflow, text-size-adjust, text-underline-position, touch-action, transform, \
    transform-origin, transform-origin-x, transform-origin-y, transform-origin-z, \
    transform-style, transition, transition-delay, transition-duration, transition-property, \
    transition-timing-function, user-select, word-break, wrap-flow, wrap-margin, wrap-through, \
    writing-mode";

const OPERA_PROPERTIES: &str = "dashboard-region, animation, animation-delay, \
    animation-direction, animation-duration, animation-fill-mode, animation-iteration-count, \
    animation-name, animation-play-state, animation-timing-function, border-image, link, \
    link-source, object-fit, object-position, tab-size, table-baseline, transform, \
    transform-origin, transition, transition-delay, transition-duration, transition-property, \
    transition-timing-function, accesskey, input-format, input-required, marquee-dir, \
    marquee-loop, marquee-speed, marquee-style";

/// Preference key holding the base property list for `prefix`.
pub fn properties_key(prefix: &str) -> String {
    format!("css.{prefix}Properties")
}

/// Preference key holding the addon list for a base key.
pub fn addon_key(properties_key: &str) -> String {
    format!("{properties_key}Addon")
}

/// Defines every preference the registry and expansion read.
pub fn register_vendor_preferences(prefs: &mut Preferences) {
    prefs.define(
        AUTO_INSERT_VENDOR_PREFIXES,
        true,
        "Generate vendor-prefixed copies of an expanded property even when the \
         abbreviation has no leading dash.",
    );
    for syntax in ["less", "scss", "sass", "stylus"] {
        prefs.define(
            format!("{syntax}.autoInsertVendorPrefixes"),
            false,
            format!("css.autoInsertVendorPrefixes for {syntax} sources."),
        );
    }

    for (_, prefix, properties) in BUILTIN_VENDORS {
        let key = properties_key(prefix);
        prefs.define(
            addon_key(&key),
            "",
            format!(
                "Comma-separated properties to add to (`name`, `+name`) or remove from \
                 (`-name`) {key}."
            ),
        );
        prefs.define(
            key,
            *properties,
            format!("Comma-separated CSS properties that take the -{prefix}- prefix."),
        );
    }

    prefs.define(
        ALIGN_VENDOR,
        false,
        "Pad vendor-prefixed properties so the unprefixed names line up.",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defines_lists_for_each_vendor() {
        let mut prefs = Preferences::new();
        register_vendor_preferences(&mut prefs);

        for (_, prefix, _) in BUILTIN_VENDORS {
            let key = properties_key(prefix);
            assert!(prefs.get_array(&key).is_some_and(|list| !list.is_empty()));
            assert_eq!(prefs.get_array(&addon_key(&key)), None);
        }
        assert_eq!(prefs.get_bool(AUTO_INSERT_VENDOR_PREFIXES), Some(true));
        assert_eq!(prefs.get_bool(ALIGN_VENDOR), Some(false));
    }

    #[test]
    fn test_line_continuations_do_not_leak_whitespace() {
        let mut prefs = Preferences::new();
        register_vendor_preferences(&mut prefs);
        let list = prefs.get_array("css.webkitProperties").unwrap_or_default();
        assert!(list.iter().all(|p| !p.contains(char::is_whitespace)));
        assert!(list.iter().any(|p| p == "box-shadow"));
    }
}
