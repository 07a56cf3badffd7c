//! Vendor-prefixed declaration expansion.
//!
//! Combines the resolver and the prefix registry:
//!
//! - `-bxsh` expands to every prefix the property needs (all non-obsolete
//!   prefixes when nothing is known), followed by the unprefixed declaration
//! - `-wm-bxsh` expands only to the listed keys
//! - `bxsh` expands to the known prefixes when `css.autoInsertVendorPrefixes`
//!   is on, otherwise to the single declaration

use cssabbr::{Declaration, Resolver};
use vendor_prefix::{ALIGN_VENDOR, AUTO_INSERT_VENDOR_PREFIXES, PrefixRegistry};

/// Which prefixes an abbreviation asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
enum PrefixRequest {
    /// No leading dash.
    Implicit,
    /// Leading dash alone: every applicable prefix.
    All,
    /// `-wm-`: these keys, in this order.
    Keys(Vec<String>),
}

/// Strips a leading vendor marker off `abbr`.
fn extract_prefixes<'a>(abbr: &'a str, registry: &PrefixRegistry) -> (PrefixRequest, &'a str) {
    let Some(rest) = abbr.strip_prefix('-') else {
        return (PrefixRequest::Implicit, abbr);
    };

    if let Some((keys, tail)) = rest.split_once('-') {
        let all_registered = !keys.is_empty()
            && keys
                .chars()
                .all(|key| registry.get(key.encode_utf8(&mut [0; 4])).is_some());
        if all_registered && !tail.is_empty() {
            let keys = keys.chars().map(String::from).collect();
            return (PrefixRequest::Keys(keys), tail);
        }
    }

    (PrefixRequest::All, rest)
}

/// Expands `abbr` with the default resolver.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, RwLock};
/// use cssabbr_rs::expand;
/// use vendor_prefix::{PrefixRegistry, Preferences};
///
/// let registry = PrefixRegistry::with_builtins(Arc::new(RwLock::new(Preferences::new())));
/// let lines: Vec<String> = expand("-bdrs5", &registry)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
///
/// assert_eq!(
///     lines,
///     [
///         "-webkit-border-radius: 5px",
///         "-moz-border-radius: 5px",
///         "border-radius: 5px",
///     ]
/// );
/// ```
pub fn expand(abbr: &str, registry: &PrefixRegistry) -> Vec<Declaration> {
    expand_with(&Resolver::new(), abbr, registry)
}

/// Expands `abbr` into prefixed declarations followed by the plain one.
pub fn expand_with(resolver: &Resolver, abbr: &str, registry: &PrefixRegistry) -> Vec<Declaration> {
    let (request, abbr) = extract_prefixes(abbr, registry);
    let declaration = resolver.resolve(abbr);

    let keys = match request {
        PrefixRequest::Keys(keys) => keys,
        PrefixRequest::All => registry.find_internal_prefixes(&declaration.name, Some(false)),
        PrefixRequest::Implicit => {
            let auto_insert = registry
                .preferences()
                .read()
                .map(|prefs| prefs.get_bool(AUTO_INSERT_VENDOR_PREFIXES).unwrap_or(false))
                .unwrap_or(false);
            if auto_insert {
                registry.find_internal_prefixes(&declaration.name, Some(true))
            } else {
                Vec::new()
            }
        }
    };
    log::trace!("expanding {abbr:?} with prefixes {keys:?}");

    let mut declarations: Vec<Declaration> = keys
        .iter()
        .filter_map(|key| registry.get(key))
        .map(|definition| declaration.with_name(definition.transform_name(&declaration.name)))
        .collect();
    declarations.push(declaration);
    declarations
}

/// Renders declarations one per line, optionally aligning vendor prefixes.
///
/// With `align`, prefixed names are left-padded so the unprefixed part of
/// every name starts in the same column.
pub fn render(declarations: &[Declaration], align: bool) -> Vec<String> {
    let width = |decl: &Declaration| vendor_prefix_len(&decl.name);
    let widest = if align {
        declarations.iter().map(width).max().unwrap_or(0)
    } else {
        0
    };

    declarations
        .iter()
        .map(|decl| {
            let pad = if align { widest - width(decl) } else { 0 };
            format!("{:pad$}{decl}", "")
        })
        .collect()
}

/// Expands and renders, aligning according to `css.alignVendor`.
pub fn expand_lines(abbr: &str, registry: &PrefixRegistry) -> Vec<String> {
    let align = registry
        .preferences()
        .read()
        .map(|prefs| prefs.get_bool(ALIGN_VENDOR).unwrap_or(false))
        .unwrap_or(false);
    render(&expand(abbr, registry), align)
}

/// Length of the `-vendor-` part of a property name, 0 when unprefixed.
fn vendor_prefix_len(name: &str) -> usize {
    name.strip_prefix('-')
        .and_then(|rest| rest.find('-'))
        .map_or(0, |i| i + 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, RwLock};
    use vendor_prefix::Preferences;

    fn registry() -> PrefixRegistry {
        PrefixRegistry::with_builtins(Arc::new(RwLock::new(Preferences::new())))
    }

    #[test]
    fn test_extracts_explicit_keys() {
        let registry = registry();
        assert_eq!(
            extract_prefixes("-wm-bxsh", &registry),
            (PrefixRequest::Keys(vec!["w".into(), "m".into()]), "bxsh")
        );
        assert_eq!(extract_prefixes("-bxsh", &registry), (PrefixRequest::All, "bxsh"));
        assert_eq!(extract_prefixes("-bd-n", &registry), (PrefixRequest::All, "bd-n"));
        assert_eq!(extract_prefixes("bxsh", &registry), (PrefixRequest::Implicit, "bxsh"));
    }

    #[test]
    fn test_vendor_prefix_lengths() {
        assert_eq!(vendor_prefix_len("-webkit-box-shadow"), 8);
        assert_eq!(vendor_prefix_len("-o-transform"), 3);
        assert_eq!(vendor_prefix_len("box-shadow"), 0);
    }
}
