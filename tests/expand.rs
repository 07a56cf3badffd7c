//! Integration tests for vendor-prefixed expansion.
//!
//! - Leading dash: all applicable prefixes
//! - Explicit key lists (`-wm-`)
//! - Implicit prefixes driven by preferences
//! - Aligned rendering

use cssabbr_rs::{
    ALIGN_VENDOR, AUTO_INSERT_VENDOR_PREFIXES, Declaration, Preferences, PrefixDefinition,
    PrefixRegistry, Resolver, Snippet, expand, expand_lines, expand_with, render,
};
use std::sync::{Arc, RwLock};

fn setup() -> (Arc<RwLock<Preferences>>, PrefixRegistry) {
    let prefs = Arc::new(RwLock::new(Preferences::new()));
    let registry = PrefixRegistry::with_builtins(Arc::clone(&prefs));
    (prefs, registry)
}

fn names(declarations: &[Declaration]) -> Vec<&str> {
    declarations.iter().map(|d| d.name.as_str()).collect()
}

// ============================================================================
// LEADING DASH
// ============================================================================

#[test]
fn test_dash_uses_known_prefixes() {
    let (_, registry) = setup();
    let declarations = expand("-bdrs5", &registry);
    assert_eq!(
        names(&declarations),
        ["-webkit-border-radius", "-moz-border-radius", "border-radius"]
    );
    assert!(declarations.iter().all(|d| d.value == "5px"));
}

#[test]
fn test_dash_uses_every_matching_vendor() {
    let (_, registry) = setup();
    assert_eq!(
        names(&expand("-us", &registry)),
        ["-webkit-user-select", "-moz-user-select", "-ms-user-select", "user-select"]
    );
}

#[test]
fn test_dash_on_unknown_property_fills_all_vendors() {
    let (_, registry) = setup();
    assert_eq!(
        names(&expand("-foo", &registry)),
        ["-webkit-foo", "-moz-foo", "-ms-foo", "-o-foo", "foo"]
    );
}

#[test]
fn test_dash_fill_skips_obsolete_vendors() {
    let (_, mut registry) = setup();
    registry.add("o", PrefixDefinition::new("o").obsolete());
    assert_eq!(
        names(&expand("-foo", &registry)),
        ["-webkit-foo", "-moz-foo", "-ms-foo", "foo"]
    );
}

#[test]
fn test_important_is_carried_to_prefixed_copies() {
    let (_, registry) = setup();
    let declarations = expand("-bdrs5!", &registry);
    assert_eq!(declarations.len(), 3);
    assert!(declarations.iter().all(|d| d.important));
}

// ============================================================================
// EXPLICIT KEYS
// ============================================================================

#[test]
fn test_explicit_keys_in_given_order() {
    let (_, registry) = setup();
    assert_eq!(
        names(&expand("-mw-bxsh", &registry)),
        ["-moz-box-shadow", "-webkit-box-shadow", "box-shadow"]
    );
}

#[test]
fn test_explicit_keys_ignore_property_lists() {
    let (_, registry) = setup();
    assert_eq!(
        names(&expand("-o-bdrs", &registry)),
        ["-o-border-radius", "border-radius"]
    );
}

#[test]
fn test_dash_group_with_unknown_key_is_not_a_key_list() {
    let (_, registry) = setup();
    let declarations = expand("-bd-n", &registry);
    assert_eq!(declarations.last().map(|d| d.name.as_str()), Some("border"));
}

// ============================================================================
// IMPLICIT PREFIXES
// ============================================================================

#[test]
fn test_auto_insert_adds_known_prefixes_only() {
    let (_, registry) = setup();
    assert_eq!(
        names(&expand("bdrs5", &registry)),
        ["-webkit-border-radius", "-moz-border-radius", "border-radius"]
    );
    assert_eq!(names(&expand("p5", &registry)), ["padding"]);
}

#[test]
fn test_auto_insert_disabled() {
    let (prefs, registry) = setup();
    prefs
        .write()
        .unwrap()
        .set(AUTO_INSERT_VENDOR_PREFIXES, false)
        .unwrap();
    assert_eq!(names(&expand("bdrs5", &registry)), ["border-radius"]);
    assert_eq!(expand("-bdrs5", &registry).len(), 3);
}

#[test]
fn test_custom_resolver() {
    let (_, registry) = setup();
    let resolver = Resolver::new().with_snippet("rnd", Snippet::parse("border-radius"));
    assert_eq!(
        names(&expand_with(&resolver, "-w-rnd2", &registry)),
        ["-webkit-border-radius", "border-radius"]
    );
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn test_render_unaligned() {
    let (_, registry) = setup();
    let lines = render(&expand("-bdrs5", &registry), false);
    assert_eq!(
        lines,
        [
            "-webkit-border-radius: 5px",
            "-moz-border-radius: 5px",
            "border-radius: 5px",
        ]
    );
}

#[test]
fn test_render_aligned() {
    let (_, registry) = setup();
    let lines = render(&expand("-bdrs5", &registry), true);
    insta::assert_snapshot!(lines.join("\n"), @r"
    -webkit-border-radius: 5px
       -moz-border-radius: 5px
            border-radius: 5px
    ");
}

#[test]
fn test_expand_lines_follows_preference() {
    let (prefs, registry) = setup();
    assert_eq!(expand_lines("-o-trf", &registry)[1], "transform: ${1}");

    prefs.write().unwrap().set(ALIGN_VENDOR, true).unwrap();
    assert_eq!(expand_lines("-o-trf", &registry)[1], "   transform: ${1}");
}
