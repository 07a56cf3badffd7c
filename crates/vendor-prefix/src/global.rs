//! Process-wide preference store and prefix registry.
//!
//! Both are lazily built on first use. Lookups take a read lock, and
//! registration or preference edits take the write lock, so any number of
//! readers may resolve prefixes while a single writer updates the tables.
//!
//! ```
//! use vendor_prefix::global;
//!
//! let registry = global::registry().read().unwrap();
//! assert!(registry.supports_prefix("transform", "o"));
//! ```

use crate::defaults::register_vendor_preferences;
use crate::preferences::Preferences;
use crate::registry::PrefixRegistry;
use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

static PREFERENCES: Lazy<Arc<RwLock<Preferences>>> = Lazy::new(|| {
    let mut prefs = Preferences::new();
    register_vendor_preferences(&mut prefs);
    Arc::new(RwLock::new(prefs))
});

static REGISTRY: Lazy<RwLock<PrefixRegistry>> =
    Lazy::new(|| RwLock::new(PrefixRegistry::with_builtins(Arc::clone(&PREFERENCES))));

/// The shared preference store the global registry reads from.
pub fn preferences() -> &'static Arc<RwLock<Preferences>> {
    &PREFERENCES
}

/// The shared registry with the built-in vendor prefixes.
pub fn registry() -> &'static RwLock<PrefixRegistry> {
    &REGISTRY
}
