//! # cssabbr-rs
//!
//! Expands CSS abbreviations into declarations, with vendor-prefixed copies.
//!
//! The workspace is split in two crates, re-exported here:
//!
//! - [`cssabbr`]: tokenizer, value normalizer and abbreviation resolver
//! - [`vendor_prefix`]: prefix registry and the preference store it reads
//!
//! This crate adds [`expand`], which combines them.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::{Arc, RwLock};
//! use cssabbr_rs::{expand_lines, PrefixRegistry, Preferences, ALIGN_VENDOR};
//!
//! let prefs = Arc::new(RwLock::new(Preferences::new()));
//! let registry = PrefixRegistry::with_builtins(Arc::clone(&prefs));
//! prefs.write().unwrap().set(ALIGN_VENDOR, true).unwrap();
//!
//! assert_eq!(
//!     expand_lines("-wm-bdrs3", &registry),
//!     [
//!         "-webkit-border-radius: 3px",
//!         "   -moz-border-radius: 3px",
//!         "        border-radius: 3px",
//!     ]
//! );
//! ```

pub mod expand;

pub use cssabbr;
pub use vendor_prefix;

pub use cssabbr::{Declaration, Resolver, ResolverOptions, Snippet, parse, resolve};
pub use expand::{expand, expand_lines, expand_with, render};
pub use vendor_prefix::{
    ALIGN_VENDOR, AUTO_INSERT_VENDOR_PREFIXES, Preferences, PrefixDefinition, PrefixRegistry,
};
