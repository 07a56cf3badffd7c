//! # vendor-prefix - CSS vendor prefix registry
//!
//! Decides which vendor prefixes (`-webkit-`, `-moz-`, `-ms-`, `-o-`) a CSS
//! property needs when generating cross-browser output.
//!
//! - [`PrefixRegistry`]: registered prefixes and the lookup operations
//! - [`Preferences`]: runtime preference store holding per-vendor property
//!   lists and their add/remove addon lists
//! - [`FeatureSupport`]: browser-support data consulted before the
//!   registry's own lists
//! - [`global`]: process-wide shared instances
//!
//! ## Example
//!
//! ```rust
//! use std::sync::{Arc, RwLock};
//! use vendor_prefix::{PrefixRegistry, Preferences};
//!
//! let prefs = Arc::new(RwLock::new(Preferences::new()));
//! let registry = PrefixRegistry::with_builtins(Arc::clone(&prefs));
//!
//! assert_eq!(
//!     registry.find("border-radius"),
//!     Some(vec!["webkit".to_string(), "moz".to_string()])
//! );
//!
//! // Addon lists adjust the base list without replacing it.
//! prefs
//!     .write()
//!     .unwrap()
//!     .set("css.mozPropertiesAddon", "-border-radius")
//!     .unwrap();
//! assert_eq!(registry.find("border-radius"), Some(vec!["webkit".to_string()]));
//! ```

pub mod defaults;
pub mod error;
pub mod features;
pub mod global;
pub mod preferences;
pub mod registry;

pub use defaults::{ALIGN_VENDOR, AUTO_INSERT_VENDOR_PREFIXES, register_vendor_preferences};
pub use error::PreferenceError;
pub use features::{FeatureSupport, NoFeatureData, StaticFeatureData};
pub use preferences::{Preference, PreferenceValue, Preferences, apply_addon};
pub use registry::{PrefixDefinition, PrefixRegistry, PropertySource};
