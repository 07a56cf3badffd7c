//! Vendor prefix registry.
//!
//! Maps one-character keys (`w`, `m`, `s`, `o`) to vendor prefixes
//! (`webkit`, `moz`, `ms`, `o`) and answers which prefixes a CSS property
//! supports. Supported-property lists are read from [`Preferences`] on every
//! query, so preference edits apply to the next lookup.
//!
//! Lookups never fail: unknown keys or properties give `false`, `None` or an
//! empty list.
//!
//! ```
//! use std::sync::{Arc, RwLock};
//! use vendor_prefix::{PrefixRegistry, Preferences};
//!
//! let prefs = Arc::new(RwLock::new(Preferences::new()));
//! let registry = PrefixRegistry::with_builtins(prefs);
//!
//! assert!(registry.supports_prefix("box-shadow", "w"));
//! assert_eq!(registry.prefixed("box-shadow", "webkit"), "-webkit-box-shadow");
//! assert_eq!(registry.prefixed("color", "w"), "color");
//! ```

use crate::defaults::{
    AUTO_INSERT_VENDOR_PREFIXES, BUILTIN_VENDORS, addon_key, properties_key,
    register_vendor_preferences,
};
use crate::features::{FeatureSupport, NoFeatureData};
use crate::preferences::{Preferences, apply_addon};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

/// Where a prefix definition reads its supported properties from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertySource {
    /// Base preference key; `{key}Addon` is applied on top.
    Preference(String),
    /// Fixed list.
    List(Vec<String>),
}

/// A registered vendor prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixDefinition {
    /// One-character registry key, set by [`PrefixRegistry::add`].
    pub key: String,
    /// Real prefix, without dashes (`webkit`).
    pub prefix: String,
    /// Obsolete prefixes are skipped when filling in all prefixes.
    pub obsolete: bool,
    pub properties: PropertySource,
}

impl PrefixDefinition {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            key: String::new(),
            properties: PropertySource::Preference(properties_key(&prefix)),
            prefix,
            obsolete: false,
        }
    }

    pub fn obsolete(mut self) -> Self {
        self.obsolete = true;
        self
    }

    pub fn with_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = PropertySource::List(properties.into_iter().map(Into::into).collect());
        self
    }

    /// `-webkit-{name}`.
    pub fn transform_name(&self, name: &str) -> String {
        format!("-{}-{}", self.prefix, name)
    }

    /// Current supported properties, derived from `prefs` for preference sources.
    pub fn properties(&self, prefs: &Preferences) -> Vec<String> {
        match &self.properties {
            PropertySource::List(list) => list.clone(),
            PropertySource::Preference(key) => {
                let base = prefs.get_array(key).unwrap_or_default();
                let addon = prefs.get_array(&addon_key(key)).unwrap_or_default();
                apply_addon(base, &addon)
            }
        }
    }

    pub fn supports(&self, property: &str, prefs: &Preferences) -> bool {
        self.properties(prefs).iter().any(|p| p == property)
    }
}

impl From<&str> for PrefixDefinition {
    fn from(prefix: &str) -> Self {
        PrefixDefinition::new(prefix)
    }
}

impl From<String> for PrefixDefinition {
    fn from(prefix: String) -> Self {
        PrefixDefinition::new(prefix)
    }
}

/// Registered vendor prefixes plus the data sources they consult.
pub struct PrefixRegistry {
    definitions: Vec<PrefixDefinition>,
    preferences: Arc<RwLock<Preferences>>,
    features: Arc<dyn FeatureSupport>,
}

impl std::fmt::Debug for PrefixRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefixRegistry")
            .field("definitions", &self.definitions)
            .finish_non_exhaustive()
    }
}

impl PrefixRegistry {
    /// An empty registry without feature data.
    pub fn new(preferences: Arc<RwLock<Preferences>>) -> Self {
        Self {
            definitions: Vec::new(),
            preferences,
            features: Arc::new(NoFeatureData),
        }
    }

    /// A registry with the `w`, `m`, `s` and `o` prefixes; defines their
    /// preferences in `preferences` if missing.
    pub fn with_builtins(preferences: Arc<RwLock<Preferences>>) -> Self {
        {
            let mut prefs = preferences.write().unwrap_or_else(PoisonError::into_inner);
            if !prefs.is_defined(AUTO_INSERT_VENDOR_PREFIXES) {
                register_vendor_preferences(&mut prefs);
            }
        }

        let mut registry = Self::new(preferences);
        for (key, prefix, _) in BUILTIN_VENDORS {
            registry.add(*key, *prefix);
        }
        registry
    }

    pub fn with_features(mut self, features: Arc<dyn FeatureSupport>) -> Self {
        self.features = features;
        self
    }

    pub fn set_features(&mut self, features: Arc<dyn FeatureSupport>) {
        self.features = features;
    }

    pub fn preferences(&self) -> &Arc<RwLock<Preferences>> {
        &self.preferences
    }

    fn read_preferences(&self) -> RwLockReadGuard<'_, Preferences> {
        self.preferences.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers or replaces the definition under `key`.
    ///
    /// A plain string is shorthand for a non-obsolete prefix whose properties
    /// come from `css.{prefix}Properties`.
    pub fn add(&mut self, key: impl Into<String>, definition: impl Into<PrefixDefinition>) {
        let mut definition = definition.into();
        definition.key = key.into();
        log::debug!("register vendor prefix {} -> {}", definition.key, definition.prefix);

        match self.definitions.iter_mut().find(|d| d.key == definition.key) {
            Some(existing) => *existing = definition,
            None => self.definitions.push(definition),
        }
    }

    /// Finds a definition by exact key or exact prefix.
    fn lookup(&self, key_or_prefix: &str) -> Option<&PrefixDefinition> {
        self.definitions
            .iter()
            .find(|d| d.key == key_or_prefix || d.prefix == key_or_prefix)
    }

    fn supports_with(&self, property: &str, key_or_prefix: &str, prefs: &Preferences) -> bool {
        self.lookup(key_or_prefix)
            .is_some_and(|definition| definition.supports(property, prefs))
    }

    /// Whether `property` is in the supported list of the prefix named by key
    /// or prefix string.
    pub fn supports_prefix(&self, property: &str, key_or_prefix: &str) -> bool {
        let prefs = self.read_preferences();
        self.supports_with(property, key_or_prefix, &prefs)
    }

    /// Prefix strings `property` needs.
    ///
    /// Feature data is consulted first; without it the registered
    /// definitions are scanned. `None` means nothing is known about the
    /// property, as opposed to `Some(vec![])` from feature data saying no
    /// prefix is needed.
    pub fn find(&self, property: &str) -> Option<Vec<String>> {
        if let Some(prefixes) = self.features.resolve_prefixes(property) {
            return Some(prefixes);
        }

        let prefs = self.read_preferences();
        let prefixes: Vec<String> = self
            .definitions
            .iter()
            .filter(|d| self.supports_with(property, &d.key, &prefs))
            .map(|d| d.prefix.clone())
            .collect();

        if prefixes.is_empty() {
            log::trace!("no prefix data for {property}");
            None
        } else {
            Some(prefixes)
        }
    }

    /// Registry keys for the prefixes `property` needs.
    ///
    /// When nothing is found and autofill is on, every non-obsolete key is
    /// returned. `no_autofill` overrides the `css.autoInsertVendorPrefixes`
    /// preference; `None` defers to it.
    pub fn find_internal_prefixes(&self, property: &str, no_autofill: Option<bool>) -> Vec<String> {
        let mut keys = Vec::new();
        if let Some(prefixes) = self.find(property) {
            // later registrations win when two keys share a prefix
            let by_prefix: HashMap<&str, &str> = self
                .definitions
                .iter()
                .map(|d| (d.prefix.as_str(), d.key.as_str()))
                .collect();
            keys = prefixes
                .iter()
                .filter_map(|prefix| by_prefix.get(prefix.as_str()))
                .map(|key| key.to_string())
                .collect();
        }

        let autofill = match no_autofill {
            Some(no_autofill) => !no_autofill,
            None => self
                .read_preferences()
                .get_bool(AUTO_INSERT_VENDOR_PREFIXES)
                .unwrap_or(true),
        };

        if keys.is_empty() && autofill {
            log::debug!("autofilling vendor prefixes for {property}");
            keys = self
                .definitions
                .iter()
                .filter(|d| !d.obsolete)
                .map(|d| d.key.clone())
                .collect();
        }
        keys
    }

    /// `property` with the vendor prefix applied if supported, unchanged otherwise.
    pub fn prefixed(&self, property: &str, key_or_prefix: &str) -> String {
        let prefs = self.read_preferences();
        match self.lookup(key_or_prefix) {
            Some(definition) if definition.supports(property, &prefs) => {
                definition.transform_name(property)
            }
            _ => property.to_string(),
        }
    }

    /// All registered prefix strings, in registration order.
    pub fn list(&self) -> Vec<String> {
        self.definitions.iter().map(|d| d.prefix.clone()).collect()
    }

    /// All registered keys, in registration order.
    pub fn keys(&self) -> Vec<&str> {
        self.definitions.iter().map(|d| d.key.as_str()).collect()
    }

    pub fn get(&self, key: &str) -> Option<&PrefixDefinition> {
        self.definitions.iter().find(|d| d.key == key)
    }

    /// Removes the definition under `key`, returning it.
    pub fn remove(&mut self, key: &str) -> Option<PrefixDefinition> {
        let index = self.definitions.iter().position(|d| d.key == key)?;
        log::debug!("remove vendor prefix {key}");
        Some(self.definitions.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::StaticFeatureData;

    fn registry() -> PrefixRegistry {
        PrefixRegistry::with_builtins(Arc::new(RwLock::new(Preferences::new())))
    }

    #[test]
    fn test_builtins_are_registered_in_order() {
        let registry = registry();
        assert_eq!(registry.keys(), ["w", "m", "s", "o"]);
        assert_eq!(registry.list(), ["webkit", "moz", "ms", "o"]);
    }

    #[test]
    fn test_add_overwrites_existing_key() {
        let mut registry = registry();
        registry.add("w", PrefixDefinition::new("webkit").obsolete());
        assert_eq!(registry.keys().len(), 4);
        assert!(registry.get("w").is_some_and(|d| d.obsolete));
    }

    #[test]
    fn test_fixed_property_lists() {
        let mut registry = registry();
        registry.add("e", PrefixDefinition::new("epub").with_properties(["hyphens"]));
        assert!(registry.supports_prefix("hyphens", "e"));
        assert!(registry.supports_prefix("hyphens", "epub"));
        assert!(!registry.supports_prefix("color", "e"));
    }

    #[test]
    fn test_feature_data_takes_precedence() {
        let features = StaticFeatureData::new().with_property("transform", ["ms"]);
        let registry = registry().with_features(Arc::new(features));
        assert_eq!(registry.find("transform"), Some(vec!["ms".to_string()]));
        assert_eq!(registry.find_internal_prefixes("transform", Some(false)), ["s"]);
    }

    #[test]
    fn test_unknown_feature_prefixes_are_skipped() {
        let features = StaticFeatureData::new().with_property("x", ["khtml", "moz"]);
        let registry = registry().with_features(Arc::new(features));
        assert_eq!(registry.find_internal_prefixes("x", Some(true)), ["m"]);
    }
}
