//! Runtime preference store.
//!
//! Preferences are defined once with a default value and a description;
//! users may then override them. Readers always see the current value, and
//! list-valued preferences are comma-separated text read with
//! [`Preferences::get_array`].
//!
//! ```
//! use vendor_prefix::Preferences;
//!
//! let mut prefs = Preferences::new();
//! prefs.define("css.wProperties", "transform, box-shadow", "webkit properties");
//! assert_eq!(
//!     prefs.get_array("css.wProperties"),
//!     Some(vec!["transform".to_string(), "box-shadow".to_string()])
//! );
//!
//! prefs.set("css.wProperties", "filter").unwrap();
//! assert_eq!(prefs.get_array("css.wProperties"), Some(vec!["filter".to_string()]));
//! ```

use crate::error::PreferenceError;
use std::collections::HashMap;
use std::fmt;

/// A typed preference value.
#[derive(Clone, Debug, PartialEq)]
pub enum PreferenceValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl PreferenceValue {
    pub fn kind(&self) -> &'static str {
        match self {
            PreferenceValue::Bool(_) => "boolean",
            PreferenceValue::Number(_) => "number",
            PreferenceValue::Text(_) => "text",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PreferenceValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PreferenceValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PreferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceValue::Bool(b) => write!(f, "{b}"),
            PreferenceValue::Number(n) => write!(f, "{n}"),
            PreferenceValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for PreferenceValue {
    fn from(value: bool) -> Self {
        PreferenceValue::Bool(value)
    }
}

impl From<f64> for PreferenceValue {
    fn from(value: f64) -> Self {
        PreferenceValue::Number(value)
    }
}

impl From<&str> for PreferenceValue {
    fn from(value: &str) -> Self {
        PreferenceValue::Text(value.to_string())
    }
}

impl From<String> for PreferenceValue {
    fn from(value: String) -> Self {
        PreferenceValue::Text(value)
    }
}

/// A defined preference.
#[derive(Clone, Debug, PartialEq)]
pub struct Preference {
    pub key: String,
    pub default: PreferenceValue,
    pub description: String,
}

/// Defined preferences and the user's overrides.
#[derive(Clone, Debug, Default)]
pub struct Preferences {
    defined: HashMap<String, Preference>,
    overrides: HashMap<String, PreferenceValue>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines (or redefines) a preference. Existing overrides are kept.
    pub fn define(
        &mut self,
        key: impl Into<String>,
        default: impl Into<PreferenceValue>,
        description: impl Into<String>,
    ) {
        let key = key.into();
        self.defined.insert(
            key.clone(),
            Preference {
                key,
                default: default.into(),
                description: description.into(),
            },
        );
    }

    pub fn is_defined(&self, key: &str) -> bool {
        self.defined.contains_key(key)
    }

    /// Current value: the override if set, the default otherwise.
    pub fn get(&self, key: &str) -> Option<&PreferenceValue> {
        self.overrides
            .get(key)
            .or_else(|| self.defined.get(key).map(|p| &p.default))
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(PreferenceValue::as_bool)
    }

    /// Reads a comma-separated preference as a list.
    ///
    /// Returns `None` for undefined, non-text or empty preferences.
    pub fn get_array(&self, key: &str) -> Option<Vec<String>> {
        let text = self.get(key)?.as_text()?;
        let items: Vec<String> = text
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();

        if items.is_empty() { None } else { Some(items) }
    }

    /// Overrides a defined preference.
    pub fn set(
        &mut self,
        key: &str,
        value: impl Into<PreferenceValue>,
    ) -> Result<(), PreferenceError> {
        let value = value.into();
        let preference = self
            .defined
            .get(key)
            .ok_or_else(|| PreferenceError::Undefined(key.to_string()))?;

        if preference.default.kind() != value.kind() {
            return Err(PreferenceError::TypeMismatch {
                key: key.to_string(),
                expected: preference.default.kind(),
                found: value.kind(),
            });
        }

        log::debug!("preference {key} = {value}");
        if preference.default == value {
            self.overrides.remove(key);
        } else {
            self.overrides.insert(key.to_string(), value);
        }
        Ok(())
    }

    /// Applies several overrides, stopping at the first invalid one.
    pub fn load<I, K, V>(&mut self, values: I) -> Result<(), PreferenceError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<PreferenceValue>,
    {
        for (key, value) in values {
            self.set(key.as_ref(), value)?;
        }
        Ok(())
    }

    /// Drops the override for `key`, restoring its default.
    pub fn reset(&mut self, key: &str) {
        self.overrides.remove(key);
    }

    /// Drops every override.
    pub fn reset_all(&mut self) {
        self.overrides.clear();
    }

    pub fn preference(&self, key: &str) -> Option<&Preference> {
        self.defined.get(key)
    }

    pub fn description(&self, key: &str) -> Option<&str> {
        self.defined.get(key).map(|p| p.description.as_str())
    }

    /// Defined keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.defined.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// Applies an addon list to a base list.
///
/// `-name` removes `name`; `+name` or a plain `name` adds it once.
pub fn apply_addon(mut base: Vec<String>, addon: &[String]) -> Vec<String> {
    for entry in addon {
        if let Some(removed) = entry.strip_prefix('-') {
            base.retain(|p| p != removed);
        } else {
            let added = entry.strip_prefix('+').unwrap_or(entry);
            if !base.iter().any(|p| p == added) {
                base.push(added.to_string());
            }
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> Preferences {
        let mut prefs = Preferences::new();
        prefs.define("flag", true, "a flag");
        prefs.define("list", "a, b,,c ", "a list");
        prefs.define("empty", "", "an empty list");
        prefs
    }

    #[test]
    fn test_reads_defaults_and_overrides() {
        let mut prefs = prefs();
        assert_eq!(prefs.get_bool("flag"), Some(true));
        prefs.set("flag", false).unwrap();
        assert_eq!(prefs.get_bool("flag"), Some(false));
        prefs.reset("flag");
        assert_eq!(prefs.get_bool("flag"), Some(true));
    }

    #[test]
    fn test_array_splits_and_trims() {
        let prefs = prefs();
        assert_eq!(
            prefs.get_array("list"),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(prefs.get_array("empty"), None);
        assert_eq!(prefs.get_array("flag"), None);
        assert_eq!(prefs.get_array("missing"), None);
    }

    #[test]
    fn test_rejects_undefined_and_mistyped_values() {
        let mut prefs = prefs();
        assert_eq!(
            prefs.set("missing", true),
            Err(PreferenceError::Undefined("missing".to_string()))
        );
        assert!(matches!(
            prefs.set("flag", "yes"),
            Err(PreferenceError::TypeMismatch { expected: "boolean", found: "text", .. })
        ));
    }

    #[test]
    fn test_load_stops_at_first_error() {
        let mut prefs = prefs();
        let result = prefs.load([("list", "x"), ("nope", "y")]);
        assert!(result.is_err());
        assert_eq!(prefs.get_array("list"), Some(vec!["x".to_string()]));
    }

    #[test]
    fn test_redefine_keeps_override() {
        let mut prefs = prefs();
        prefs.set("list", "z").unwrap();
        prefs.define("list", "a", "a list");
        assert_eq!(prefs.get_array("list"), Some(vec!["z".to_string()]));
    }

    #[test]
    fn test_addon_adds_and_removes() {
        let base = vec!["a".to_string(), "b".to_string()];
        let addon = ["-a".to_string(), "+c".to_string(), "d".to_string(), "b".to_string()];
        assert_eq!(apply_addon(base, &addon), ["b", "c", "d"]);
    }
}
