//! Feature-support data consulted before the registry's own property lists.

use std::collections::HashMap;

/// Browser-support data answering which prefixes a property needs.
///
/// `None` means "no opinion" (disabled or unknown property); `Some(vec![])`
/// means the property is known to need no prefix at all.
pub trait FeatureSupport: Send + Sync {
    fn resolve_prefixes(&self, property: &str) -> Option<Vec<String>>;
}

/// Feature data that never has an opinion.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFeatureData;

impl FeatureSupport for NoFeatureData {
    fn resolve_prefixes(&self, _property: &str) -> Option<Vec<String>> {
        None
    }
}

/// In-memory feature table, e.g. compiled from a support database export.
#[derive(Clone, Debug)]
pub struct StaticFeatureData {
    prefixes: HashMap<String, Vec<String>>,
    enabled: bool,
}

impl Default for StaticFeatureData {
    fn default() -> Self {
        Self {
            prefixes: HashMap::new(),
            enabled: true,
        }
    }
}

impl StaticFeatureData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the prefixes `property` needs; an empty list means none.
    pub fn with_property<I, S>(mut self, property: impl Into<String>, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes
            .insert(property.into(), prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// A disabled table answers `None` for every property.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl FeatureSupport for StaticFeatureData {
    fn resolve_prefixes(&self, property: &str) -> Option<Vec<String>> {
        if !self.enabled {
            return None;
        }
        self.prefixes.get(property).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinguishes_unknown_from_unprefixed() {
        let data = StaticFeatureData::new()
            .with_property("box-shadow", ["webkit"])
            .with_property("color", Vec::<String>::new());

        assert_eq!(data.resolve_prefixes("box-shadow"), Some(vec!["webkit".to_string()]));
        assert_eq!(data.resolve_prefixes("color"), Some(vec![]));
        assert_eq!(data.resolve_prefixes("unknown"), None);
    }

    #[test]
    fn test_disabled_table_has_no_opinion() {
        let mut data = StaticFeatureData::new().with_property("box-shadow", ["webkit"]);
        data.set_enabled(false);
        assert_eq!(data.resolve_prefixes("box-shadow"), None);
    }
}
