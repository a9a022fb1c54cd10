//! Ordered string attribute map shared by host elements and rendered nodes.

use std::collections::BTreeMap;

/// Attribute name → value map.
///
/// Backed by a `BTreeMap` so iteration (and therefore serialized markup) is
/// deterministic regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: BTreeMap<String, String>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Set an attribute, returning the previous value if there was one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), value.into())
    }

    /// Remove an attribute, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }

    /// Whether the attribute is present (even with an empty value).
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_returns_previous() {
        let mut attrs = Attributes::new();
        assert_eq!(attrs.set("title", "A"), None);
        assert_eq!(attrs.set("title", "B"), Some("A".to_owned()));
        assert_eq!(attrs.get("title"), Some("B"));
    }

    #[test]
    fn remove_and_contains() {
        let mut attrs = Attributes::new();
        attrs.set("layout", "");
        assert!(attrs.contains("layout"));
        assert_eq!(attrs.remove("layout"), Some(String::new()));
        assert!(!attrs.contains("layout"));
        assert!(attrs.remove("layout").is_none());
    }

    #[test]
    fn iteration_is_name_ordered() {
        let attrs: Attributes = [("src", "a.png"), ("alt", "x"), ("class", "c")]
            .into_iter()
            .collect();
        let names: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["alt", "class", "src"]);
        assert_eq!(attrs.len(), 3);
    }
}
