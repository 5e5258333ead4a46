//! String-to-string metadata attached to stored objects.

use std::collections::HashMap;

use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};

/// Metadata mapping attached to an object at write time.
///
/// The mapping is written wholesale on every put and never merged with what
/// a previous write attached. An empty mapping is a valid value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, IntoIterator)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(#[into_iterator(owned, ref)] HashMap<String, String>);

impl Metadata {
    /// Creates an empty metadata mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts an entry, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Consumes the mapping into the underlying map.
    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }
}

impl From<HashMap<String, String>> for Metadata {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_builder_pattern() {
        let metadata = Metadata::new()
            .with_entry("height", "100")
            .with_entry("width", "200");

        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.get("height").map(String::as_str), Some("100"));
        assert_eq!(metadata.get("width").map(String::as_str), Some("200"));
    }

    #[test]
    fn test_metadata_empty_is_valid() {
        let metadata = Metadata::new();
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_metadata_insert_replaces() {
        let mut metadata = Metadata::new().with_entry("height", "100");
        let previous = metadata.insert("height", "150");

        assert_eq!(previous.as_deref(), Some("100"));
        assert_eq!(metadata.get("height").map(String::as_str), Some("150"));
    }

    #[test]
    fn test_metadata_from_iterator() {
        let metadata: Metadata = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.get("b").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_metadata_serde_is_transparent() {
        let metadata = Metadata::new().with_entry("height", "100");
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json, serde_json::json!({"height": "100"}));
    }
}
