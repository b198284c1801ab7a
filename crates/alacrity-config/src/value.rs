use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use std::fmt;

///
/// DocValue
///
/// A single configuration value: a scalar, a nested mapping, or an ordered
/// list of nested mappings. The untagged serde form matches the persisted
/// JSON exactly (`true`, `42`, `1.5`, `"text"`, `{...}`, `[{...}]`).
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Map(DocMap),
    List(Vec<DocMap>),
}

impl DocValue {
    /// A value is scalar when it carries no nested documents.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::Text(_)
        )
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for DocValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for DocValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for DocValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for DocValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DocValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DocMap> for DocValue {
    fn from(value: DocMap) -> Self {
        Self::Map(value)
    }
}

impl From<Vec<DocMap>> for DocValue {
    fn from(value: Vec<DocMap>) -> Self {
        Self::List(value)
    }
}

///
/// DocMap
///
/// An insertion-ordered mapping from string keys to [`DocValue`]s.
/// `put` overwrites in place so a key keeps its original position.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocMap {
    entries: Vec<(String, DocValue)>,
}

impl DocMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DocValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Insert or overwrite. An existing key keeps its position.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<DocValue>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, DocValue)> for DocMap {
    fn from_iter<I: IntoIterator<Item = (String, DocValue)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.put(k, v);
        }
        map
    }
}

impl Serialize for DocMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DocMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocMapVisitor;

        impl<'de> Visitor<'de> for DocMapVisitor {
            type Value = DocMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a configuration mapping")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = DocMap::new();
                while let Some((key, value)) = access.next_entry::<String, DocValue>()? {
                    map.put(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(DocMapVisitor)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_overwrites_in_place() {
        let mut map = DocMap::new();
        map.put("a", 1);
        map.put("b", 2);
        map.put("a", 3);

        let keys: Vec<_> = map.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(map.get("a"), Some(&DocValue::Int(3)));
    }

    #[test]
    fn json_round_trip_preserves_order() {
        let json = r#"{"name":"orders","enabled":true,"columns":[{"name":"id"},{"name":"total"}]}"#;
        let map: DocMap = serde_json::from_str(json).unwrap();

        let keys: Vec<_> = map.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, ["name", "enabled", "columns"]);

        let out = serde_json::to_string(&map).unwrap();
        assert_eq!(out, json);
    }

    #[test]
    fn untagged_scalars_deserialize_by_shape() {
        let map: DocMap = serde_json::from_str(r#"{"a":1,"b":1.5,"c":"x","d":false}"#).unwrap();
        assert_eq!(map.get("a"), Some(&DocValue::Int(1)));
        assert_eq!(map.get("b"), Some(&DocValue::Float(1.5)));
        assert_eq!(map.get("c"), Some(&DocValue::Text("x".to_string())));
        assert_eq!(map.get("d"), Some(&DocValue::Bool(false)));
    }

    #[test]
    fn nested_map_and_list_values() {
        let map: DocMap =
            serde_json::from_str(r#"{"meta":{"owner":"ops"},"tables":[{"name":"t"}]}"#).unwrap();

        assert!(matches!(map.get("meta"), Some(DocValue::Map(_))));
        match map.get("tables") {
            Some(DocValue::List(items)) => assert_eq!(items.len(), 1),
            other => panic!("expected List, got {other:?}"),
        }
    }
}
