//! Session-scoped state store addressed by typed key paths
//!
//! The first path segment selects a top-level slot; the remaining segments
//! walk into the nested JSON value stored in that slot.

use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::shared::errors::{AppError, AppResult};

/// Ordered sequence of identifiers naming a value in the store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Extend the path by one segment
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn split_root(&self) -> Option<(&String, &[String])> {
        self.segments.split_first()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// Concurrent key-path store holding arbitrarily nested JSON values
#[derive(Debug, Default)]
pub struct StateStore {
    slots: DashMap<String, Value>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &KeyPath) -> Option<Value> {
        let (root, rest) = path.split_root()?;
        let slot = self.slots.get(root)?;

        let mut current = slot.value();
        for segment in rest {
            current = current.as_object()?.get(segment)?;
        }
        Some(current.clone())
    }

    /// Read and deserialize a value; `Ok(None)` when nothing is stored
    pub fn get_as<T: DeserializeOwned>(&self, path: &KeyPath) -> AppResult<Option<T>> {
        self.get(path)
            .map(serde_json::from_value)
            .transpose()
            .map_err(AppError::from)
    }

    /// Store a value, creating intermediate objects as needed.
    /// Non-object values found along the way are replaced by objects.
    pub fn set(&self, path: &KeyPath, value: Value) -> AppResult<()> {
        let (root, rest) = path
            .split_root()
            .ok_or_else(|| AppError::InvalidInput("State key path is empty".to_string()))?;

        let Some((leaf, parents)) = rest.split_last() else {
            self.slots.insert(root.clone(), value);
            return Ok(());
        };

        let mut slot = self
            .slots
            .entry(root.clone())
            .or_insert_with(|| Value::Object(Map::new()));

        let mut current = slot.value_mut();
        for segment in parents {
            current = ensure_object(current)
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
        }
        ensure_object(current).insert(leaf.clone(), value);
        Ok(())
    }

    pub fn set_as<T: Serialize>(&self, path: &KeyPath, value: &T) -> AppResult<()> {
        self.set(path, serde_json::to_value(value)?)
    }

    /// Remove and return the value at `path`
    pub fn remove(&self, path: &KeyPath) -> Option<Value> {
        let (root, rest) = path.split_root()?;
        let Some((leaf, parents)) = rest.split_last() else {
            return self.slots.remove(root).map(|(_, value)| value);
        };

        let mut slot = self.slots.get_mut(root)?;
        let mut current = slot.value_mut();
        for segment in parents {
            current = current.as_object_mut()?.get_mut(segment)?;
        }
        current.as_object_mut()?.remove(leaf)
    }

    pub fn contains(&self, path: &KeyPath) -> bool {
        self.get(path).is_some()
    }

    pub fn clear(&self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was just replaced by an object"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_path_display() {
        let path = KeyPath::new(["chains", "naruto"]).child("matched");
        assert_eq!(path.to_string(), "chains/naruto/matched");
        assert_eq!(path.segments().len(), 3);
    }

    #[test]
    fn test_set_creates_intermediate_objects() {
        let store = StateStore::new();
        let path = KeyPath::new(["player", "progress", "episode"]);

        store.set(&path, json!(4)).unwrap();

        assert_eq!(store.get(&path), Some(json!(4)));
        assert_eq!(
            store.get(&KeyPath::new(["player"])),
            Some(json!({"progress": {"episode": 4}}))
        );
    }

    #[test]
    fn test_set_overwrites_scalar_parent() {
        let store = StateStore::new();
        store.set(&KeyPath::new(["a", "b"]), json!("leaf")).unwrap();
        store.set(&KeyPath::new(["a", "b", "c"]), json!(true)).unwrap();

        assert_eq!(store.get(&KeyPath::new(["a", "b"])), Some(json!({"c": true})));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let store = StateStore::new();
        let empty = KeyPath::new(Vec::<String>::new());

        assert!(store.set(&empty, json!(1)).is_err());
        assert_eq!(store.get(&empty), None);
        assert_eq!(store.remove(&empty), None);
    }

    #[test]
    fn test_remove_nested_value() {
        let store = StateStore::new();
        store.set(&KeyPath::new(["a", "b"]), json!(1)).unwrap();
        store.set(&KeyPath::new(["a", "c"]), json!(2)).unwrap();

        assert_eq!(store.remove(&KeyPath::new(["a", "b"])), Some(json!(1)));
        assert_eq!(store.get(&KeyPath::new(["a"])), Some(json!({"c": 2})));
        assert_eq!(store.remove(&KeyPath::new(["a", "missing"])), None);
    }

    #[test]
    fn test_typed_roundtrip_through_store() {
        let store = StateStore::new();
        let path = KeyPath::new(["ids"]);
        store.set_as(&path, &vec![1, 2, 3]).unwrap();

        let ids: Option<Vec<i32>> = store.get_as(&path).unwrap();
        assert_eq!(ids, Some(vec![1, 2, 3]));
        let missing: Option<Vec<i32>> = store.get_as(&KeyPath::new(["nope"])).unwrap();
        assert_eq!(missing, None);
    }
}
