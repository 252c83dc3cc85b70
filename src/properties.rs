//! Node bound and the key/value metadata carried by nodes and hyperedges.

use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
};
use toml::{value::Table, Value};

/// Anything usable as a hypergraph node. The graph treats nodes as opaque identity tokens; `Ord`
/// gives unordered hyperedges a canonical member order, `Debug` renders nodes into error messages.
pub trait Node: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Node for T {}

/// [Attributes] holds the metadata for a single node or hyperedge.
///
/// Values are stored as TOML values so any serde-serializable type can be written with
/// [Attributes::set] and read back with [Attributes::get]. An empty table and "no attributes" are
/// the same thing: both report a length of zero and iterate nothing.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    pub payload: Table,
}

impl Attributes {
    pub fn new() -> Attributes {
        Attributes::default()
    }

    /// Builder form of [Attributes::set].
    pub fn with<T: Serialize>(mut self, key: &str, value: T) -> Result<Self, toml::ser::Error> {
        self.set(key, value)?;
        Ok(self)
    }

    /// Get a typed value by key. Returns `None` when the key is absent or the stored value does not
    /// deserialize into `T`.
    pub fn get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.payload
            .get(key)
            .and_then(|v| v.clone().try_into().ok())
    }

    pub fn value(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Set a key-value pair, overwriting any previous value under `key`.
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<(), toml::ser::Error> {
        let value_toml = Value::try_from(value)?;
        self.payload.insert(key.to_string(), value_toml);
        Ok(())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.payload.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.payload.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.payload.contains_key(key)
    }

    /// Merge `rhs` into self. On key collisions the value from `rhs` wins.
    pub fn update(&mut self, rhs: &Attributes) {
        for (key, value) in rhs.payload.iter() {
            self.payload.insert(key.clone(), value.clone());
        }
    }

    /// Owned variant of [Attributes::update].
    pub fn extend(&mut self, rhs: Attributes) {
        self.payload.extend(rhs.payload);
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.payload.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.payload.keys()
    }
}

impl From<Table> for Attributes {
    fn from(payload: Table) -> Self {
        Attributes { payload }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Attributes {
            payload: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a Value);
    type IntoIter = toml::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.payload.iter()
    }
}

impl Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries = self
            .payload
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{{{entries}}}")
    }
}
