use std::collections::BTreeMap;

use derive_more::{From, IsVariant};
use serde::{Deserialize, Serialize};

/// Metadata attached to every node.
///
/// The library never looks inside it. A `BTreeMap` keeps comparison
/// independent of insertion order.
pub type Meta = BTreeMap<String, MetaValue>;

/// A single metadata value.
#[derive(Debug, Clone, Default, PartialEq, From, IsVariant, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<MetaValue>),
    Map(BTreeMap<String, MetaValue>),
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::String(value.to_string())
    }
}

impl From<u32> for MetaValue {
    fn from(value: u32) -> Self {
        MetaValue::Integer(value.into())
    }
}

impl MetaValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            MetaValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

/// Builds a [`Meta`] from `(key, value)` pairs.
pub fn meta_from<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Meta
where
    K: Into<String>,
    V: Into<MetaValue>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}
