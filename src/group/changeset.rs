//! Changeset type.

use crate::diff::OperationKind;
use crate::value::{Map, Value};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Changeset holds change records regrouped by operation kind.
///
/// Each bucket is a tree shaped like the original documents, with the
/// recorded values at the paths they were found. Buckets keep the order in
/// which their kind first occurred, and only kinds that occurred have a
/// bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Changeset {
    buckets: IndexMap<OperationKind, Value>,
}

impl Changeset {
    /// Creates a new empty Changeset.
    pub fn new() -> Self {
        Changeset {
            buckets: IndexMap::new(),
        }
    }

    /// Returns the bucket for `kind`, creating an empty one if needed.
    pub(crate) fn bucket_mut(&mut self, kind: OperationKind) -> &mut Value {
        self.buckets.entry(kind).or_insert(Value::Null)
    }

    /// Returns the bucket for `kind`, if any record of that kind was grouped.
    pub fn get(&self, kind: OperationKind) -> Option<&Value> {
        self.buckets.get(&kind)
    }

    /// Returns true if a record of `kind` was grouped.
    pub fn contains(&self, kind: OperationKind) -> bool {
        self.buckets.contains_key(&kind)
    }

    /// Returns the kinds present, in first-occurrence order.
    pub fn kinds(&self) -> impl Iterator<Item = OperationKind> + '_ {
        self.buckets.keys().copied()
    }

    /// Returns true if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Returns the number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Converts the changeset into a map keyed by the kind names.
    pub fn into_map(self) -> Map {
        self.buckets
            .into_iter()
            .map(|(kind, value)| (kind.as_str().to_string(), value))
            .collect()
    }

    /// Converts the changeset into a value.
    pub fn into_value(self) -> Value {
        Value::Map(self.into_map())
    }
}

impl Serialize for Changeset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (kind, value) in &self.buckets {
            map.serialize_entry(kind.as_str(), value)?;
        }
        map.end()
    }
}
