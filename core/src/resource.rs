//! The resource record.
//!
//! A resource keeps plain attribute data and relation values apart. Which
//! keys are relations is decided by the schema when data enters the engine.

use crate::{Attributes, Id, RelationValue, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Relation values of a resource, keyed by relation key.
pub type Relations = BTreeMap<String, RelationValue>;

/// A single record within an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Plain attribute values.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: Attributes,
    /// Relation values.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relations: Relations,
}

impl Resource {
    /// Create an empty resource.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resource holding the given attribute data.
    pub fn with_data(data: Attributes) -> Self {
        Self {
            data,
            relations: Relations::new(),
        }
    }

    /// Builder-style: set a relation value.
    pub fn with_relation(mut self, key: impl Into<String>, value: RelationValue) -> Self {
        self.relations.insert(key.into(), value);
        self
    }

    /// Builder-style: set an attribute value.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Get an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Shallow-merge attribute data. Null values are stored, not deleted.
    pub fn merge(&mut self, data: &Attributes) {
        for (name, value) in data {
            self.data.insert(name.clone(), value.clone());
        }
    }

    /// Get a relation value by key.
    pub fn relation(&self, key: &str) -> Option<&RelationValue> {
        self.relations.get(key)
    }

    /// Returns true if the resource holds `id` under `key`.
    pub fn is_attached(&self, key: &str, id: &str) -> bool {
        self.relation(key).is_some_and(|value| value.contains(id))
    }

    /// Every (relation key, target id) pair held, in key order then stored order.
    pub fn attachments(&self) -> impl Iterator<Item = (&str, &Id)> + '_ {
        self.relations
            .iter()
            .flat_map(|(key, value)| value.ids().iter().map(move |id| (key.as_str(), id)))
    }
}
