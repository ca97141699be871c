//! Schema definition types.

use nexus_core::Cardinality;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declaration of one relation key on an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelSchema {
    /// Entity the relation points at.
    #[serde(rename = "targetEntity", alias = "entity")]
    pub target_entity: String,
    /// Whether the key holds one id or an ordered list.
    pub cardinality: Cardinality,
    /// Key on the target entity that stores the reverse direction.
    pub reciprocal: String,
}

impl RelSchema {
    pub fn new(
        target_entity: impl Into<String>,
        cardinality: Cardinality,
        reciprocal: impl Into<String>,
    ) -> Self {
        Self {
            target_entity: target_entity.into(),
            cardinality,
            reciprocal: reciprocal.into(),
        }
    }

    pub fn one(target_entity: impl Into<String>, reciprocal: impl Into<String>) -> Self {
        Self::new(target_entity, Cardinality::One, reciprocal)
    }

    pub fn many(target_entity: impl Into<String>, reciprocal: impl Into<String>) -> Self {
        Self::new(target_entity, Cardinality::Many, reciprocal)
    }
}

/// Relation declarations of a single entity, keyed by relation key.
pub type EntitySchema = BTreeMap<String, RelSchema>;

/// Relation declarations of every entity, keyed by entity name.
pub type ModelSchema = BTreeMap<String, EntitySchema>;

/// Outcome of resolving a relation reference against an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The reference names exactly this relation key.
    Found(&'a str),
    /// The reference is an entity name reachable through several keys.
    Ambiguous,
    /// Nothing matches the reference.
    NotFound,
}

impl<'a> Resolution<'a> {
    /// The resolved key, if any.
    pub fn key(self) -> Option<&'a str> {
        match self {
            Resolution::Found(key) => Some(key),
            Resolution::Ambiguous | Resolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}
