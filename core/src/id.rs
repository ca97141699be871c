//! Identity types for Nexus resources.
//!
//! Resource ids are caller-chosen strings, unique within their entity.
//! A resource is addressed globally by its (entity, id) pair.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a resource within its entity.
pub type Id = String;

/// Global address of a resource: the entity it belongs to and its id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceKey {
    /// Entity name (e.g. "account").
    pub entity: String,
    /// Resource id within the entity.
    pub id: Id,
}

impl ResourceKey {
    /// Create a new key.
    pub fn new(entity: impl Into<String>, id: impl Into<Id>) -> Self {
        Self {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Returns true if this key addresses the given entity and id.
    pub fn is(&self, entity: &str, id: &str) -> bool {
        self.entity == entity && self.id == id
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.entity, self.id)
    }
}

impl<E: Into<String>, I: Into<Id>> From<(E, I)> for ResourceKey {
    fn from((entity, id): (E, I)) -> Self {
        Self::new(entity, id)
    }
}
