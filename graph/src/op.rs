//! Atomic state operations.
//!
//! Ops are already resolved: every relation key is a declared key and every
//! entity is named explicitly. Reducers never consult the schema to guess.

use nexus_core::{Attributes, Id};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single atomic mutation of the state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "opType",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Op {
    /// Insert a new resource, appending its id unless `index` is given.
    AddResource {
        entity: String,
        id: Id,
        #[serde(default)]
        data: Attributes,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },
    /// Delete a resource and its id.
    RemoveResource { entity: String, id: Id },
    /// Shallow-merge attribute data into a resource.
    EditResource {
        entity: String,
        id: Id,
        data: Attributes,
    },
    /// Reposition an id within the entity's id list.
    MoveResource {
        entity: String,
        src: usize,
        dest: usize,
    },
    /// Add a target id under a relation key.
    AddRelId {
        entity: String,
        id: Id,
        rel: String,
        rel_id: Id,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },
    /// Remove a target id from a relation key, or clear the key when `rel_id` is absent.
    RemoveRelId {
        entity: String,
        id: Id,
        rel: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rel_id: Option<Id>,
    },
    /// Reposition a target id within a many-cardinality relation.
    MoveRelId {
        entity: String,
        id: Id,
        rel: String,
        src: usize,
        dest: usize,
    },
}

impl Op {
    /// The entity this op touches.
    pub fn entity(&self) -> &str {
        match self {
            Op::AddResource { entity, .. }
            | Op::RemoveResource { entity, .. }
            | Op::EditResource { entity, .. }
            | Op::MoveResource { entity, .. }
            | Op::AddRelId { entity, .. }
            | Op::RemoveRelId { entity, .. }
            | Op::MoveRelId { entity, .. } => entity,
        }
    }

    /// The resource id this op touches, if it addresses a single resource.
    pub fn id(&self) -> Option<&str> {
        match self {
            Op::AddResource { id, .. }
            | Op::RemoveResource { id, .. }
            | Op::EditResource { id, .. }
            | Op::AddRelId { id, .. }
            | Op::RemoveRelId { id, .. }
            | Op::MoveRelId { id, .. } => Some(id),
            Op::MoveResource { .. } => None,
        }
    }

    /// Returns true for ops that change the entity's id list.
    pub fn touches_ids(&self) -> bool {
        matches!(
            self,
            Op::AddResource { .. } | Op::RemoveResource { .. } | Op::MoveResource { .. }
        )
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::AddResource { entity, id, .. } => write!(f, "ADD_RESOURCE {entity}/{id}"),
            Op::RemoveResource { entity, id } => write!(f, "REMOVE_RESOURCE {entity}/{id}"),
            Op::EditResource { entity, id, .. } => write!(f, "EDIT_RESOURCE {entity}/{id}"),
            Op::MoveResource { entity, src, dest } => {
                write!(f, "MOVE_RESOURCE {entity} {src}->{dest}")
            }
            Op::AddRelId {
                entity,
                id,
                rel,
                rel_id,
                ..
            } => write!(f, "ADD_REL_ID {entity}/{id}.{rel} +{rel_id}"),
            Op::RemoveRelId {
                entity,
                id,
                rel,
                rel_id,
            } => match rel_id {
                Some(rel_id) => write!(f, "REMOVE_REL_ID {entity}/{id}.{rel} -{rel_id}"),
                None => write!(f, "REMOVE_REL_ID {entity}/{id}.{rel} *"),
            },
            Op::MoveRelId {
                entity,
                id,
                rel,
                src,
                dest,
            } => write!(f, "MOVE_REL_ID {entity}/{id}.{rel} {src}->{dest}"),
        }
    }
}
