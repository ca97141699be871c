//! Caller-facing actions.
//!
//! An action may be ambiguous or invalid; it is never applied directly but
//! translated into ops first.

use nexus_core::{Attributes, Id};
use nexus_query::RemovalShape;
use serde::{Deserialize, Serialize};

/// A relation to create while adding a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Relation key or related entity name.
    pub rel: String,
    /// Target resource id.
    pub id: Id,
    /// Position of the target within the new resource's relation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Position of the new resource within the target's reciprocal relation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reciprocal_index: Option<usize>,
}

impl Attachment {
    pub fn new(rel: impl Into<String>, id: impl Into<Id>) -> Self {
        Self {
            rel: rel.into(),
            id: id.into(),
            index: None,
            reciprocal_index: None,
        }
    }
}

/// A request against the state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    Add {
        entity: String,
        id: Id,
        #[serde(default)]
        data: Attributes,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        attach: Vec<Attachment>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },
    Remove {
        entity: String,
        id: Id,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        removal_shape: Option<RemovalShape>,
    },
    Edit {
        entity: String,
        id: Id,
        data: Attributes,
    },
    Move {
        entity: String,
        src: usize,
        dest: usize,
    },
    Attach {
        entity: String,
        id: Id,
        rel: String,
        rel_id: Id,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reciprocal_index: Option<usize>,
    },
    Detach {
        entity: String,
        id: Id,
        rel: String,
        rel_id: Id,
    },
    MoveAttached {
        entity: String,
        id: Id,
        rel: String,
        src: usize,
        dest: usize,
    },
    Batch {
        actions: Vec<Action>,
    },
}

impl Action {
    /// The action's type tag, as used in its serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Add { .. } => "ADD",
            Action::Remove { .. } => "REMOVE",
            Action::Edit { .. } => "EDIT",
            Action::Move { .. } => "MOVE",
            Action::Attach { .. } => "ATTACH",
            Action::Detach { .. } => "DETACH",
            Action::MoveAttached { .. } => "MOVE_ATTACHED",
            Action::Batch { .. } => "BATCH",
        }
    }
}
