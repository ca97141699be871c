//! Relation values stored on resources.
//!
//! The shape of a relation value is fixed by the cardinality the schema
//! declares for its key, never by what happens to be stored at runtime.

use crate::Id;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How many ids a relation key may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// At most one id.
    One,
    /// An ordered list of distinct ids.
    Many,
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::One => write!(f, "one"),
            Cardinality::Many => write!(f, "many"),
        }
    }
}

/// The value held under a relation key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationValue {
    /// One-cardinality relation: absent or a single target id.
    Single(Option<Id>),
    /// Many-cardinality relation: ordered target ids, no duplicates.
    Ordered(Vec<Id>),
}

impl RelationValue {
    /// An empty value for the given cardinality.
    pub fn empty(cardinality: Cardinality) -> Self {
        match cardinality {
            Cardinality::One => RelationValue::Single(None),
            Cardinality::Many => RelationValue::Ordered(Vec::new()),
        }
    }

    /// A one-cardinality value pointing at `id`.
    pub fn single(id: impl Into<Id>) -> Self {
        RelationValue::Single(Some(id.into()))
    }

    /// A many-cardinality value holding `ids` in order.
    pub fn ordered<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Id>,
    {
        RelationValue::Ordered(ids.into_iter().map(Into::into).collect())
    }

    /// The cardinality this value was built for.
    pub fn cardinality(&self) -> Cardinality {
        match self {
            RelationValue::Single(_) => Cardinality::One,
            RelationValue::Ordered(_) => Cardinality::Many,
        }
    }

    /// All target ids, in stored order.
    pub fn ids(&self) -> &[Id] {
        match self {
            RelationValue::Single(id) => id.as_slice(),
            RelationValue::Ordered(ids) => ids,
        }
    }

    /// The single target id, if this is a populated one-cardinality value.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            RelationValue::Single(id) => id.as_deref(),
            RelationValue::Ordered(_) => None,
        }
    }

    /// Number of target ids.
    pub fn len(&self) -> usize {
        self.ids().len()
    }

    /// Returns true if no target id is held.
    pub fn is_empty(&self) -> bool {
        self.ids().is_empty()
    }

    /// Returns true if `id` is one of the targets.
    pub fn contains(&self, id: &str) -> bool {
        self.ids().iter().any(|held| held == id)
    }

    /// Add a target id.
    ///
    /// One-cardinality values are overwritten and `index` is ignored.
    /// Many-cardinality values insert at `index` (clamped to the end) or
    /// append, and ignore ids already present.
    /// Returns true if the value changed.
    pub fn insert(&mut self, id: &str, index: Option<usize>) -> bool {
        match self {
            RelationValue::Single(held) => {
                if held.as_deref() == Some(id) {
                    return false;
                }
                *held = Some(id.to_string());
                true
            }
            RelationValue::Ordered(ids) => {
                if ids.iter().any(|held| held == id) {
                    return false;
                }
                let at = index.map_or(ids.len(), |i| i.min(ids.len()));
                ids.insert(at, id.to_string());
                true
            }
        }
    }

    /// Remove a target id. Returns true if it was held.
    pub fn remove(&mut self, id: &str) -> bool {
        match self {
            RelationValue::Single(held) => {
                if held.as_deref() == Some(id) {
                    *held = None;
                    true
                } else {
                    false
                }
            }
            RelationValue::Ordered(ids) => match ids.iter().position(|held| held == id) {
                Some(pos) => {
                    ids.remove(pos);
                    true
                }
                None => false,
            },
        }
    }

    /// Remove every target id, keeping the cardinality.
    pub fn clear(&mut self) -> bool {
        let changed = !self.is_empty();
        *self = RelationValue::empty(self.cardinality());
        changed
    }

    /// Reposition the id at `src` to `dest` (clamped to the last slot).
    ///
    /// Only many-cardinality values can be reordered; an out-of-range `src`
    /// leaves the value untouched. Returns true if the order changed.
    pub fn move_entry(&mut self, src: usize, dest: usize) -> bool {
        match self {
            RelationValue::Single(_) => false,
            RelationValue::Ordered(ids) => move_index(ids, src, dest),
        }
    }
}

impl Default for RelationValue {
    fn default() -> Self {
        RelationValue::Single(None)
    }
}

/// Move the element at `src` to `dest` within `items`.
///
/// The element is removed first and then inserted, so `dest` refers to a
/// position in the shortened list; it is clamped to the end. Returns false
/// when `src` is out of range or the move is a no-op.
pub fn move_index<T>(items: &mut Vec<T>, src: usize, dest: usize) -> bool {
    if src >= items.len() {
        return false;
    }
    let dest = dest.min(items.len() - 1);
    if src == dest {
        return false;
    }
    let item = items.remove(src);
    items.insert(dest, item);
    true
}
