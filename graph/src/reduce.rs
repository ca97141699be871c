//! Op reducers.
//!
//! `reduce` folds an op log over a state. Each op is checked against the
//! current state before anything is written, so an op that would change
//! nothing leaves the affected `Arc`s untouched.

use nexus_core::{move_index, Attributes, Cardinality, RelationValue, Resource};
use nexus_registry::Registry;

use crate::{Op, State};

/// Fold `ops` over `state`, returning the next state.
///
/// `state` itself is never modified; untouched entities and resources are
/// shared with the result.
pub fn reduce(registry: &Registry, state: &State, ops: &[Op]) -> State {
    let mut next = state.clone();
    for op in ops {
        apply_op(registry, &mut next, op);
    }
    next
}

/// Apply a single op in place. Returns true if the state changed.
pub fn apply_op(registry: &Registry, state: &mut State, op: &Op) -> bool {
    match op {
        Op::AddResource {
            entity,
            id,
            data,
            index,
        } => add_resource(state, entity, id, data, *index),
        Op::RemoveResource { entity, id } => remove_resource(state, entity, id),
        Op::EditResource { entity, id, data } => edit_resource(state, entity, id, data),
        Op::MoveResource { entity, src, dest } => move_resource(state, entity, *src, *dest),
        Op::AddRelId {
            entity,
            id,
            rel,
            rel_id,
            index,
        } => {
            let Some(cardinality) = registry.cardinality(entity, rel) else {
                return false;
            };
            update_relation(state, entity, id, rel, Some(cardinality), |value| {
                value.insert(rel_id, *index)
            })
        }
        Op::RemoveRelId {
            entity,
            id,
            rel,
            rel_id,
        } => update_relation(state, entity, id, rel, None, |value| match rel_id {
            Some(rel_id) => value.remove(rel_id),
            None => value.clear(),
        }),
        Op::MoveRelId {
            entity,
            id,
            rel,
            src,
            dest,
        } => update_relation(state, entity, id, rel, None, |value| {
            value.move_entry(*src, *dest)
        }),
    }
}

// ==================== ids + resources ====================

fn add_resource(
    state: &mut State,
    entity: &str,
    id: &str,
    data: &Attributes,
    index: Option<usize>,
) -> bool {
    if state.contains(entity, id) {
        return false;
    }

    let ids = state.ids_mut(entity);
    let at = index.map_or(ids.len(), |i| i.min(ids.len()));
    ids.insert(at, id.to_string());

    state
        .resources_mut(entity)
        .insert(id.to_string(), Resource::with_data(data.clone()).into());
    true
}

fn remove_resource(state: &mut State, entity: &str, id: &str) -> bool {
    if !state.contains(entity, id) {
        return false;
    }
    state.resources_mut(entity).remove(id);
    state.ids_mut(entity).retain(|held| held != id);
    true
}

// ==================== resources ====================

fn edit_resource(state: &mut State, entity: &str, id: &str, data: &Attributes) -> bool {
    let Some(resource) = state.resource(entity, id) else {
        return false;
    };
    let unchanged = data
        .iter()
        .all(|(name, value)| resource.get_attr(name) == Some(value));
    if unchanged {
        return false;
    }

    match state.resource_mut(entity, id) {
        Some(resource) => {
            resource.merge(data);
            true
        }
        None => false,
    }
}

/// Rewrite one relation value of an existing resource through `update`.
///
/// A key the resource does not hold starts out empty for `cardinality`;
/// without a cardinality such a key is left alone.
fn update_relation(
    state: &mut State,
    entity: &str,
    id: &str,
    rel: &str,
    cardinality: Option<Cardinality>,
    update: impl FnOnce(&mut RelationValue) -> bool,
) -> bool {
    let Some(resource) = state.resource(entity, id) else {
        return false;
    };
    let mut value = match (resource.relation(rel), cardinality) {
        (Some(value), _) => value.clone(),
        (None, Some(cardinality)) => RelationValue::empty(cardinality),
        (None, None) => return false,
    };
    if !update(&mut value) {
        return false;
    }

    match state.resource_mut(entity, id) {
        Some(resource) => {
            resource.relations.insert(rel.to_string(), value);
            true
        }
        None => false,
    }
}

// ==================== ids ====================

fn move_resource(state: &mut State, entity: &str, src: usize, dest: usize) -> bool {
    let len = state.ids(entity).len();
    if src >= len || src == dest.min(len - 1) {
        return false;
    }
    move_index(state.ids_mut(entity), src, dest)
}
