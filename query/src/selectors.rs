//! Read-only selectors over a state snapshot.

use std::collections::BTreeMap;

use nexus_core::{Id, RelationValue, Resource, ResourceKey};
use nexus_graph::{Resources, State};
use nexus_registry::Registry;

use crate::shape::RemovalShape;
use crate::walker::CascadeWalker;

/// Ordered ids of an entity.
pub fn get_ids<'s>(state: &'s State, entity: &str) -> &'s [Id] {
    state.ids(entity)
}

/// All resources of an entity.
pub fn get_resources<'s>(state: &'s State, entity: &str) -> Option<&'s Resources> {
    state.resources(entity)
}

/// Returns true if the resource exists.
pub fn check_resource(state: &State, entity: &str, id: &str) -> bool {
    state.contains(entity, id)
}

pub fn get_resource<'s>(state: &'s State, entity: &str, id: &str) -> Option<&'s Resource> {
    state.resource(entity, id)
}

/// The raw relation value a resource holds under `rel` (a key or an unambiguous entity name).
pub fn get_attached<'s>(
    registry: &Registry,
    state: &'s State,
    entity: &str,
    id: &str,
    rel: &str,
) -> Option<&'s RelationValue> {
    let key = registry.resolve(entity, rel).key()?;
    state.resource(entity, id)?.relation(key)
}

/// Like `get_attached`, but always a list: empty when nothing is attached.
pub fn get_attached_arr(
    registry: &Registry,
    state: &State,
    entity: &str,
    id: &str,
    rel: &str,
) -> Vec<Id> {
    get_attached(registry, state, entity, id, rel)
        .map(|value| value.ids().to_vec())
        .unwrap_or_default()
}

/// Every declared relation of a resource as a list, keyed by relation key.
pub fn get_all_attached_arr(
    registry: &Registry,
    state: &State,
    entity: &str,
    id: &str,
) -> BTreeMap<String, Vec<Id>> {
    let resource = state.resource(entity, id);
    registry
        .relation_keys(entity)
        .map(|key| {
            let ids = resource
                .and_then(|resource| resource.relation(key))
                .map(|value| value.ids().to_vec())
                .unwrap_or_default();
            (key.to_string(), ids)
        })
        .collect()
}

/// Returns true if `id` holds `rel_id` under `rel`.
pub fn check_attached(
    registry: &Registry,
    state: &State,
    entity: &str,
    id: &str,
    rel: &str,
    rel_id: &str,
) -> bool {
    get_attached(registry, state, entity, id, rel).is_some_and(|value| value.contains(rel_id))
}

/// The resources a removal shape reaches from `(entity, id)`, in walk order.
pub fn get_resource_tree<'s>(
    registry: &Registry,
    state: &'s State,
    entity: &str,
    id: &str,
    shape: &RemovalShape,
) -> Vec<(ResourceKey, &'s Resource)> {
    CascadeWalker::new(registry, state)
        .walk(entity, id, shape)
        .into_iter()
        .filter_map(|key| {
            let resource = state.resource(&key.entity, &key.id)?;
            Some((key, resource))
        })
        .collect()
}
