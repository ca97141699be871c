//! Immutable normalized state.
//!
//! Every entity's resource map and id list sits behind its own `Arc`, and
//! so does every resource. Reducers copy on write, so anything an op batch
//! did not touch is shared with the previous state.

use nexus_core::{Id, Resource};
use nexus_registry::Registry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Resources of one entity, keyed by id.
pub type Resources = BTreeMap<Id, Arc<Resource>>;

/// The normalized resource graph.
///
/// Between operations `ids[entity]` holds exactly the keys of
/// `resources[entity]`, in canonical order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    resources: BTreeMap<String, Arc<Resources>>,
    #[serde(default)]
    ids: BTreeMap<String, Arc<Vec<Id>>>,
}

impl State {
    /// The all-empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// A state holding an empty collection for every entity the registry declares.
    pub fn for_registry(registry: &Registry) -> Self {
        let mut state = Self::new();
        for entity in registry.entities() {
            state.ensure_entity(entity);
        }
        state
    }

    // ==================== Lookups ====================

    /// Check if the state has a slot for an entity.
    pub fn has_entity(&self, entity: &str) -> bool {
        self.resources.contains_key(entity) || self.ids.contains_key(entity)
    }

    /// Entity names present in the state.
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.ids.keys().map(|s| s.as_str())
    }

    /// Ordered ids of an entity (empty if the entity has none).
    pub fn ids(&self, entity: &str) -> &[Id] {
        self.ids.get(entity).map(|ids| ids.as_slice()).unwrap_or(&[])
    }

    /// Every entity's id list.
    pub fn all_ids(&self) -> &BTreeMap<String, Arc<Vec<Id>>> {
        &self.ids
    }

    /// Resources of an entity.
    pub fn resources(&self, entity: &str) -> Option<&Resources> {
        self.resources.get(entity).map(|r| r.as_ref())
    }

    /// Every entity's resource map.
    pub fn all_resources(&self) -> &BTreeMap<String, Arc<Resources>> {
        &self.resources
    }

    /// Get a resource by entity and id.
    pub fn resource(&self, entity: &str, id: &str) -> Option<&Resource> {
        self.resources
            .get(entity)
            .and_then(|resources| resources.get(id))
            .map(|r| r.as_ref())
    }

    /// Check if a resource exists.
    pub fn contains(&self, entity: &str, id: &str) -> bool {
        self.resource(entity, id).is_some()
    }

    /// Total number of resources across entities.
    pub fn len(&self) -> usize {
        self.resources.values().map(|r| r.len()).sum()
    }

    /// Returns true if no resource exists.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ==================== Change Detection ====================

    /// True if both states share the same storage for an entity.
    ///
    /// Cheap: compares pointers, never contents.
    pub fn shares_entity(&self, other: &State, entity: &str) -> bool {
        let same_resources = match (self.resources.get(entity), other.resources.get(entity)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        let same_ids = match (self.ids.get(entity), other.ids.get(entity)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_resources && same_ids
    }

    /// True if both states share the same storage for a resource.
    pub fn shares_resource(&self, other: &State, entity: &str, id: &str) -> bool {
        let lookup = |state: &State| {
            state
                .resources
                .get(entity)
                .and_then(|resources| resources.get(id))
                .cloned()
        };
        match (lookup(self), lookup(other)) {
            (Some(a), Some(b)) => Arc::ptr_eq(&a, &b),
            (None, None) => true,
            _ => false,
        }
    }

    // ==================== Builders ====================

    /// Builder-style: make sure an entity slot exists.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.ensure_entity(&entity.into());
        self
    }

    /// Builder-style: append a resource. Replaces it in place if the id exists.
    pub fn with_resource(mut self, entity: &str, id: impl Into<Id>, resource: Resource) -> Self {
        self.set_resource(entity, id.into(), resource);
        self
    }

    // ==================== Setters ====================

    /// Replace an entity's id list wholesale.
    pub fn set_ids(&mut self, entity: &str, ids: Vec<Id>) {
        self.ensure_entity(entity);
        self.ids.insert(entity.to_string(), Arc::new(ids));
    }

    /// Replace an entity's resources wholesale.
    pub fn set_resources(&mut self, entity: &str, resources: Resources) {
        self.ensure_entity(entity);
        self.resources.insert(entity.to_string(), Arc::new(resources));
    }

    /// Replace (or append) a single resource.
    pub fn set_resource(&mut self, entity: &str, id: Id, resource: Resource) {
        if !self.contains(entity, &id) {
            self.ids_mut(entity).push(id.clone());
        }
        self.resources_mut(entity).insert(id, Arc::new(resource));
    }

    /// Replace every id list.
    pub fn set_all_ids(&mut self, ids: BTreeMap<String, Vec<Id>>) {
        self.ids = ids
            .into_iter()
            .map(|(entity, ids)| (entity, Arc::new(ids)))
            .collect();
    }

    /// Replace every resource map.
    pub fn set_all_resources(&mut self, resources: BTreeMap<String, Resources>) {
        self.resources = resources
            .into_iter()
            .map(|(entity, resources)| (entity, Arc::new(resources)))
            .collect();
    }

    // ==================== Copy-on-write access ====================

    pub(crate) fn ensure_entity(&mut self, entity: &str) {
        if !self.resources.contains_key(entity) {
            self.resources.insert(entity.to_string(), Arc::default());
        }
        if !self.ids.contains_key(entity) {
            self.ids.insert(entity.to_string(), Arc::default());
        }
    }

    pub(crate) fn ids_mut(&mut self, entity: &str) -> &mut Vec<Id> {
        self.ensure_entity(entity);
        Arc::make_mut(self.ids.entry(entity.to_string()).or_default())
    }

    pub(crate) fn resources_mut(&mut self, entity: &str) -> &mut Resources {
        self.ensure_entity(entity);
        Arc::make_mut(self.resources.entry(entity.to_string()).or_default())
    }

    /// Mutable access to an existing resource, copying shared storage on the way.
    pub(crate) fn resource_mut(&mut self, entity: &str, id: &str) -> Option<&mut Resource> {
        if !self.contains(entity, id) {
            return None;
        }
        self.resources_mut(entity).get_mut(id).map(Arc::make_mut)
    }
}
