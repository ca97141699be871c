//! Session store.

use std::collections::BTreeMap;

use nexus_core::{Id, Resource};
use nexus_graph::{reduce, Op, Resources, State};
use nexus_mutation::{Action, Options, Translator};
use nexus_registry::Registry;

use crate::error::SessionResult;
use crate::result::Outcome;

/// A single-owner store: a registry, options, the current state and the
/// op logs of every dispatch so far.
pub struct Session {
    registry: Registry,
    options: Options,
    state: State,
    journal: Vec<Vec<Op>>,
}

impl Session {
    /// Create a session whose state holds every declared entity, empty.
    pub fn new(registry: Registry, options: Options) -> Self {
        let state = State::for_registry(&registry);
        Self {
            registry,
            options,
            state,
            journal: Vec::new(),
        }
    }

    /// Create a session from a JSON schema document.
    pub fn from_json_schema(schema: &str, options: Options) -> SessionResult<Self> {
        let registry = Registry::from_json(schema)?;
        Ok(Self::new(registry, options))
    }

    /// Builder-style: start from an existing state.
    pub fn with_state(mut self, state: State) -> Self {
        self.state = state;
        self
    }

    /// Get the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get the current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Op logs of every dispatch that changed the state, oldest first.
    pub fn journal(&self) -> &[Vec<Op>] {
        &self.journal
    }

    // ==================== Dispatch ====================

    /// Translate and apply an action.
    #[tracing::instrument(skip_all, fields(action = action.kind()))]
    pub fn dispatch(&mut self, action: &Action) -> Outcome {
        let ops = Translator::new(&self.registry, &self.options).derive(&self.state, action);
        if !ops.is_empty() {
            self.state = reduce(&self.registry, &self.state, &ops);
            self.journal.push(ops.clone());
        }
        tracing::debug!(ops = ops.len(), "dispatched");
        Outcome::new(ops)
    }

    /// Parse a JSON action and dispatch it.
    pub fn dispatch_json(&mut self, action: &str) -> SessionResult<Outcome> {
        let action: Action = serde_json::from_str(action)?;
        Ok(self.dispatch(&action))
    }

    /// Serialize the current state.
    pub fn state_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string(&self.state)?)
    }

    // ==================== Setters ====================
    // These replace content wholesale without going through ops or the journal.

    /// Replace the whole state.
    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }

    /// Replace every entity's id list. Unknown entities are dropped.
    pub fn set_all_ids(&mut self, ids: BTreeMap<String, Vec<Id>>) {
        let ids = self.known_entities(ids);
        self.state.set_all_ids(ids);
    }

    /// Replace every entity's resources. Unknown entities are dropped.
    pub fn set_all_resources(&mut self, resources: BTreeMap<String, Resources>) {
        let resources = self.known_entities(resources);
        self.state.set_all_resources(resources);
    }

    /// Replace an entity's id list.
    pub fn set_ids(&mut self, entity: &str, ids: Vec<Id>) {
        if self.check_entity(entity) {
            self.state.set_ids(entity, ids);
        }
    }

    /// Replace an entity's resources.
    pub fn set_resources(&mut self, entity: &str, resources: Resources) {
        if self.check_entity(entity) {
            self.state.set_resources(entity, resources);
        }
    }

    /// Replace (or append) a single resource.
    pub fn set_resource(&mut self, entity: &str, id: impl Into<Id>, resource: Resource) {
        if self.check_entity(entity) {
            self.state.set_resource(entity, id.into(), resource);
        }
    }

    fn known_entities<T>(&self, entries: BTreeMap<String, T>) -> BTreeMap<String, T> {
        entries
            .into_iter()
            .filter(|(entity, _)| self.check_entity(entity))
            .collect()
    }

    fn check_entity(&self, entity: &str) -> bool {
        if self.registry.has_entity(entity) || self.state.has_entity(entity) {
            return true;
        }
        tracing::debug!(%entity, "setter for invalid entity ignored");
        self.options.hooks.invalid_entity(entity);
        false
    }
}
