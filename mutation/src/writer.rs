//! Op writer shared by the operation modules.
//!
//! The writer keeps a working copy of the state. Every op is applied to it
//! as soon as it is emitted, so later guards within the same action see the
//! effect of earlier ops. Ops that would change nothing are dropped.

use nexus_graph::{apply_op, Op, State};
use nexus_registry::{Registry, RelSchema, Resolution};

use crate::hooks::{Hooks, Options};

/// A resolved relation: its declared key and declaration.
pub(crate) struct ResolvedRel {
    pub key: String,
    pub schema: RelSchema,
}

pub(crate) struct OpWriter<'a> {
    registry: &'a Registry,
    options: &'a Options,
    state: State,
    ops: Vec<Op>,
}

impl<'a> OpWriter<'a> {
    pub fn new(registry: &'a Registry, options: &'a Options, state: &State) -> Self {
        Self {
            registry,
            options,
            state: state.clone(),
            ops: Vec::new(),
        }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn options(&self) -> &'a Options {
        self.options
    }

    pub fn hooks(&self) -> &'a Hooks {
        &self.options.hooks
    }

    /// The working state, including every op emitted so far.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Record `op` if it changes the working state.
    pub fn emit(&mut self, op: Op) {
        if apply_op(self.registry, &mut self.state, &op) {
            tracing::trace!(op = %op, "emit");
            self.ops.push(op);
        }
    }

    pub fn into_parts(self) -> (Vec<Op>, State) {
        (self.ops, self.state)
    }

    // ==================== Guards ====================

    /// An entity is valid if the schema declares it or the state holds it.
    pub fn check_entity(&self, entity: &str) -> bool {
        if self.registry.has_entity(entity) || self.state.has_entity(entity) {
            return true;
        }
        tracing::debug!(%entity, "invalid entity");
        self.hooks().invalid_entity(entity);
        false
    }

    /// Returns true if the resource exists in the working state.
    pub fn check_resource(&self, entity: &str, id: &str) -> bool {
        if self.state.contains(entity, id) {
            return true;
        }
        tracing::debug!(%entity, %id, "nonexistent resource");
        self.hooks().nonexistent_resource(entity, id);
        false
    }

    /// Resolve a relation reference according to the options.
    pub fn resolve(&self, entity: &str, reference: &str) -> Option<ResolvedRel> {
        let resolution =
            self.registry
                .resolve_with(entity, reference, self.options.resolve_rel_from_entity);
        let resolved = match resolution {
            Resolution::Found(key) => self
                .registry
                .rel_schema(entity, key)
                .map(|schema| ResolvedRel {
                    key: key.to_string(),
                    schema: schema.clone(),
                }),
            Resolution::Ambiguous | Resolution::NotFound => None,
        };
        if resolved.is_none() {
            tracing::debug!(%entity, %reference, ?resolution, "unresolved relation");
            self.hooks().invalid_rel(entity, reference);
        }
        resolved
    }
}
