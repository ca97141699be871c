//! Cascade tree walker.
//!
//! Expands a root resource through a removal shape into the flat, ordered
//! list of resources the shape reaches.

use std::collections::HashSet;

use nexus_core::ResourceKey;
use nexus_graph::State;
use nexus_registry::{Registry, Resolution};

use crate::shape::{RemovalShape, ROOT};

/// Walks a removal shape over a state snapshot.
pub struct CascadeWalker<'a> {
    registry: &'a Registry,
    state: &'a State,
    resolve_from_entity: bool,
    on_unresolved: Option<&'a (dyn Fn(&str, &str) + 'a)>,
}

impl<'a> CascadeWalker<'a> {
    /// Create a walker that resolves relation references by key or entity name.
    pub fn new(registry: &'a Registry, state: &'a State) -> Self {
        Self {
            registry,
            state,
            resolve_from_entity: true,
            on_unresolved: None,
        }
    }

    /// Builder-style: whether entity names may stand in for relation keys.
    pub fn resolve_from_entity(mut self, enabled: bool) -> Self {
        self.resolve_from_entity = enabled;
        self
    }

    /// Builder-style: called with `(entity, reference)` for every shape edge
    /// that is ambiguous or names no relation.
    pub fn on_unresolved(mut self, report: &'a (dyn Fn(&str, &str) + 'a)) -> Self {
        self.on_unresolved = Some(report);
        self
    }

    /// Collect every resource reachable from `(entity, id)` through `shape`.
    ///
    /// The root comes first and descendants follow in pre-order, each
    /// relation's targets in stored order. A resource reached twice is only
    /// listed the first time, so cyclic data terminates. An absent root
    /// yields an empty list.
    pub fn walk(&self, entity: &str, id: &str, shape: &RemovalShape) -> Vec<ResourceKey> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();

        if !self.state.contains(entity, id) {
            return order;
        }

        let mut stack = vec![(ResourceKey::new(entity, id), ROOT)];
        while let Some((key, node)) = stack.pop() {
            if !visited.insert(key.clone()) {
                continue;
            }

            let children = self.children(&key, node, shape);
            stack.extend(children.into_iter().rev());
            order.push(key);
        }

        order
    }

    /// Existing targets of every edge leaving `node`, in walk order.
    fn children(
        &self,
        key: &ResourceKey,
        node: usize,
        shape: &RemovalShape,
    ) -> Vec<(ResourceKey, usize)> {
        let Some(resource) = self.state.resource(&key.entity, &key.id) else {
            return Vec::new();
        };

        let mut children = Vec::new();
        for (reference, child) in shape.edges(node) {
            if !shape.has_node(*child) {
                tracing::debug!(node, child, "removal shape edge points outside the arena");
                continue;
            }

            let rel = match self
                .registry
                .resolve_with(&key.entity, reference, self.resolve_from_entity)
            {
                Resolution::Found(rel) => rel,
                Resolution::Ambiguous | Resolution::NotFound => {
                    tracing::debug!(
                        entity = %key.entity,
                        reference = %reference,
                        "cascade stops at unresolved relation"
                    );
                    if let Some(report) = self.on_unresolved {
                        report(&key.entity, reference);
                    }
                    continue;
                }
            };
            let Some(schema) = self.registry.rel_schema(&key.entity, rel) else {
                continue;
            };
            let Some(value) = resource.relation(rel) else {
                continue;
            };

            children.extend(
                value
                    .ids()
                    .iter()
                    .filter(|target| self.state.contains(&schema.target_entity, target))
                    .map(|target| (ResourceKey::new(&schema.target_entity, target), *child)),
            );
        }
        children
    }
}
