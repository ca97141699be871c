//! Invalid-input hooks and translator options.

use std::fmt;
use std::sync::Arc;

type EntityHook = Arc<dyn Fn(&str) + Send + Sync>;
type PairHook = Arc<dyn Fn(&str, &str) + Send + Sync>;
type IndexHook = Arc<dyn Fn(&str, usize) + Send + Sync>;

/// Callbacks fired when part of an action is dropped as invalid.
///
/// Hooks observe; they never change what the translator emits. All hooks
/// default to no-ops.
#[derive(Clone)]
pub struct Hooks {
    invalid_entity: EntityHook,
    invalid_rel: PairHook,
    invalid_rel_data: PairHook,
    nonexistent_resource: PairHook,
    invalid_index: IndexHook,
}

impl Hooks {
    /// No-op hooks.
    pub fn new() -> Self {
        Self {
            invalid_entity: Arc::new(|_: &str| {}),
            invalid_rel: Arc::new(|_: &str, _: &str| {}),
            invalid_rel_data: Arc::new(|_: &str, _: &str| {}),
            nonexistent_resource: Arc::new(|_: &str, _: &str| {}),
            invalid_index: Arc::new(|_: &str, _: usize| {}),
        }
    }

    /// Hooks that report every invalid input as a `tracing` warning.
    pub fn logging() -> Self {
        Self::new()
            .on_invalid_entity(|entity| tracing::warn!(%entity, "invalid entity"))
            .on_invalid_rel(|entity, rel| tracing::warn!(%entity, %rel, "invalid relation"))
            .on_invalid_rel_data(|entity, rel| {
                tracing::warn!(%entity, %rel, "relation key passed as attribute data")
            })
            .on_nonexistent_resource(|entity, id| {
                tracing::warn!(%entity, %id, "nonexistent resource")
            })
            .on_invalid_index(|entity, index| tracing::warn!(%entity, index, "invalid index"))
    }

    // ==================== Builders ====================

    /// Unknown entity name.
    pub fn on_invalid_entity(mut self, hook: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.invalid_entity = Arc::new(hook);
        self
    }

    /// Relation reference that does not resolve on the entity.
    pub fn on_invalid_rel(mut self, hook: impl Fn(&str, &str) + Send + Sync + 'static) -> Self {
        self.invalid_rel = Arc::new(hook);
        self
    }

    /// Relation key found in plain attribute data.
    pub fn on_invalid_rel_data(
        mut self,
        hook: impl Fn(&str, &str) + Send + Sync + 'static,
    ) -> Self {
        self.invalid_rel_data = Arc::new(hook);
        self
    }

    /// Resource that does not exist.
    pub fn on_nonexistent_resource(
        mut self,
        hook: impl Fn(&str, &str) + Send + Sync + 'static,
    ) -> Self {
        self.nonexistent_resource = Arc::new(hook);
        self
    }

    /// Source index outside the list being reordered.
    pub fn on_invalid_index(mut self, hook: impl Fn(&str, usize) + Send + Sync + 'static) -> Self {
        self.invalid_index = Arc::new(hook);
        self
    }

    // ==================== Notifications ====================
    // Fire a hook directly. The translator calls these for dropped input.

    pub fn invalid_entity(&self, entity: &str) {
        (self.invalid_entity)(entity)
    }

    pub fn invalid_rel(&self, entity: &str, rel: &str) {
        (self.invalid_rel)(entity, rel)
    }

    pub fn invalid_rel_data(&self, entity: &str, rel: &str) {
        (self.invalid_rel_data)(entity, rel)
    }

    pub fn nonexistent_resource(&self, entity: &str, id: &str) {
        (self.nonexistent_resource)(entity, id)
    }

    pub fn invalid_index(&self, entity: &str, index: usize) {
        (self.invalid_index)(entity, index)
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}

/// Translator configuration.
#[derive(Debug, Clone)]
pub struct Options {
    /// Accept related entity names in place of relation keys.
    pub resolve_rel_from_entity: bool,
    /// Invalid-input callbacks.
    pub hooks: Hooks,
}

impl Options {
    pub fn new() -> Self {
        Self {
            resolve_rel_from_entity: true,
            hooks: Hooks::new(),
        }
    }

    /// Builder-style: toggle entity-name resolution.
    pub fn resolve_rel_from_entity(mut self, enabled: bool) -> Self {
        self.resolve_rel_from_entity = enabled;
        self
    }

    /// Builder-style: replace the hooks.
    pub fn hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
