//! Translator - turns actions into op logs.
//!
//! The translator delegates to one module per action kind in `ops/`:
//! - `ops/add.rs` - ADD (creation plus attachments)
//! - `ops/remove.rs` - REMOVE (cascade through a removal shape)
//! - `ops/edit.rs` - EDIT (attribute merge)
//! - `ops/move_resource.rs` - MOVE (id order)
//! - `ops/attach.rs` - ATTACH (both sides of a relation)
//! - `ops/detach.rs` - DETACH (both sides of a relation)
//! - `ops/move_attached.rs` - MOVE_ATTACHED (relation order)
//! - `ops/batch.rs` - BATCH (sequential fold)

use nexus_graph::{Op, State};
use nexus_registry::Registry;

use crate::action::Action;
use crate::hooks::Options;
use crate::ops;
use crate::writer::OpWriter;

/// Action translator.
pub struct Translator<'r> {
    registry: &'r Registry,
    options: &'r Options,
}

impl<'r> Translator<'r> {
    /// Create a new translator.
    pub fn new(registry: &'r Registry, options: &'r Options) -> Self {
        Self { registry, options }
    }

    /// The ops `action` produces against `state`, without applying them.
    ///
    /// Invalid parts of the action contribute nothing; ops that would not
    /// change the state are never emitted.
    pub fn derive(&self, state: &State, action: &Action) -> Vec<Op> {
        self.translate(state, action).0
    }

    /// The ops `action` produces together with the state they lead to.
    pub fn translate(&self, state: &State, action: &Action) -> (Vec<Op>, State) {
        let mut writer = OpWriter::new(self.registry, self.options, state);
        ops::execute(&mut writer, action);
        let (ops, next) = writer.into_parts();
        tracing::debug!(action = action.kind(), ops = ops.len(), "translated");
        (ops, next)
    }
}
