//! Dispatch result types.

use nexus_graph::Op;

/// Outcome of dispatching one action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    /// Ops that were applied, in order.
    pub ops: Vec<Op>,
    /// Whether the state changed.
    pub changed: bool,
}

impl Outcome {
    pub fn new(ops: Vec<Op>) -> Self {
        let changed = !ops.is_empty();
        Self { ops, changed }
    }
}
