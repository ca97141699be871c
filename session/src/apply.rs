//! Pure engine entry points.

use nexus_graph::{reduce, Op, State};
use nexus_mutation::{Action, Options, Translator};
use nexus_registry::Registry;

/// Apply `action` to `state`, returning the next state.
///
/// `None` stands for the all-empty state. The input state is never modified.
pub fn apply(
    registry: &Registry,
    options: &Options,
    state: Option<&State>,
    action: &Action,
) -> State {
    apply_with_ops(registry, options, state, action).0
}

/// Like `apply`, also returning the op log that produced the next state.
pub fn apply_with_ops(
    registry: &Registry,
    options: &Options,
    state: Option<&State>,
    action: &Action,
) -> (State, Vec<Op>) {
    let empty = State::new();
    let state = state.unwrap_or(&empty);
    let ops = Translator::new(registry, options).derive(state, action);
    let next = reduce(registry, state, &ops);
    (next, ops)
}
