//! BATCH: translate actions in sequence.

use crate::action::Action;
use crate::writer::OpWriter;

/// Left fold: each action sees the ops of the ones before it.
pub(crate) fn execute_batch(writer: &mut OpWriter<'_>, actions: &[Action]) {
    for action in actions {
        super::execute(writer, action);
    }
}
