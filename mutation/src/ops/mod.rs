//! Action implementations.
//!
//! Each action kind lives in its own module. All of them write through the
//! shared `OpWriter`, so guards observe ops emitted earlier in the action.

mod add;
mod attach;
mod batch;
mod detach;
mod edit;
mod move_attached;
mod move_resource;
mod remove;

use nexus_core::Attributes;

use crate::action::Action;
use crate::writer::OpWriter;

use add::execute_add;
use attach::execute_attach;
use batch::execute_batch;
use detach::execute_detach;
use edit::execute_edit;
use move_attached::execute_move_attached;
use move_resource::execute_move;
use remove::execute_remove;

/// Translate one action into the writer.
pub(crate) fn execute(writer: &mut OpWriter<'_>, action: &Action) {
    match action {
        Action::Add {
            entity,
            id,
            data,
            attach,
            index,
        } => execute_add(writer, entity, id, data, attach, *index),
        Action::Remove {
            entity,
            id,
            removal_shape,
        } => execute_remove(writer, entity, id, removal_shape.as_ref()),
        Action::Edit { entity, id, data } => execute_edit(writer, entity, id, data),
        Action::Move { entity, src, dest } => execute_move(writer, entity, *src, *dest),
        Action::Attach {
            entity,
            id,
            rel,
            rel_id,
            index,
            reciprocal_index,
        } => execute_attach(writer, entity, id, rel, rel_id, *index, *reciprocal_index),
        Action::Detach {
            entity,
            id,
            rel,
            rel_id,
        } => execute_detach(writer, entity, id, rel, rel_id),
        Action::MoveAttached {
            entity,
            id,
            rel,
            src,
            dest,
        } => execute_move_attached(writer, entity, id, rel, *src, *dest),
        Action::Batch { actions } => execute_batch(writer, actions),
    }
}

/// Drop declared relation keys from attribute data.
///
/// Relations only enter through attachments, never through raw data.
fn attribute_data(writer: &OpWriter<'_>, entity: &str, data: &Attributes) -> Attributes {
    let registry = writer.registry();
    data.iter()
        .filter(|(name, _)| {
            if registry.is_rel(entity, name) {
                tracing::debug!(%entity, rel = %name, "relation key in attribute data");
                writer.hooks().invalid_rel_data(entity, name);
                false
            } else {
                true
            }
        })
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
