//! MOVE: reorder an entity's ids.

use nexus_graph::Op;

use crate::writer::OpWriter;

/// Move the id at `src` to `dest`. `dest` past the end means the last slot.
pub(crate) fn execute_move(writer: &mut OpWriter<'_>, entity: &str, src: usize, dest: usize) {
    if !writer.check_entity(entity) {
        return;
    }
    if src >= writer.state().ids(entity).len() {
        tracing::debug!(%entity, src, "move source out of range");
        writer.hooks().invalid_index(entity, src);
        return;
    }
    writer.emit(Op::MoveResource {
        entity: entity.to_string(),
        src,
        dest,
    });
}
