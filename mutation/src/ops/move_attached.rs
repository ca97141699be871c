//! MOVE_ATTACHED: reorder ids within one resource's relation.

use nexus_core::Cardinality;
use nexus_graph::Op;

use crate::writer::OpWriter;

/// Reorder a many-cardinality relation on its holder only.
///
/// The reciprocal side keeps its own order.
pub(crate) fn execute_move_attached(
    writer: &mut OpWriter<'_>,
    entity: &str,
    id: &str,
    rel: &str,
    src: usize,
    dest: usize,
) {
    if !writer.check_entity(entity) {
        return;
    }
    let Some(rel) = writer.resolve(entity, rel) else {
        return;
    };
    if !writer.check_resource(entity, id) {
        return;
    }
    if rel.schema.cardinality == Cardinality::One {
        tracing::debug!(%entity, rel = %rel.key, "cannot reorder a one-cardinality relation");
        return;
    }

    let len = match writer
        .state()
        .resource(entity, id)
        .and_then(|resource| resource.relation(&rel.key))
    {
        Some(value) => value.len(),
        None => {
            tracing::debug!(%entity, %id, rel = %rel.key, "relation not set on resource");
            return;
        }
    };
    if src >= len {
        tracing::debug!(%entity, %id, rel = %rel.key, src, "move source out of range");
        writer.hooks().invalid_index(entity, src);
        return;
    }

    writer.emit(Op::MoveRelId {
        entity: entity.to_string(),
        id: id.to_string(),
        rel: rel.key,
        src,
        dest,
    });
}
