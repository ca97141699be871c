//! DETACH: clear a relation on both sides.

use nexus_graph::Op;

use crate::writer::{OpWriter, ResolvedRel};

/// Detach `rel_id` from `(entity, id)`.
///
/// Each side is cleared independently, so a one-sided relation is removed
/// completely. A missing base resource still has its partner cleaned up.
pub(crate) fn execute_detach(writer: &mut OpWriter<'_>, entity: &str, id: &str, rel: &str, rel_id: &str) {
    if !writer.check_entity(entity) {
        return;
    }
    let Some(rel) = writer.resolve(entity, rel) else {
        return;
    };
    writer.check_resource(entity, id);
    detach_pair(writer, entity, id, &rel, rel_id);
}

pub(crate) fn detach_pair(
    writer: &mut OpWriter<'_>,
    entity: &str,
    id: &str,
    rel: &ResolvedRel,
    rel_id: &str,
) {
    writer.emit(Op::RemoveRelId {
        entity: entity.to_string(),
        id: id.to_string(),
        rel: rel.key.clone(),
        rel_id: Some(rel_id.to_string()),
    });
    writer.emit(Op::RemoveRelId {
        entity: rel.schema.target_entity.clone(),
        id: rel_id.to_string(),
        rel: rel.schema.reciprocal.clone(),
        rel_id: Some(id.to_string()),
    });
}
