//! ATTACH: relate two resources on both sides.

use nexus_core::Cardinality;
use nexus_graph::{Op, State};

use crate::writer::{OpWriter, ResolvedRel};

/// Attach `rel_id` to `(entity, id)` under the relation `rel` refers to.
pub(crate) fn execute_attach(
    writer: &mut OpWriter<'_>,
    entity: &str,
    id: &str,
    rel: &str,
    rel_id: &str,
    index: Option<usize>,
    reciprocal_index: Option<usize>,
) {
    if !writer.check_entity(entity) {
        return;
    }
    let Some(rel) = writer.resolve(entity, rel) else {
        return;
    };
    if !writer.check_resource(entity, id)
        || !writer.check_resource(&rel.schema.target_entity, rel_id)
    {
        return;
    }
    attach_pair(writer, entity, id, &rel, rel_id, index, reciprocal_index);
}

/// Write both sides of a relation between two existing resources.
///
/// A one-cardinality side that already points elsewhere is overwritten, and
/// its previous partner loses the reverse reference. Sides that already hold
/// the reference emit nothing.
pub(crate) fn attach_pair(
    writer: &mut OpWriter<'_>,
    entity: &str,
    id: &str,
    rel: &ResolvedRel,
    rel_id: &str,
    index: Option<usize>,
    reciprocal_index: Option<usize>,
) {
    let target = rel.schema.target_entity.as_str();
    let reciprocal = rel.schema.reciprocal.as_str();

    if rel.schema.cardinality == Cardinality::One {
        if let Some(displaced) = displaced(writer.state(), entity, id, &rel.key, rel_id) {
            writer.emit(Op::RemoveRelId {
                entity: target.to_string(),
                id: displaced,
                rel: reciprocal.to_string(),
                rel_id: Some(id.to_string()),
            });
        }
    }
    if writer.registry().cardinality(target, reciprocal) == Some(Cardinality::One) {
        if let Some(displaced) = displaced(writer.state(), target, rel_id, reciprocal, id) {
            writer.emit(Op::RemoveRelId {
                entity: entity.to_string(),
                id: displaced,
                rel: rel.key.clone(),
                rel_id: Some(rel_id.to_string()),
            });
        }
    }

    writer.emit(Op::AddRelId {
        entity: entity.to_string(),
        id: id.to_string(),
        rel: rel.key.clone(),
        rel_id: rel_id.to_string(),
        index,
    });
    writer.emit(Op::AddRelId {
        entity: target.to_string(),
        id: rel_id.to_string(),
        rel: reciprocal.to_string(),
        rel_id: id.to_string(),
        index: reciprocal_index,
    });
}

/// The id a one-cardinality relation holds, if it is about to be replaced by `incoming`.
fn displaced(state: &State, entity: &str, id: &str, rel: &str, incoming: &str) -> Option<String> {
    let held = state.resource(entity, id)?.relation(rel)?.as_single()?;
    (held != incoming).then(|| held.to_string())
}
