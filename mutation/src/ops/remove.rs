//! REMOVE: delete a resource and whatever its removal shape reaches.

use nexus_core::Id;
use nexus_graph::Op;
use nexus_query::{CascadeWalker, RemovalShape};

use super::detach::detach_pair;
use crate::writer::{OpWriter, ResolvedRel};

/// Remove `(entity, id)` and its cascade.
///
/// Victims are collected on the pre-removal state. Each one is detached from
/// everything it holds, on both sides, right before it is removed.
pub(crate) fn execute_remove(
    writer: &mut OpWriter<'_>,
    entity: &str,
    id: &str,
    shape: Option<&RemovalShape>,
) {
    if !writer.check_entity(entity) || !writer.check_resource(entity, id) {
        return;
    }

    let root_only = RemovalShape::new();
    let hooks = writer.hooks();
    let report = |entity: &str, reference: &str| hooks.invalid_rel(entity, reference);
    let victims = CascadeWalker::new(writer.registry(), writer.state())
        .resolve_from_entity(writer.options().resolve_rel_from_entity)
        .on_unresolved(&report)
        .walk(entity, id, shape.unwrap_or(&root_only));
    tracing::debug!(%entity, %id, victims = victims.len(), "cascade");

    for victim in victims {
        detach_all(writer, &victim.entity, &victim.id);
        writer.emit(Op::RemoveResource {
            entity: victim.entity,
            id: victim.id,
        });
    }
}

fn detach_all(writer: &mut OpWriter<'_>, entity: &str, id: &str) {
    let Some(resource) = writer.state().resource(entity, id) else {
        return;
    };
    let held: Vec<(String, Id)> = resource
        .attachments()
        .map(|(key, rel_id)| (key.to_string(), rel_id.clone()))
        .collect();

    for (key, rel_id) in held {
        let Some(schema) = writer.registry().rel_schema(entity, &key).cloned() else {
            continue;
        };
        detach_pair(writer, entity, id, &ResolvedRel { key, schema }, &rel_id);
    }
}
