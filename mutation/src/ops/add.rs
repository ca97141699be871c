//! ADD: create a resource and its initial attachments.

use nexus_core::Attributes;
use nexus_graph::Op;

use super::attach::attach_pair;
use crate::action::Attachment;
use crate::writer::OpWriter;

/// Add a resource unless its id is taken, then apply each attachment.
pub(crate) fn execute_add(
    writer: &mut OpWriter<'_>,
    entity: &str,
    id: &str,
    data: &Attributes,
    attach: &[Attachment],
    index: Option<usize>,
) {
    if !writer.check_entity(entity) {
        return;
    }
    if writer.state().contains(entity, id) {
        tracing::debug!(%entity, %id, "resource already exists");
        return;
    }

    let data = super::attribute_data(writer, entity, data);
    writer.emit(Op::AddResource {
        entity: entity.to_string(),
        id: id.to_string(),
        data,
        index,
    });

    for attachment in attach {
        let Some(rel) = writer.resolve(entity, &attachment.rel) else {
            continue;
        };
        if !writer.check_resource(&rel.schema.target_entity, &attachment.id) {
            continue;
        }
        attach_pair(
            writer,
            entity,
            id,
            &rel,
            &attachment.id,
            attachment.index,
            attachment.reciprocal_index,
        );
    }
}
