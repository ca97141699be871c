//! EDIT: merge attribute data into a resource.

use nexus_core::Attributes;
use nexus_graph::Op;

use crate::writer::OpWriter;

pub(crate) fn execute_edit(writer: &mut OpWriter<'_>, entity: &str, id: &str, data: &Attributes) {
    if !writer.check_entity(entity) || !writer.check_resource(entity, id) {
        return;
    }
    let data = super::attribute_data(writer, entity, data);
    if data.is_empty() {
        return;
    }
    writer.emit(Op::EditResource {
        entity: entity.to_string(),
        id: id.to_string(),
        data,
    });
}
