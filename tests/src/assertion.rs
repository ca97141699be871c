//! State invariant checks.
//!
//! Each check returns the list of violations so a failing test prints all
//! of them at once.

use nexus_core::Cardinality;
use nexus_graph::State;
use nexus_registry::Registry;

/// Every attachment is mirrored by its reciprocal, and every partner exists.
pub fn symmetry_violations(registry: &Registry, state: &State) -> Vec<String> {
    let mut violations = Vec::new();
    for (entity, resources) in state.all_resources() {
        for (id, resource) in resources.iter() {
            for (key, partner) in resource.attachments() {
                let Some(schema) = registry.rel_schema(entity, key) else {
                    violations.push(format!("{entity}/{id}.{key} is not declared"));
                    continue;
                };
                let target = &schema.target_entity;
                match state.resource(target, partner) {
                    None => violations.push(format!(
                        "{entity}/{id}.{key} points at missing {target}/{partner}"
                    )),
                    Some(other) if !other.is_attached(&schema.reciprocal, id) => {
                        violations.push(format!(
                            "{target}/{partner}.{} does not list {entity}/{id}",
                            schema.reciprocal
                        ))
                    }
                    Some(_) => {}
                }
            }
        }
    }
    violations
}

/// Ids and resources describe the same set, with no duplicate ids.
pub fn alignment_violations(state: &State) -> Vec<String> {
    let mut violations = Vec::new();
    for entity in state.entities() {
        let ids = state.ids(entity);
        let resources = state.resources(entity);
        let stored = resources.map_or(0, |r| r.len());
        if ids.len() != stored {
            violations.push(format!(
                "{entity}: {} ids but {stored} resources",
                ids.len()
            ));
        }
        for (pos, id) in ids.iter().enumerate() {
            if ids[..pos].contains(id) {
                violations.push(format!("{entity}: duplicate id {id}"));
            }
            if resources.map_or(true, |r| !r.contains_key(id)) {
                violations.push(format!("{entity}: id {id} has no resource"));
            }
        }
    }
    violations
}

/// One relations hold at most one id; Many relations hold no duplicates.
pub fn cardinality_violations(registry: &Registry, state: &State) -> Vec<String> {
    let mut violations = Vec::new();
    for (entity, resources) in state.all_resources() {
        for (id, resource) in resources.iter() {
            for (key, value) in &resource.relations {
                let ids = value.ids();
                match registry.cardinality(entity, key) {
                    Some(Cardinality::One) if ids.len() > 1 => {
                        violations.push(format!("{entity}/{id}.{key} holds {} ids", ids.len()))
                    }
                    Some(Cardinality::Many) => {
                        for (pos, rel_id) in ids.iter().enumerate() {
                            if ids[..pos].contains(rel_id) {
                                violations.push(format!("{entity}/{id}.{key} repeats {rel_id}"));
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
    }
    violations
}

/// Panic with every violation if the state breaks an invariant.
#[track_caller]
pub fn assert_consistent(registry: &Registry, state: &State) {
    let mut violations = symmetry_violations(registry, state);
    violations.extend(alignment_violations(state));
    violations.extend(cardinality_violations(registry, state));
    assert!(
        violations.is_empty(),
        "inconsistent state:\n  {}",
        violations.join("\n  ")
    );
}
