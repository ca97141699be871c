//! MOVE_ATTACHED scenarios.

use std::sync::{Arc, Mutex};

use nexus_tests::prelude::*;

fn five_categories(fixture: &Fixture) -> State {
    let mut seed = fixture
        .seed()
        .resource("post", "o1", json!({ "categoryIds": ["c1", "c2", "c3", "c4", "c5"], "profileId": "p1" }))
        .resource("profile", "p1", json!({ "postIds": ["o1"] }));
    for category in ["c1", "c2", "c3", "c4", "c5"] {
        seed = seed.resource("category", category, json!({ "postIds": ["o1"] }));
    }
    seed.build().unwrap()
}

fn categories(state: &State) -> Option<&RelationValue> {
    state.resource("post", "o1").unwrap().relation("categoryIds")
}

#[test]
fn test_move_attached_reorders_holder_only() {
    // GIVEN
    let fixture = Fixture::forum().unwrap();
    let state = five_categories(&fixture);

    // WHEN
    let next = fixture.apply(&state, &actions::move_attached("post", "o1", "categoryIds", 0, 3));

    // THEN
    assert_eq!(
        categories(&next),
        Some(&RelationValue::ordered(["c2", "c3", "c4", "c1", "c5"]))
    );
    assert!(next.shares_entity(&state, "category"));
}

#[test]
fn test_move_attached_by_entity_name_with_clamped_dest() {
    // GIVEN
    let fixture = Fixture::forum().unwrap();
    let state = five_categories(&fixture);

    // WHEN
    let next = fixture.apply(&state, &actions::move_attached("post", "o1", "category", 1, 100));

    // THEN
    assert_eq!(
        categories(&next),
        Some(&RelationValue::ordered(["c1", "c3", "c4", "c5", "c2"]))
    );
}

#[test]
fn test_move_attached_rejects_one_cardinality() {
    // GIVEN
    let fixture = Fixture::forum().unwrap();
    let state = five_categories(&fixture);

    // WHEN
    let (next, ops) = fixture.apply_with_ops(&state, &actions::move_attached("post", "o1", "profileId", 0, 0));

    // THEN
    assert!(ops.is_empty());
    assert_eq!(next, state);
}

#[test]
fn test_move_attached_source_out_of_range_fires_hook() {
    // GIVEN
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let fixture = Fixture::forum().unwrap().with_options(Options::new().hooks(
        Hooks::new().on_invalid_index(move |entity, index| {
            sink.lock().unwrap().push((entity.to_string(), index))
        }),
    ));
    let state = five_categories(&fixture);

    // WHEN
    let (_, ops) = fixture.apply_with_ops(&state, &actions::move_attached("post", "o1", "categoryIds", 5, 0));

    // THEN
    assert!(ops.is_empty());
    assert_eq!(*seen.lock().unwrap(), vec![("post".to_string(), 5)]);
}

#[test]
fn test_move_attached_on_unset_relation_is_a_no_op() {
    // GIVEN
    let fixture = Fixture::forum().unwrap();
    let state = five_categories(&fixture);

    // WHEN
    let (_, ops) = fixture.apply_with_ops(&state, &actions::move_attached("post", "o1", "tagIds", 0, 1));

    // THEN
    assert!(ops.is_empty());
}
