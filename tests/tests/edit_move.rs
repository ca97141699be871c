//! EDIT and MOVE scenarios.

use std::sync::{Arc, Mutex};

use nexus_tests::prelude::*;

fn tags(fixture: &Fixture) -> State {
    fixture
        .seed()
        .resource("tag", "t1", json!({ "label": "rust", "color": "orange" }))
        .resource("tag", "t2", json!({ "label": "go" }))
        .resource("tag", "t3", json!({ "label": "zig" }))
        .build()
        .unwrap()
}

#[test]
fn test_edit_merges_attributes() {
    // GIVEN
    let fixture = Fixture::forum().unwrap();
    let state = tags(&fixture);

    // WHEN
    let next = fixture.apply(
        &state,
        &actions::edit("tag", "t1", attrs! { "color" => "red", "pinned" => true }),
    );

    // THEN
    assert_eq!(
        next.resource("tag", "t1").unwrap().data,
        attrs! { "label" => "rust", "color" => "red", "pinned" => true }
    );
    assert!(next.shares_entity(&state, "account"));
}

#[test]
fn test_edit_null_is_kept() {
    // GIVEN
    let fixture = Fixture::forum().unwrap();
    let state = tags(&fixture);

    // WHEN
    let next = fixture.apply(&state, &actions::edit("tag", "t1", attrs! { "color" => Value::Null }));

    // THEN
    assert_eq!(next.resource("tag", "t1").unwrap().get_attr("color"), Some(&Value::Null));
}

#[test]
fn test_edit_with_same_values_keeps_state() {
    // GIVEN
    let fixture = Fixture::forum().unwrap();
    let state = tags(&fixture);

    // WHEN
    let (next, ops) = fixture.apply_with_ops(&state, &actions::edit("tag", "t2", attrs! { "label" => "go" }));

    // THEN
    assert!(ops.is_empty());
    assert!(next.shares_resource(&state, "tag", "t2"));
}

#[test]
fn test_edit_ignores_relation_keys() {
    // GIVEN
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let fixture = Fixture::forum().unwrap().with_options(Options::new().hooks(
        Hooks::new().on_invalid_rel_data(move |entity, rel| {
            sink.lock().unwrap().push(format!("{entity}.{rel}"))
        }),
    ));
    let state = tags(&fixture);

    // WHEN
    let next = fixture.apply(
        &state,
        &actions::edit("tag", "t3", attrs! { "postIds" => "o1", "label" => "zig!" }),
    );

    // THEN
    let tag = next.resource("tag", "t3").unwrap();
    assert_eq!(tag.data, attrs! { "label" => "zig!" });
    assert!(tag.relation("postIds").is_none());
    assert_eq!(*seen.lock().unwrap(), vec!["tag.postIds".to_string()]);
}

#[test]
fn test_edit_missing_resource_fires_hook() {
    // GIVEN
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let fixture = Fixture::forum().unwrap().with_options(Options::new().hooks(
        Hooks::new().on_nonexistent_resource(move |entity, id| {
            sink.lock().unwrap().push(format!("{entity}/{id}"))
        }),
    ));
    let state = tags(&fixture);

    // WHEN
    let next = fixture.apply(&state, &actions::edit("tag", "t9", attrs! { "label" => "?" }));

    // THEN
    assert_eq!(next, state);
    assert_eq!(*seen.lock().unwrap(), vec!["tag/t9".to_string()]);
}

#[test]
fn test_move_reorders_ids() {
    // GIVEN
    let fixture = Fixture::forum().unwrap();
    let state = tags(&fixture);

    // WHEN
    let forward = fixture.apply(&state, &actions::move_ids("tag", 0, 2));
    let backward = fixture.apply(&state, &actions::move_ids("tag", 2, 0));
    let clamped = fixture.apply(&state, &actions::move_ids("tag", 1, 40));

    // THEN
    assert_eq!(forward.ids("tag"), ["t2", "t3", "t1"]);
    assert_eq!(backward.ids("tag"), ["t3", "t1", "t2"]);
    assert_eq!(clamped.ids("tag"), ["t1", "t3", "t2"]);
    assert!(forward.shares_entity(&state, "post"));
}

#[test]
fn test_move_back_restores_order() {
    // GIVEN
    let fixture = Fixture::forum().unwrap();
    let state = tags(&fixture);

    // WHEN
    let moved = fixture.apply(&state, &actions::move_ids("tag", 0, 2));
    let restored = fixture.apply(&moved, &actions::move_ids("tag", 2, 0));

    // THEN
    assert_eq!(moved.ids("tag"), ["t2", "t3", "t1"]);
    assert_eq!(restored.ids("tag"), ["t1", "t2", "t3"]);
    assert_eq!(restored, state);
}

#[test]
fn test_move_to_same_position_is_a_no_op() {
    // GIVEN
    let fixture = Fixture::forum().unwrap();
    let state = tags(&fixture);

    // WHEN
    let (_, ops) = fixture.apply_with_ops(&state, &actions::move_ids("tag", 1, 1));

    // THEN
    assert!(ops.is_empty());
}

#[test]
fn test_move_source_out_of_range_fires_hook() {
    // GIVEN
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let fixture = Fixture::forum().unwrap().with_options(Options::new().hooks(
        Hooks::new().on_invalid_index(move |entity, index| {
            sink.lock().unwrap().push((entity.to_string(), index))
        }),
    ));
    let state = tags(&fixture);

    // WHEN
    let next = fixture.apply(&state, &actions::move_ids("tag", 3, 0));

    // THEN
    assert_eq!(next, state);
    assert_eq!(*seen.lock().unwrap(), vec![("tag".to_string(), 3)]);
}
