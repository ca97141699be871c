//! DETACH scenarios against the forum schema.

use std::sync::{Arc, Mutex};

use nexus_tests::prelude::*;

#[test]
fn test_detach_clears_both_sides() {
    // GIVEN
    let fixture = Fixture::forum().unwrap();
    let state = fixture
        .seed()
        .resource("post", "o1", json!({ "categoryIds": ["c1", "c2"], "profileId": "p1" }))
        .resource("profile", "p1", json!({ "postIds": ["o1"] }))
        .resource("category", "c1", json!({ "postIds": ["o1"] }))
        .resource("category", "c2", json!({ "postIds": ["o1"] }))
        .build()
        .unwrap();

    // WHEN
    let next = fixture.apply(
        &state,
        &actions::batch([
            actions::detach("post", "o1", "categoryIds", "c1"),
            actions::detach("profile", "p1", "post", "o1"),
        ]),
    );

    // THEN
    let post = next.resource("post", "o1").unwrap();
    assert_eq!(post.relation("categoryIds"), Some(&RelationValue::ordered(["c2"])));
    assert_eq!(post.relation("profileId"), Some(&RelationValue::Single(None)));
    assert!(!next.resource("category", "c1").unwrap().is_attached("postIds", "o1"));
    assert!(next.resource("category", "c2").unwrap().is_attached("postIds", "o1"));
    assert!(!next.resource("profile", "p1").unwrap().is_attached("postIds", "o1"));
    assert_consistent(&fixture.registry, &next);
}

#[test]
fn test_detach_unrelated_pair_is_a_no_op() {
    // GIVEN
    let fixture = Fixture::forum().unwrap();
    let state = fixture
        .seed()
        .resource("post", "o1", json!({ "tagIds": ["t1"] }))
        .resource("tag", "t1", json!({ "postIds": ["o1"] }))
        .resource("tag", "t2", json!({}))
        .build()
        .unwrap();

    // WHEN
    let (next, ops) = fixture.apply_with_ops(&state, &actions::detach("post", "o1", "tagIds", "t2"));

    // THEN
    assert!(ops.is_empty());
    assert_eq!(next, state);
}

#[test]
fn test_detach_from_missing_base_cleans_partner() {
    // GIVEN: t1 still lists a post that no longer exists
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let fixture = Fixture::forum().unwrap().with_options(Options::new().hooks(
        Hooks::new().on_nonexistent_resource(move |entity, id| {
            sink.lock().unwrap().push(format!("{entity}/{id}"))
        }),
    ));
    let state = fixture
        .seed()
        .resource("tag", "t1", json!({ "postIds": ["o9", "o1"] }))
        .resource("post", "o1", json!({ "tagIds": ["t1"] }))
        .build()
        .unwrap();

    // WHEN
    let (next, ops) = fixture.apply_with_ops(&state, &actions::detach("post", "o9", "tagIds", "t1"));

    // THEN
    assert_eq!(
        ops,
        vec![Op::RemoveRelId {
            entity: "tag".into(),
            id: "t1".into(),
            rel: "postIds".into(),
            rel_id: Some("o9".into()),
        }]
    );
    assert_eq!(
        next.resource("tag", "t1").unwrap().relation("postIds"),
        Some(&RelationValue::ordered(["o1"]))
    );
    assert_eq!(*seen.lock().unwrap(), vec!["post/o9".to_string()]);
}

#[test]
fn test_detach_by_ambiguous_name_is_rejected() {
    // GIVEN
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let fixture = Fixture::forum().unwrap().with_options(Options::new().hooks(
        Hooks::new().on_invalid_rel(move |entity, rel| {
            sink.lock().unwrap().push(format!("{entity}.{rel}"))
        }),
    ));
    let state = fixture
        .seed()
        .resource("post", "o1", json!({ "childIds": ["o2"] }))
        .resource("post", "o2", json!({ "parentId": "o1" }))
        .build()
        .unwrap();

    // WHEN
    let (next, ops) = fixture.apply_with_ops(&state, &actions::detach("post", "o1", "post", "o2"));

    // THEN
    assert!(ops.is_empty());
    assert_eq!(next, state);
    assert_eq!(*seen.lock().unwrap(), vec!["post.post".to_string()]);
}
