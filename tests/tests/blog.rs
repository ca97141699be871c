//! Blog schema: relation keys only, selectors and the session store.

use std::sync::{Arc, Mutex};

use nexus_query::selectors;
use nexus_session::Session;
use nexus_tests::prelude::*;

fn authored(fixture: &Fixture) -> State {
    fixture
        .seed()
        .resource("author", "a1", json!({ "name": "Ada", "articleIds": ["r1", "r2"] }))
        .resource("author", "a2", json!({ "name": "Grace", "articleIds": [] }))
        .resource("article", "r1", json!({ "title": "Engines", "authorId": "a1" }))
        .resource("article", "r2", json!({ "title": "Notes", "authorId": "a1" }))
        .build()
        .unwrap()
}

#[test]
fn test_seed_splits_relations_from_data() {
    // GIVEN
    let fixture = Fixture::blog().unwrap();

    // WHEN
    let state = authored(&fixture);

    // THEN
    let author = state.resource("author", "a1").unwrap();
    assert_eq!(author.data, attrs! { "name" => "Ada" });
    assert_eq!(
        author.relation("articleIds"),
        Some(&RelationValue::ordered(["r1", "r2"]))
    );
    assert_consistent(&fixture.registry, &state);
}

#[test]
fn test_entity_names_do_not_resolve() {
    // GIVEN
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let fixture = Fixture::blog().unwrap();
    let options = Options::new()
        .resolve_rel_from_entity(false)
        .hooks(Hooks::new().on_invalid_rel(move |entity, rel| {
            sink.lock().unwrap().push(format!("{entity}.{rel}"))
        }));
    let fixture = fixture.with_options(options);
    let state = authored(&fixture);

    // WHEN
    let (by_name, name_ops) = fixture.apply_with_ops(&state, &actions::attach("author", "a2", "article", "r1"));
    let by_key = fixture.apply(&state, &actions::attach("author", "a2", "articleIds", "r1"));

    // THEN
    assert!(name_ops.is_empty());
    assert_eq!(by_name, state);
    assert_eq!(*seen.lock().unwrap(), vec!["author.article".to_string()]);
    assert_eq!(
        by_key.resource("author", "a1").unwrap().relation("articleIds"),
        Some(&RelationValue::ordered(["r2"]))
    );
    assert_eq!(
        by_key.resource("article", "r1").unwrap().relation("authorId"),
        Some(&RelationValue::single("a2"))
    );
    assert_consistent(&fixture.registry, &by_key);
}

#[test]
fn test_removal_shape_by_key_cascades() {
    // GIVEN
    let fixture = Fixture::blog().unwrap();
    let state = authored(&fixture);

    // WHEN
    let by_key = fixture.apply(
        &state,
        &actions::remove_with("author", "a1", RemovalShape::new().with_leaf("articleIds")),
    );
    let by_name = fixture.apply(
        &state,
        &actions::remove_with("author", "a1", RemovalShape::new().with_leaf("article")),
    );

    // THEN
    assert!(by_key.ids("article").is_empty());
    assert_eq!(by_name.ids("article"), ["r1", "r2"]);
    assert_eq!(
        by_name.resource("article", "r1").unwrap().relation("authorId"),
        Some(&RelationValue::Single(None))
    );
    assert_consistent(&fixture.registry, &by_key);
    assert_consistent(&fixture.registry, &by_name);
}

#[test]
fn test_selectors() {
    // GIVEN
    let fixture = Fixture::blog().unwrap();
    let state = authored(&fixture);
    let registry = &fixture.registry;

    // THEN
    assert_eq!(selectors::get_ids(&state, "author"), ["a1", "a2"]);
    assert!(selectors::check_resource(&state, "article", "r2"));
    assert!(!selectors::check_resource(&state, "article", "r3"));
    assert_eq!(
        selectors::get_attached_arr(registry, &state, "author", "a1", "articleIds"),
        ["r1", "r2"]
    );
    assert_eq!(
        selectors::get_attached_arr(registry, &state, "article", "r1", "authorId"),
        ["a1"]
    );
    assert!(selectors::get_attached_arr(registry, &state, "author", "a2", "articleIds").is_empty());
    assert!(selectors::check_attached(registry, &state, "article", "r2", "authorId", "a1"));
    assert!(!selectors::check_attached(registry, &state, "author", "a2", "articleIds", "r1"));

    let all = selectors::get_all_attached_arr(registry, &state, "article", "r1");
    assert_eq!(all.len(), 1);
    assert_eq!(all["authorId"], ["a1"]);

    let tree = selectors::get_resource_tree(
        registry,
        &state,
        "author",
        "a1",
        &RemovalShape::new().with_leaf("articleIds"),
    );
    let keys: Vec<_> = tree.iter().map(|(key, _)| key.to_string()).collect();
    assert_eq!(keys, ["author/a1", "article/r1", "article/r2"]);
}

#[test]
fn test_session_dispatch_and_journal() {
    // GIVEN
    let fixture = Fixture::blog().unwrap();
    let mut session = Session::new(fixture.registry.clone(), fixture.options.clone())
        .with_state(authored(&fixture));

    // WHEN
    let added = session
        .dispatch_json(
            r#"{"type":"ADD","entity":"article","id":"r3","data":{"title":"Draft"},"attach":[{"rel":"authorId","id":"a2"}]}"#,
        )
        .unwrap();
    let moved = session.dispatch(&actions::move_attached("author", "a1", "articleIds", 1, 0));
    let repeated = session.dispatch(&actions::attach("article", "r3", "authorId", "a2"));

    // THEN
    assert!(added.changed);
    assert_eq!(added.ops.len(), 3);
    assert!(moved.changed);
    assert!(!repeated.changed);
    assert_eq!(session.journal().len(), 2);
    assert_eq!(
        selectors::get_attached_arr(session.registry(), session.state(), "author", "a1", "articleIds"),
        ["r2", "r1"]
    );
    assert_eq!(
        selectors::get_attached_arr(session.registry(), session.state(), "author", "a2", "articleIds"),
        ["r3"]
    );
    assert_consistent(session.registry(), session.state());
}

#[test]
fn test_state_survives_json() {
    // GIVEN
    let fixture = Fixture::blog().unwrap();
    let state = authored(&fixture);

    // WHEN
    let json = serde_json::to_string(&state).unwrap();
    let restored: State = serde_json::from_str(&json).unwrap();

    // THEN
    assert_eq!(restored, state);
}
