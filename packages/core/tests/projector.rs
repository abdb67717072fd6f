//! Tests for partial projection

use keypick_core::prelude::*;
use serde::Deserialize;
use serde_json::json;

#[test]
fn test_single_path_projection() {
    let record = json!({"name": "Bob", "age": 23});
    assert_eq!(Projector::new(["age"]).project(&record), json!({"age": 23}));
}

#[test]
fn test_merges_disjoint_branches() {
    let record = json!({"name": {"first": "Bob", "last": "Garcia"}, "age": 23});
    assert_eq!(
        Projector::new(["name.first", "age"]).project(&record),
        json!({"name": {"first": "Bob"}, "age": 23})
    );
}

#[test]
fn test_siblings_under_shared_prefix_accumulate() {
    let record = json!({"name": {"first": "Bob", "middle": "J", "last": "Garcia"}});
    assert_eq!(
        Projector::new(["name.first", "name.last"]).project(&record),
        json!({"name": {"first": "Bob", "last": "Garcia"}})
    );
}

#[test]
fn test_whole_branch_then_leaf_merges() {
    let record = json!({"name": {"first": "Bob", "last": "Garcia"}});
    let expected = json!({"name": {"first": "Bob", "last": "Garcia"}});
    assert_eq!(Projector::new(["name", "name.first"]).project(&record), expected);
    assert_eq!(Projector::new(["name.first", "name"]).project(&record), expected);
}

#[test]
fn test_drops_unresolvable_paths() {
    let record = json!({"name": {"first": "Bob"}, "age": 23});
    assert_eq!(
        Projector::new(["name.first", "notfound"]).project(&record),
        json!({"name": {"first": "Bob"}})
    );
    assert_eq!(
        Projector::new(["name.first.notfound", "age"]).project(&record),
        json!({"age": 23})
    );
}

#[test]
fn test_collapses_empty_projection_to_null() {
    let record = json!({"name": "Bob"});
    assert_eq!(Projector::new(["age", "name.first"]).project(&record), json!(null));
    assert_eq!(Projector::new(Vec::<String>::new()).project(&record), json!(null));
    assert_eq!(Projector::new(["age"]).projection(&record), None);
}

#[test]
fn test_falsy_values_are_dropped() {
    let record = json!({"zero": 0, "empty": "", "no": false, "nothing": null, "yes": true});
    assert_eq!(
        Projector::new(["zero", "empty", "no", "nothing", "yes"]).project(&record),
        json!({"yes": true})
    );
    assert_eq!(Projector::new(["zero", "empty", "no", "nothing"]).project(&record), json!(null));
}

#[test]
fn test_empty_containers_are_kept() {
    let record = json!({"tags": [], "meta": {}});
    assert_eq!(
        Projector::new(["tags", "meta"]).project(&record),
        json!({"tags": [], "meta": {}})
    );
}

#[test]
fn test_empty_path_poisons_projection_wherever_it_appears() {
    let record = json!({"name": {"first": "Bob"}, "age": 23});
    for paths in [vec!["", "age"], vec!["age", ""], vec!["name.first", "", "age"], vec![""]] {
        let projector = Projector::new(paths.clone());
        assert!(projector.is_poisoned());
        assert_eq!(projector.project(&record), json!(null), "paths {paths:?}");
    }
    assert!(!Projector::new(["age", ".age"]).is_poisoned());
}

#[test]
fn test_empty_segments_are_not_poison() {
    let record = json!({"a": {"": {"b": 1}}});
    assert_eq!(
        Projector::new(["a..b"]).project(&record),
        json!({"a": {"": {"b": 1}}})
    );
}

#[test]
fn test_non_records_are_null() {
    let projector = Projector::new(["age"]);
    for item in [json!(null), json!(1), json!("age"), json!([{"age": 1}])] {
        assert_eq!(projector.project(&item), json!(null), "{item}");
    }
}

#[test]
fn test_mixed_collection_keeps_null_in_place() {
    let records = [json!({"age": 23}), json!(null), json!({"age": 45})];
    let picked: Vec<_> = records.iter().map(Projector::new(["age"]).into_fn()).collect();
    assert_eq!(picked, [json!({"age": 23}), json!(null), json!({"age": 45})]);
}

#[test]
fn test_repeated_projection_is_stable_and_pure() {
    let record = json!({
        "name": {"first": "Bob", "last": "Garcia"},
        "age": {"value": 23, "date": {"year": 1999, "month": 3}}
    });
    let before = record.clone();
    let projector = Projector::new(["name.first", "age.date.year"]);

    let first = projector.project(&record);
    let second = projector.project(&record);

    assert_eq!(first, second);
    assert_eq!(record, before);
}

#[test]
fn test_concurrent_projection() {
    let projector = Projector::new(["name.first", "age"]);
    let records: Vec<_> = (0..64)
        .map(|i| json!({"name": {"first": format!("user-{i}"), "last": "x"}, "age": i + 1}))
        .collect();

    let results: Vec<Vec<_>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| records.iter().map(|r| projector.project(r)).collect::<Vec<_>>()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("projection thread panicked"))
            .collect()
    });

    for result in &results {
        assert_eq!(result, &results[0]);
    }
    assert_eq!(results[0][5], json!({"name": {"first": "user-5"}, "age": 6}));
}

#[derive(Debug, PartialEq, Deserialize)]
struct Picked {
    age: u32,
}

#[test]
fn test_project_as_typed_value() {
    let projector = Projector::new(["age", "missing"]);
    let picked: Option<Picked> = projector.project_as(&json!({"age": 23})).expect("deserializes");
    assert_eq!(picked, Some(Picked { age: 23 }));

    let none: Option<Picked> = projector.project_as(&json!({"other": 1})).expect("null is none");
    assert_eq!(none, None);

    let error = projector
        .project_as::<Picked>(&json!({"age": "old"}))
        .expect_err("string is not u32");
    assert!(matches!(error, KeyPathError::Deserialization { .. }));
}

#[test]
fn test_custom_separator() {
    let config = KeyPathConfig::default().separator(':');
    let projector = Projector::with_config(["name:first", "age"], &config).expect("valid config");
    assert_eq!(
        projector.project(&json!({"name": {"first": "Bob", "last": "Garcia"}, "age": 23})),
        json!({"name": {"first": "Bob"}, "age": 23})
    );
    assert_eq!(projector.paths()[0].segments(), ["name", "first"]);
}
