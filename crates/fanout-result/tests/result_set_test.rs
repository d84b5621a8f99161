//! Behavioral tests for ResultSet construction, queries, and partitions.

use std::collections::BTreeSet;

use fanout_result::{Entry, Failure, Outcome, ResultSet, ResultSetError};
use serde_json::{Map, Value, json};

fn raw(value: Value) -> Map<String, Value> {
  match value {
    Value::Object(map) => map,
    other => panic!("expected object, got {}", other),
  }
}

fn mixed_input() -> Map<String, Value> {
  raw(json!({
    "web1": {"value": {"stdout": "ok", "exit": 0}},
    "web2": {"error": {"msg": "connection refused", "kind": "net/connect"}},
    "db1": {"value": [1, 2, 3]},
    "db2": {
      "value": {"rows": 10},
      "error": {"msg": "query timed out", "issue_code": "E_TIMEOUT", "details": {"after_ms": 5000}}
    },
    "cache1": {},
  }))
}

#[test]
fn test_two_node_scenario() {
  let set = ResultSet::from_raw(raw(json!({
    "node1": {"value": 5},
    "node2": {"error": {"msg": "timeout"}},
  })));

  assert_eq!(set.len(), 2);
  assert!(!set.is_ok());

  let names: BTreeSet<&str> = set.names().into_iter().collect();
  assert_eq!(names, BTreeSet::from(["node1", "node2"]));

  assert_eq!(set.get("node1").unwrap(), &Outcome::Success(json!(5)));
  assert_eq!(
    set.get("node2").unwrap(),
    &Outcome::Failure(Failure {
      message: "timeout".try_into().unwrap(),
      kind: None,
      issue_code: None,
      partial_value: None,
      details: None,
    })
  );
}

#[test]
fn test_empty_input_is_empty_set() {
  let set = ResultSet::from_raw(Map::new());

  assert_eq!(&set, ResultSet::empty_set());
  assert!(set.is_empty());
  assert!(set.is_ok());
  assert!(set.names().is_empty());
  assert!(set.error_subset().is_empty());
}

#[test]
fn test_get_missing_is_key_not_found() {
  for set in [ResultSet::from_raw(mixed_input()), ResultSet::default()] {
    assert!(matches!(
      set.get("missing"),
      Err(ResultSetError::KeyNotFound { ref target }) if target == "missing"
    ));
  }
}

#[test]
fn test_count_matches_input() {
  let input = mixed_input();
  let expected = input.len();
  assert_eq!(ResultSet::from_raw(input).len(), expected);
}

#[test]
fn test_subsets_partition_names() {
  let set = ResultSet::from_raw(mixed_input());
  let ok = set.ok_subset();
  let failed = set.error_subset();

  assert!(ok.values().iter().all(|outcome| outcome.is_success()));
  assert!(failed.values().iter().all(|outcome| outcome.is_failure()));

  let all: BTreeSet<&str> = set.names().into_iter().collect();
  let ok_names: BTreeSet<&str> = ok.names().into_iter().collect();
  let failed_names: BTreeSet<&str> = failed.names().into_iter().collect();

  assert!(ok_names.is_disjoint(&failed_names));
  assert_eq!(&ok_names | &failed_names, all);
  assert_eq!(ok_names, BTreeSet::from(["cache1", "db1", "web1"]));
}

#[test]
fn test_ok_matches_empty_error_subset() {
  let mixed = ResultSet::from_raw(mixed_input());
  let clean = mixed.ok_subset();

  for set in [mixed, clean, ResultSet::default()] {
    assert_eq!(set.is_ok(), set.error_subset().is_empty());
  }
}

#[test]
fn test_failure_fields_are_converted() {
  let set = ResultSet::from_raw(mixed_input());

  let Outcome::Failure(failure) = set.get("db2").unwrap() else {
    panic!("expected db2 to fail");
  };
  assert_eq!(failure.message, "query timed out");
  assert_eq!(failure.kind, None);
  assert_eq!(failure.issue_code.as_deref(), Some("E_TIMEOUT"));
  assert_eq!(failure.partial_value, Some(json!({"rows": 10})));
  assert_eq!(failure.details.as_ref().unwrap()["after_ms"], 5000);

  assert_eq!(set.get("cache1").unwrap(), &Outcome::Success(Value::Null));
}

#[test]
fn test_rebuilding_from_own_mapping_is_identity() {
  let set = ResultSet::from_raw(mixed_input());

  let rebuilt = ResultSet::from_entries(set.as_map().clone());
  assert_eq!(rebuilt, set);

  let from_subsets = ResultSet::from_entries(
    set
      .ok_subset()
      .into_iter()
      .chain(set.error_subset())
      .map(|(name, outcome)| (name, Entry::Resolved(outcome))),
  );
  assert_eq!(from_subsets, set);
}

#[test]
fn test_structural_equality() {
  let a = || ResultSet::from_raw(raw(json!({"a": {"value": 1}})));

  assert_eq!(a(), a());
  assert_eq!(a(), ResultSet::from_outcomes([("a", Outcome::success(1))]));
  assert_ne!(a(), ResultSet::from_raw(raw(json!({"a": {"value": 2}}))));
  assert_ne!(a(), ResultSet::from_raw(raw(json!({"b": {"value": 1}}))));
}

#[test]
fn test_malformed_input_passes_through_unconverted() {
  // "node2" is missing "msg", so no entry is converted.
  let set = ResultSet::from_raw(raw(json!({
    "node1": {"value": 5},
    "node2": {"error": {"kind": "exec"}},
  })));

  assert!(set.is_ok());
  assert_eq!(set.get("node1").unwrap(), &Outcome::success(json!({"value": 5})));
  assert_eq!(
    set.get("node2").unwrap(),
    &Outcome::success(json!({"error": {"kind": "exec"}}))
  );
}

#[test]
fn test_plain_data_passes_through_as_successes() {
  let set = ResultSet::from_raw(raw(json!({"node1": 5, "node2": "done"})));

  assert_eq!(set.get("node1").unwrap(), &Outcome::success(5));
  assert_eq!(set.get("node2").unwrap(), &Outcome::success("done"));
}

#[test]
fn test_empty_name_disables_conversion() {
  let set = ResultSet::from_raw(raw(json!({"": {"value": 1}, "node1": {"value": 2}})));

  assert_eq!(set.len(), 2);
  assert_eq!(set.get("node1").unwrap(), &Outcome::success(json!({"value": 2})));
}

#[test]
fn test_json_round_trip() {
  let set = ResultSet::from_raw(mixed_input());

  let text = serde_json::to_string(&set).unwrap();
  let back: ResultSet = serde_json::from_str(&text).unwrap();

  assert_eq!(back, set);
}

#[test]
fn test_iteration_visits_every_target_once() {
  let set = ResultSet::from_raw(mixed_input());

  let visited: Vec<&str> = set.iter().map(|(name, _)| name).collect();
  assert_eq!(visited, set.names());

  let again: Vec<&str> = (&set).into_iter().map(|(name, _)| name).collect();
  assert_eq!(again, visited);
}

#[test]
fn test_concurrent_reads() {
  let set = ResultSet::from_raw(mixed_input());

  std::thread::scope(|scope| {
    for _ in 0..4 {
      scope.spawn(|| {
        assert_eq!(set.len(), 5);
        assert_eq!(set.error_subset().len(), 2);
      });
    }
  });
}

#[test]
fn test_json_round_trip_keeps_empty_name_and_failures() {
  let set = ResultSet::from_outcomes([
    ("", Outcome::success(1)),
    ("node2", Outcome::Failure(Failure::new("timeout").unwrap())),
  ]);
  assert!(!set.is_ok());

  let wire = serde_json::to_value(&set).unwrap();
  let back: ResultSet = serde_json::from_value(wire).unwrap();

  assert_eq!(back, set);
  assert!(!back.is_ok());
  assert_eq!(back.get("").unwrap(), &Outcome::success(1));
}

#[test]
fn test_json_round_trip_with_null_partial_value() {
  let failure = Failure::new("boom").unwrap().with_partial_value(Value::Null);
  let set = ResultSet::from_outcomes([("node1", Outcome::Failure(failure))]);

  let wire = serde_json::to_value(&set).unwrap();
  let back: ResultSet = serde_json::from_value(wire).unwrap();

  assert_eq!(back, set);
}

#[test]
fn test_failure_entries_pass_through() {
  let set = ResultSet::from_entries([
    ("node1", Entry::from(Outcome::success(5))),
    ("node2", Entry::from(Failure::new("timeout").unwrap())),
  ]);

  assert_eq!(set.error_subset().names(), vec!["node2"]);
  assert_eq!(set.get("node1").unwrap(), &Outcome::success(5));
}
