//! Classification of input mappings.
//!
//! An input mapping is "raw" when every target name is non-empty and every
//! value is a [`RawRecord`]. Anything else is treated as a mapping of
//! already-resolved outcomes. The empty mapping is raw.

use fanout_outcome::RawRecord;

use crate::entry::Entry;
use crate::error::ShapeMismatch;

/// Parse every entry as a raw record, stopping at the first mismatch.
///
/// Records are returned in input order.
pub(crate) fn parse_raw<'a, I>(entries: I) -> Result<Vec<RawRecord>, ShapeMismatch>
where
  I: IntoIterator<Item = (&'a str, &'a Entry)>,
{
  entries
    .into_iter()
    .map(|(target, entry)| {
      if target.is_empty() {
        return Err(ShapeMismatch::EmptyTargetName);
      }
      match entry {
        Entry::Raw(value) => {
          RawRecord::from_value(value).map_err(|source| ShapeMismatch::InvalidRecord {
            target: target.to_string(),
            source,
          })
        }
        Entry::Resolved(_) => Err(ShapeMismatch::ResolvedEntry {
          target: target.to_string(),
        }),
      }
    })
    .collect()
}

/// Check whether `entries` is a mapping of raw records.
pub fn check_raw_shape<'a, I>(entries: I) -> Result<(), ShapeMismatch>
where
  I: IntoIterator<Item = (&'a str, &'a Entry)>,
{
  parse_raw(entries).map(|_| ())
}

/// `true` when every entry is a raw record under a non-empty name.
pub fn matches_raw_shape<'a, I>(entries: I) -> bool
where
  I: IntoIterator<Item = (&'a str, &'a Entry)>,
{
  check_raw_shape(entries).is_ok()
}

#[cfg(test)]
mod tests {
  use fanout_outcome::Outcome;
  use serde_json::json;

  use super::*;

  fn raw(pairs: &[(&str, serde_json::Value)]) -> Vec<(String, Entry)> {
    pairs
      .iter()
      .map(|(name, value)| (name.to_string(), Entry::Raw(value.clone())))
      .collect()
  }

  fn borrowed(entries: &[(String, Entry)]) -> impl Iterator<Item = (&str, &Entry)> {
    entries.iter().map(|(name, entry)| (name.as_str(), entry))
  }

  #[test]
  fn test_empty_mapping_matches() {
    let entries: Vec<(String, Entry)> = Vec::new();
    assert!(matches_raw_shape(borrowed(&entries)));
  }

  #[test]
  fn test_raw_records_match() {
    let entries = raw(&[
      ("node1", json!({"value": 5})),
      ("node2", json!({"error": {"msg": "timeout"}})),
    ]);
    assert!(matches_raw_shape(borrowed(&entries)));
  }

  #[test]
  fn test_empty_target_name_does_not_match() {
    let entries = raw(&[("", json!({"value": 5}))]);
    assert!(matches!(
      check_raw_shape(borrowed(&entries)),
      Err(ShapeMismatch::EmptyTargetName)
    ));
  }

  #[test]
  fn test_resolved_entry_does_not_match() {
    let entries = vec![
      ("node1".to_string(), Entry::Raw(json!({"value": 1}))),
      ("node2".to_string(), Entry::Resolved(Outcome::success(2))),
    ];
    let err = check_raw_shape(borrowed(&entries)).unwrap_err();
    assert!(matches!(err, ShapeMismatch::ResolvedEntry { ref target } if target == "node2"));
  }

  #[test]
  fn test_malformed_failure_does_not_match() {
    let entries = raw(&[("node1", json!({"error": {"kind": "exec"}}))]);
    let err = check_raw_shape(borrowed(&entries)).unwrap_err();
    assert!(matches!(err, ShapeMismatch::InvalidRecord { ref target, .. } if target == "node1"));
  }

  #[test]
  fn test_plain_data_does_not_match() {
    let entries = raw(&[("node1", json!(5)), ("node2", json!("done"))]);
    assert!(!matches_raw_shape(borrowed(&entries)));
  }
}
