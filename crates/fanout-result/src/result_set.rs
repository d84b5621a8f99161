//! The immutable per-target result collection.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ops::Index;

use fanout_outcome::{Failure, Outcome};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::convert::convert_entries;
use crate::entry::Entry;
use crate::error::ResultSetError;

static EMPTY: ResultSet = ResultSet {
  results: BTreeMap::new(),
};

/// Outcomes of one operation across many targets, keyed by target name.
///
/// A result set is built once and never changes. Subsets are new result
/// sets. Names are reported in lexicographic order, and `names`, `values`
/// and `iter` always agree on that order.
///
/// Two result sets are equal when they hold the same names with equal
/// outcomes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
  results: BTreeMap<String, Outcome>,
}

impl ResultSet {
  /// The shared result set with no targets.
  pub fn empty_set() -> &'static ResultSet {
    &EMPTY
  }

  /// Build a result set from raw or resolved entries.
  ///
  /// If every entry is a raw `{value, error}` record under a non-empty
  /// name, each record is converted into an outcome. Otherwise the entries
  /// are accepted as they are: resolved outcomes stay unchanged and any raw
  /// value becomes a success holding that value.
  pub fn from_entries<I, K, E>(entries: I) -> Self
  where
    I: IntoIterator<Item = (K, E)>,
    K: Into<String>,
    E: Into<Entry>,
  {
    let entries: Vec<(String, Entry)> = entries
      .into_iter()
      .map(|(name, entry)| (name.into(), entry.into()))
      .collect();

    Self {
      results: convert_entries(entries),
    }
  }

  /// Build a result set from a raw JSON mapping of target name to record.
  pub fn from_raw(raw: Map<String, Value>) -> Self {
    Self::from_entries(raw)
  }

  /// Build a result set from outcomes that are already resolved.
  pub fn from_outcomes<I, K>(outcomes: I) -> Self
  where
    I: IntoIterator<Item = (K, Outcome)>,
    K: Into<String>,
  {
    Self {
      results: outcomes
        .into_iter()
        .map(|(name, outcome)| (name.into(), outcome))
        .collect(),
    }
  }

  /// Number of targets.
  pub fn len(&self) -> usize {
    self.results.len()
  }

  pub fn is_empty(&self) -> bool {
    self.results.is_empty()
  }

  /// All target names.
  pub fn names(&self) -> Vec<&str> {
    self.results.keys().map(String::as_str).collect()
  }

  /// All outcomes, in the same order as [`ResultSet::names`].
  pub fn values(&self) -> Vec<&Outcome> {
    self.results.values().collect()
  }

  /// The outcome recorded for `target`.
  pub fn get(&self, target: &str) -> Result<&Outcome, ResultSetError> {
    self
      .results
      .get(target)
      .ok_or_else(|| ResultSetError::key_not_found(target))
  }

  /// Alias of [`ResultSet::get`].
  pub fn value(&self, target: &str) -> Result<&Outcome, ResultSetError> {
    self.get(target)
  }

  pub fn contains(&self, target: &str) -> bool {
    self.results.contains_key(target)
  }

  /// `true` when no target failed. An empty set is ok.
  pub fn is_ok(&self) -> bool {
    !self.results.values().any(Outcome::is_failure)
  }

  /// The targets whose outcome is a success.
  pub fn ok_subset(&self) -> ResultSet {
    self.filtered(Outcome::is_success)
  }

  /// The targets whose outcome is a failure.
  pub fn error_subset(&self) -> ResultSet {
    self.filtered(Outcome::is_failure)
  }

  /// Split into `(ok_subset, error_subset)` in one pass.
  pub fn partition(&self) -> (ResultSet, ResultSet) {
    let (ok, failed): (BTreeMap<_, _>, BTreeMap<_, _>) = self
      .results
      .iter()
      .map(|(name, outcome)| (name.clone(), outcome.clone()))
      .partition(|(_, outcome)| outcome.is_success());

    (Self { results: ok }, Self { results: failed })
  }

  /// Iterate over `(target, failure)` for every failed target.
  pub fn failures(&self) -> impl Iterator<Item = (&str, &Failure)> {
    self
      .results
      .iter()
      .filter_map(|(name, outcome)| outcome.failure().map(|failure| (name.as_str(), failure)))
  }

  /// Iterate over `(target, outcome)` pairs.
  pub fn iter(&self) -> Iter<'_> {
    Iter {
      inner: self.results.iter(),
    }
  }

  /// The backing mapping of target name to outcome.
  pub fn as_map(&self) -> &BTreeMap<String, Outcome> {
    &self.results
  }

  pub fn into_map(self) -> BTreeMap<String, Outcome> {
    self.results
  }

  fn filtered(&self, keep: impl Fn(&Outcome) -> bool) -> ResultSet {
    Self::from_outcomes(
      self
        .results
        .iter()
        .filter(|(_, outcome)| keep(*outcome))
        .map(|(name, outcome)| (name.clone(), outcome.clone())),
    )
  }
}

/// Iterator over the `(target, outcome)` pairs of a [`ResultSet`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
  inner: btree_map::Iter<'a, String, Outcome>,
}

impl<'a> Iterator for Iter<'a> {
  type Item = (&'a str, &'a Outcome);

  fn next(&mut self) -> Option<Self::Item> {
    self
      .inner
      .next()
      .map(|(name, outcome)| (name.as_str(), outcome))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ResultSet {
  type Item = (&'a str, &'a Outcome);
  type IntoIter = Iter<'a>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl IntoIterator for ResultSet {
  type Item = (String, Outcome);
  type IntoIter = btree_map::IntoIter<String, Outcome>;

  fn into_iter(self) -> Self::IntoIter {
    self.results.into_iter()
  }
}

impl<K: Into<String>> FromIterator<(K, Outcome)> for ResultSet {
  fn from_iter<I: IntoIterator<Item = (K, Outcome)>>(iter: I) -> Self {
    Self::from_outcomes(iter)
  }
}

impl From<Map<String, Value>> for ResultSet {
  fn from(raw: Map<String, Value>) -> Self {
    Self::from_raw(raw)
  }
}

/// # Panics
///
/// Panics if `target` is not in the set. Use [`ResultSet::get`] to handle a
/// missing target.
impl Index<&str> for ResultSet {
  type Output = Outcome;

  fn index(&self, target: &str) -> &Outcome {
    match self.results.get(target) {
      Some(outcome) => outcome,
      None => panic!("target not found: {}", target),
    }
  }
}

impl Serialize for ResultSet {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(&self.results)
  }
}

/// Reads the form written by `Serialize`: every entry must be a raw record.
///
/// Unlike [`ResultSet::from_raw`] there is no pass-through fallback, so a
/// set with an empty target name still reads back unchanged. Use `from_raw`
/// for executor output that may not be in record form.
impl<'de> Deserialize<'de> for ResultSet {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    BTreeMap::<String, Outcome>::deserialize(deserializer).map(|results| Self { results })
  }
}
