use fanout_outcome::{Failure, Outcome};
use serde_json::Value;

/// A single input value for result set construction.
///
/// Executor output arrives as [`Entry::Raw`] JSON; outcomes taken from an
/// existing result set arrive as [`Entry::Resolved`].
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
  Raw(Value),
  Resolved(Outcome),
}

impl Entry {
  /// Take the entry as-is, without record conversion.
  ///
  /// A raw value that is not converted is a success carrying that value.
  pub fn into_outcome(self) -> Outcome {
    match self {
      Self::Raw(value) => Outcome::Success(value),
      Self::Resolved(outcome) => outcome,
    }
  }
}

impl From<Value> for Entry {
  fn from(value: Value) -> Self {
    Self::Raw(value)
  }
}

impl From<Outcome> for Entry {
  fn from(outcome: Outcome) -> Self {
    Self::Resolved(outcome)
  }
}

impl From<Failure> for Entry {
  fn from(failure: Failure) -> Self {
    Self::Resolved(Outcome::Failure(failure))
  }
}
