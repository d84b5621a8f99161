//! Result set error types.

use fanout_outcome::OutcomeError;

/// Errors returned by [`ResultSet`](crate::ResultSet) operations.
#[derive(Debug, thiserror::Error)]
pub enum ResultSetError {
  /// No outcome is recorded for the requested target.
  #[error("target not found: {target}")]
  KeyNotFound { target: String },

  /// An executor result could not be turned into JSON.
  #[error("failed to serialize result for target '{target}': {source}")]
  Serialization {
    target: String,
    #[source]
    source: serde_json::Error,
  },
}

impl ResultSetError {
  pub fn key_not_found(target: impl Into<String>) -> Self {
    Self::KeyNotFound {
      target: target.into(),
    }
  }
}

/// Why an input mapping is not a mapping of raw records.
///
/// This is not surfaced as a failure: an input that does not match the raw
/// shape is accepted as already-resolved outcomes.
#[derive(Debug, thiserror::Error)]
pub enum ShapeMismatch {
  #[error("empty target name")]
  EmptyTargetName,

  #[error("target '{target}' holds a resolved outcome")]
  ResolvedEntry { target: String },

  #[error("target '{target}' is not a raw record: {source}")]
  InvalidRecord {
    target: String,
    #[source]
    source: OutcomeError,
  },
}
