//! Outcome error types.

/// Errors that can occur while building outcomes or reading raw records.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OutcomeError {
  /// A field that must hold a non-empty string was empty.
  #[error("{field} must not be empty")]
  EmptyString { field: &'static str },

  /// A value did not match the raw `{value, error}` record shape.
  #[error("invalid record: {message}")]
  InvalidRecord { message: String },
}
