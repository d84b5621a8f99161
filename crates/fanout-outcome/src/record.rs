//! The raw `{value, error}` record shape produced by executors.
//!
//! A raw record is the only pre-conversion shape accepted for a target:
//!
//! ```json
//! { "value": 5 }
//! { "value": { "partial": true }, "error": { "msg": "timeout", "kind": "exec/timeout" } }
//! ```
//!
//! Keys outside `value`/`error` (and `msg`/`kind`/`issue_code`/`details`
//! inside `error`) are rejected. A `null` optional field counts as absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::OutcomeError;
use crate::name::NonEmptyString;
use crate::outcome::{Failure, Outcome};

/// One target's raw result as reported by an executor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawRecord {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<ErrorRecord>,
}

/// The `error` member of a [`RawRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorRecord {
  pub msg: NonEmptyString,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub kind: Option<NonEmptyString>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub issue_code: Option<NonEmptyString>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub details: Option<Map<String, Value>>,
}

impl RawRecord {
  /// Check `value` against the record shape and read it.
  pub fn from_value(value: &Value) -> Result<Self, OutcomeError> {
    Self::deserialize(value).map_err(|e| OutcomeError::InvalidRecord {
      message: e.to_string(),
    })
  }
}

impl From<RawRecord> for Outcome {
  fn from(record: RawRecord) -> Self {
    match record.error {
      None => Outcome::Success(record.value.unwrap_or(Value::Null)),
      Some(error) => Outcome::Failure(Failure {
        message: error.msg,
        kind: error.kind,
        issue_code: error.issue_code,
        partial_value: record.value,
        details: error.details,
      }),
    }
  }
}

impl From<Outcome> for RawRecord {
  fn from(outcome: Outcome) -> Self {
    match outcome {
      Outcome::Success(value) => RawRecord {
        value: Some(value),
        error: None,
      },
      Outcome::Failure(failure) => RawRecord {
        value: failure.partial_value,
        error: Some(ErrorRecord {
          msg: failure.message,
          kind: failure.kind,
          issue_code: failure.issue_code,
          details: failure.details,
        }),
      },
    }
  }
}
