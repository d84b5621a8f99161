//! Per-target outcome types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::OutcomeError;
use crate::name::NonEmptyString;
use crate::record::RawRecord;

/// The result of running an operation against a single target.
///
/// Exactly one variant is active. Outcomes serialize through [`RawRecord`],
/// so the wire form of an outcome is always a valid raw record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawRecord", from = "RawRecord")]
pub enum Outcome {
  /// The operation produced a data value.
  Success(Value),
  /// The operation failed with a structured error.
  Failure(Failure),
}

impl Outcome {
  pub fn success(value: impl Into<Value>) -> Self {
    Self::Success(value.into())
  }

  pub fn is_success(&self) -> bool {
    matches!(self, Self::Success(_))
  }

  pub fn is_failure(&self) -> bool {
    matches!(self, Self::Failure(_))
  }

  /// The success data, if this outcome is a success.
  pub fn value(&self) -> Option<&Value> {
    match self {
      Self::Success(value) => Some(value),
      Self::Failure(_) => None,
    }
  }

  /// The failure payload, if this outcome is a failure.
  pub fn failure(&self) -> Option<&Failure> {
    match self {
      Self::Success(_) => None,
      Self::Failure(failure) => Some(failure),
    }
  }

  pub fn into_result(self) -> Result<Value, Failure> {
    match self {
      Self::Success(value) => Ok(value),
      Self::Failure(failure) => Err(failure),
    }
  }
}

impl From<Failure> for Outcome {
  fn from(failure: Failure) -> Self {
    Self::Failure(failure)
  }
}

impl From<Result<Value, Failure>> for Outcome {
  fn from(result: Result<Value, Failure>) -> Self {
    match result {
      Ok(value) => Self::Success(value),
      Err(failure) => Self::Failure(failure),
    }
  }
}

/// A structured error reported by a target.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
  pub message: NonEmptyString,
  pub kind: Option<NonEmptyString>,
  pub issue_code: Option<NonEmptyString>,
  /// Data the target had produced before it failed, if any. Never
  /// `Some(Value::Null)`: a null partial value is recorded as `None`.
  pub partial_value: Option<Value>,
  pub details: Option<Map<String, Value>>,
}

impl Failure {
  /// Create a failure with only a message.
  pub fn new(message: impl Into<String>) -> Result<Self, OutcomeError> {
    Ok(Self {
      message: NonEmptyString::for_field("msg", message)?,
      kind: None,
      issue_code: None,
      partial_value: None,
      details: None,
    })
  }

  pub fn with_kind(mut self, kind: impl Into<String>) -> Result<Self, OutcomeError> {
    self.kind = Some(NonEmptyString::for_field("kind", kind)?);
    Ok(self)
  }

  pub fn with_issue_code(mut self, issue_code: impl Into<String>) -> Result<Self, OutcomeError> {
    self.issue_code = Some(NonEmptyString::for_field("issue_code", issue_code)?);
    Ok(self)
  }

  /// Attach the data produced before the failure. `null` clears it.
  pub fn with_partial_value(mut self, value: impl Into<Value>) -> Self {
    self.partial_value = match value.into() {
      Value::Null => None,
      value => Some(value),
    };
    self
  }

  pub fn with_details(mut self, details: Map<String, Value>) -> Self {
    self.details = Some(details);
    self
  }
}

impl fmt::Display for Failure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.kind {
      Some(kind) => write!(f, "{}: {}", kind, self.message),
      None => f.write_str(&self.message),
    }
  }
}

impl std::error::Error for Failure {}
