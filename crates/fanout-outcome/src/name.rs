use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::OutcomeError;

/// A string that is guaranteed to hold at least one character.
///
/// Failure messages, kinds and issue codes all use this type so an empty
/// string can never reach a constructed [`Failure`](crate::Failure).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

impl NonEmptyString {
  /// Create a non-empty string, rejecting `""`.
  pub fn new(value: impl Into<String>) -> Result<Self, OutcomeError> {
    Self::for_field("value", value)
  }

  /// Like [`NonEmptyString::new`], naming `field` in the error.
  pub(crate) fn for_field(
    field: &'static str,
    value: impl Into<String>,
  ) -> Result<Self, OutcomeError> {
    let value = value.into();
    if value.is_empty() {
      return Err(OutcomeError::EmptyString { field });
    }
    Ok(Self(value))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_string(self) -> String {
    self.0
  }
}

impl TryFrom<String> for NonEmptyString {
  type Error = OutcomeError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

impl TryFrom<&str> for NonEmptyString {
  type Error = OutcomeError;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

impl From<NonEmptyString> for String {
  fn from(value: NonEmptyString) -> Self {
    value.0
  }
}

impl Deref for NonEmptyString {
  type Target = str;

  fn deref(&self) -> &str {
    &self.0
  }
}

impl AsRef<str> for NonEmptyString {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl Borrow<str> for NonEmptyString {
  fn borrow(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for NonEmptyString {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl PartialEq<str> for NonEmptyString {
  fn eq(&self, other: &str) -> bool {
    self.0 == other
  }
}

impl PartialEq<&str> for NonEmptyString {
  fn eq(&self, other: &&str) -> bool {
    self.0 == *other
  }
}
