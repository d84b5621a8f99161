//! Building result sets from executor output.
//!
//! Executors key their results by target objects rather than names. Each
//! result is serialized to JSON, which is expected to take the raw
//! `{value, error}` record shape, and stored under the target's URI.

use serde::Serialize;
use serde_json::Map;
use tracing::{debug, instrument};

use crate::error::ResultSetError;
use crate::result_set::ResultSet;

/// Something an operation was executed against.
pub trait Target {
  /// The unique name the target is reported under.
  fn uri(&self) -> &str;
}

impl Target for str {
  fn uri(&self) -> &str {
    self
  }
}

impl Target for String {
  fn uri(&self) -> &str {
    self
  }
}

impl<T: Target + ?Sized> Target for &T {
  fn uri(&self) -> &str {
    (**self).uri()
  }
}

impl ResultSet {
  /// Build a result set from per-target executor results.
  #[instrument(name = "result_set_from_executor", skip_all)]
  pub fn from_executor<I, T, R>(results: I) -> Result<Self, ResultSetError>
  where
    I: IntoIterator<Item = (T, R)>,
    T: Target,
    R: Serialize,
  {
    let mut raw = Map::new();

    for (target, result) in results {
      let value =
        serde_json::to_value(&result).map_err(|source| ResultSetError::Serialization {
          target: target.uri().to_string(),
          source,
        })?;
      raw.insert(target.uri().to_string(), value);
    }

    debug!(targets = raw.len(), "collected executor results");

    Ok(Self::from_raw(raw))
  }
}
