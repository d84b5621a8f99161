//! Conversion of input entries into outcomes.

use std::collections::BTreeMap;

use fanout_outcome::Outcome;
use tracing::{debug, trace};

use crate::entry::Entry;
use crate::shape::parse_raw;

/// Resolve every entry into an outcome.
///
/// When the whole input is a mapping of raw records, each record is
/// converted. Otherwise nothing is converted and every entry is taken
/// verbatim. There is no partial conversion. A later duplicate name replaces
/// an earlier one.
pub fn convert_entries(entries: Vec<(String, Entry)>) -> BTreeMap<String, Outcome> {
  match parse_raw(entries.iter().map(|(name, entry)| (name.as_str(), entry))) {
    Ok(records) => {
      trace!(targets = records.len(), "converting raw records");
      entries
        .into_iter()
        .map(|(name, _)| name)
        .zip(records)
        .map(|(name, record)| (name, Outcome::from(record)))
        .collect()
    }
    Err(mismatch) => {
      debug!(reason = %mismatch, "input is not a raw record mapping, passing entries through");
      entries
        .into_iter()
        .map(|(name, entry)| (name, entry.into_outcome()))
        .collect()
    }
  }
}
