//! Fanout Result
//!
//! This crate provides [`ResultSet`], the immutable collection of per-target
//! outcomes produced by running one operation against many targets.
//!
//! Construction accepts two input shapes:
//! - a mapping of raw `{value, error}` records, which is validated and
//!   converted record by record
//! - anything else, which is taken as already-resolved outcomes without
//!   conversion (this is how a result set is rebuilt from its own contents)
//!
//! Once built, a result set answers counts, names, lookups and ok/error
//! partitions, each partition being a new result set.

mod convert;
mod entry;
mod error;
mod executor;
mod result_set;
mod shape;

pub use convert::convert_entries;
pub use entry::Entry;
pub use error::{ResultSetError, ShapeMismatch};
pub use executor::Target;
pub use fanout_outcome::{ErrorRecord, Failure, NonEmptyString, Outcome, OutcomeError, RawRecord};
pub use result_set::{Iter, ResultSet};
pub use shape::{check_raw_shape, matches_raw_shape};
