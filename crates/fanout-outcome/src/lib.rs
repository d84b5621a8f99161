//! Fanout Outcome
//!
//! This crate provides the per-target outcome model for fanout. An
//! [`Outcome`] is either a success carrying arbitrary JSON data or a
//! structured [`Failure`].
//!
//! Executors report results in the raw [`RawRecord`] shape
//! (`{"value": ..., "error": {...}}`); converting a record into an outcome
//! is a plain `From` conversion:
//! - no `error` member: `Success(value)` (`null` when `value` is absent)
//! - an `error` member: `Failure`, with `value` kept as the partial value

mod error;
mod name;
mod outcome;
mod record;

pub use error::OutcomeError;
pub use name::NonEmptyString;
pub use outcome::{Failure, Outcome};
pub use record::{ErrorRecord, RawRecord};
