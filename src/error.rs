//! Crate error type.
//!
//! `InvalidInterval` is the only data error a caller is expected to handle.
//! `Invariant` signals a defect in sequencing or allocation and must not be
//! retried.

use thiserror::Error;

use crate::models::{ActivityId, Hour};

/// Errors raised while building activities or allocating resources.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// Interval bounds fall outside `0..=max_hour` or are reversed.
    #[error("invalid interval for activity {id}: [{start}, {end}] (max hour {max_hour})")]
    InvalidInterval {
        id: ActivityId,
        start: Hour,
        end: Hour,
        max_hour: Hour,
    },

    /// Resource ids start at 1.
    #[error("invalid resource id {0}: ids start at 1")]
    InvalidResource(u32),

    /// Internal consistency check failed.
    #[error("invariant violated: {0}")]
    Invariant(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for the crate.
pub type PartitionResult<T> = Result<T, PartitionError>;
