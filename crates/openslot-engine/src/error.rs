//! Error types for availability computations.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// An interval whose start is not strictly before its end.
    #[error("invalid interval: start {start} is not before end {end}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// An hour outside the 0-23 civil range.
    #[error("invalid hour {0}: must be between 0 and 23")]
    InvalidHour(u32),

    /// A working window that could never contain a free slot.
    #[error("invalid working window: start hour {start_hour} must be before end hour {end_hour}")]
    InvalidWindow { start_hour: u32, end_hour: u32 },

    /// A working-hours string that does not parse as "START-END".
    #[error("invalid working hours '{0}': expected \"START-END\", e.g. \"9-17\"")]
    InvalidWindowSpec(String),

    /// A duration that is zero or negative where a positive one is required.
    #[error("invalid duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),
}

pub type Result<T> = std::result::Result<T, SlotError>;
