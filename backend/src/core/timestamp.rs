//! Event timestamps
//!
//! A timestamp is the unique, strictly positive integer key of an event.
//! Positivity is carried by the type, so anything holding a [`Timestamp`]
//! has already passed validation and the index never sees an invalid key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while turning raw input into a [`Timestamp`]
#[derive(Debug, Error, PartialEq)]
pub enum TimestampError {
    #[error("Timestamp must be a positive integer, got {0}")]
    NonPositive(i64),

    #[error("Timestamp '{0}' is not a valid integer")]
    NotANumber(String),
}

/// Strictly positive event key
///
/// # Example
/// ```
/// use event_scheduler_core::Timestamp;
///
/// let ts = Timestamp::new(42).unwrap();
/// assert_eq!(ts.get(), 42);
///
/// assert!(Timestamp::new(0).is_err());
/// assert!("-7".parse::<Timestamp>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(NonZeroU64);

impl Timestamp {
    /// Validate a signed integer as a timestamp
    ///
    /// # Errors
    /// Returns `TimestampError::NonPositive` if `raw <= 0`.
    pub fn new(raw: i64) -> Result<Self, TimestampError> {
        u64::try_from(raw)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or(TimestampError::NonPositive(raw))
    }

    /// Build a timestamp from an unsigned value, `None` for zero
    pub fn from_u64(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    /// Get the raw integer value
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(raw) = trimmed.parse::<u64>() {
            return Self::from_u64(raw).ok_or(TimestampError::NonPositive(0));
        }
        match trimmed.parse::<i128>() {
            Ok(raw) if raw <= 0 => Err(TimestampError::NonPositive(
                i64::try_from(raw).unwrap_or(i64::MIN),
            )),
            _ => Err(TimestampError::NotANumber(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
