//! Scheduled event record
//!
//! An [`Event`] pairs a unique [`Timestamp`] with free-form details. The
//! index stores the two parts inside its nodes and hands out owned events
//! only when a caller asks for a materialized copy (removal, snapshots).
//!
//! # Example
//!
//! ```rust
//! use event_scheduler_core::{Event, Timestamp};
//!
//! let event = Event::new(Timestamp::new(10).unwrap(), "standup");
//! assert_eq!(event.to_string(), "Event at 10: standup");
//! ```

use crate::core::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single scheduled event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique key, doubles as the scheduled time
    pub timestamp: Timestamp,

    /// Opaque payload describing the event
    pub details: String,
}

impl Event {
    pub fn new(timestamp: Timestamp, details: impl Into<String>) -> Self {
        Self {
            timestamp,
            details: details.into(),
        }
    }
}

impl From<(Timestamp, &str)> for Event {
    fn from((timestamp, details): (Timestamp, &str)) -> Self {
        Self::new(timestamp, details)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event at {}: {}", self.timestamp, self.details)
    }
}
