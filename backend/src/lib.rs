//! Event Scheduler Core
//!
//! Keeps a collection of time-stamped events perpetually ordered so the next
//! upcoming event, an arbitrary event, or the full ordered listing can be
//! retrieved in logarithmic time.
//!
//! # Architecture
//!
//! - **core**: Validated timestamps (strictly positive keys)
//! - **models**: Domain types (Event)
//! - **index**: AVL-balanced ordered event index
//!
//! # Critical Invariants
//!
//! 1. Timestamps are unique and strictly positive
//! 2. The index is a valid AVL tree after every public operation
//! 3. Rejected operations never partially mutate the index

// Module declarations
pub mod core;
pub mod index;
pub mod models;

// Re-exports for convenience
pub use crate::core::timestamp::{Timestamp, TimestampError};
pub use index::{EventIndex, IndexError, InvariantViolation, Iter};
pub use models::event::Event;
