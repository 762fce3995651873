//! Core value types shared by the index and its callers

pub mod timestamp;

pub use timestamp::{Timestamp, TimestampError};
