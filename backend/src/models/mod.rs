//! Domain models for the event scheduler

pub mod event;

// Re-exports
pub use event::Event;
