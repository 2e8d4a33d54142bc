//! Event Sink Implementations
//!
//! Provides concrete implementations of TaskEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The human-readable sink lives with the rest of the terminal UI in the binary.

mod json;

pub use json::{event_json, JsonEventSink};
