//! Event Sink Implementations
//!
//! Provides concrete implementations of EventSink:
//! - ConsoleEventSink: Human-readable progress
//! - JsonEventSink: NDJSON output for scripts

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::{event_to_json, JsonEventSink};
