//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod events;
pub mod file_system;

pub use command_runner::{CommandError, CommandRunner, CommandSpec};
pub use events::{EventSink, NoopEventSink, PipelineEvent};
pub use file_system::{DirEntry, EntryKind, FileSystem, FsError, FsResult};
