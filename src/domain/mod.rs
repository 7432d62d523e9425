//! Domain Layer
//!
//! Pure types and rules for turning a tree of dated practice folders into
//! records, without touching the file system or spawning processes.
//!
//! ## Structure
//!
//! - `entities/` - `DailyRecord`, `ProblemEntry`
//! - `value_objects/` - `DateKey`, problem titles, `DeployStep`
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod value_objects;
