//! Common test utilities for practice-log CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory and home, plus a CLI runner
//! - Fixtures: Reusable config snippets

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
