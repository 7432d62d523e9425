//! Domain Value Objects
//!
//! Immutable value types parsed out of folder and file names.

mod date_key;
mod deploy_step;
mod title;

pub use date_key::DateKey;
pub use deploy_step::{DeployStep, FailurePolicy};
pub use title::{clean_title, strip_ordinal_prefix, title_case};
