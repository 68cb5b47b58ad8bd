//! Shared CLI argument types
//!
//! Reusable argument structs that are flattened into commands with
//! `#[command(flatten)]`.

mod common;
mod filters;
mod global;

pub use common::OutputFormat;
pub use filters::{AuditFilterArgs, LimitArgs};
pub use global::GlobalOptions;
