//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`], which also owns the shared overrides loading.

pub mod banner;
pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod features;
pub mod schema;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
