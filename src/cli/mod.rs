//! Command-line interface for browsegate.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    CheckArgs, Cli, Commands, CompletionsArgs, FeatureOverrideArgs, FeaturesArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
