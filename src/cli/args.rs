//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::Overrides;

/// browsegate - Warn visitors on outdated browsers.
#[derive(Debug, Parser)]
#[command(name = "browsegate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to overrides file (overrides browsegate.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory searched for browsegate.yml (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging of every decision point
    #[arg(long, global = true, env = "BROWSEGATE_DEBUG")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate a capability report (default if no command specified)
    Check(CheckArgs),

    /// Print the warning banner HTML
    Banner,

    /// Show the effective required features and alternative groups
    Features(FeaturesArgs),

    /// Print the JSON Schema for the overrides file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Feature list adjustments shared by `check` and `features`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FeatureOverrideArgs {
    /// Add required features (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "FEATURE")]
    pub require: Vec<String>,

    /// Remove required features (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "FEATURE")]
    pub drop: Vec<String>,
}

impl FeatureOverrideArgs {
    /// Convert into overrides. A name in both lists stays required.
    pub fn to_overrides(&self) -> Overrides {
        let mut overrides = Overrides::new();
        for feature in &self.drop {
            overrides.features.insert(feature.clone(), false);
        }
        for feature in &self.require {
            overrides.features.insert(feature.clone(), true);
        }
        overrides
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Capability report (JSON object of feature results); omit to
    /// simulate an unavailable detector
    #[arg(short, long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// HTML page to insert the warning into
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// Where to write the patched page (defaults to overwriting --html)
    #[arg(short, long, value_name = "FILE", requires = "html")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub features: FeatureOverrideArgs,

    /// Show the warning regardless of the report
    #[arg(long)]
    pub force_warning: bool,

    /// Output the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with code 1 when the warning is due
    #[arg(long)]
    pub fail_on_warning: bool,
}

/// Arguments for the `features` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FeaturesArgs {
    #[command(flatten)]
    pub features: FeatureOverrideArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
