//! Features command implementation.
//!
//! The `browsegate features` command shows which features the gate will
//! require after overrides, in evaluation order, and which alternatives
//! it accepts.

use serde::Serialize;

use crate::cli::args::FeaturesArgs;
use crate::config::{GateConfig, Overrides};
use crate::error::Result;
use crate::features::AlternativeGroups;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

#[derive(Debug, Serialize)]
struct FeatureListing<'a> {
    required: &'a [String],
    alternatives: &'a [Vec<String>],
    force_warning: bool,
}

/// The features command implementation.
pub struct FeaturesCommand {
    overrides: Overrides,
    args: FeaturesArgs,
}

impl FeaturesCommand {
    /// Create a new features command on top of the loaded overrides.
    pub fn new(overrides: Overrides, args: FeaturesArgs) -> Self {
        Self { overrides, args }
    }

    /// The configuration after layering command-line flags.
    pub fn gate_config(&self) -> GateConfig {
        let cli = self.args.features.to_overrides();
        GateConfig::from_overrides(&self.overrides.clone().merge(cli))
    }
}

impl Command for FeaturesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.gate_config();
        let alternatives = AlternativeGroups::builtin();

        if self.args.json {
            let listing = FeatureListing {
                required: config.required_features(),
                alternatives: alternatives.groups(),
                force_warning: config.force_warning(),
            };
            let json = serde_json::to_string_pretty(&listing).map_err(anyhow::Error::from)?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Required features");
        if config.required_features().is_empty() {
            ui.message("  (none)");
        }
        for (i, feature) in config.required_features().iter().enumerate() {
            ui.message(&format!("  {}. {}", i + 1, feature));
        }

        ui.message("");
        ui.show_header("Accepted alternatives");
        for group in alternatives.groups() {
            ui.message(&format!("  {}", group.join(" | ")));
        }

        if config.force_warning() {
            ui.message("");
            ui.warning("forceWarning is set: every check will show the warning");
        }

        Ok(CommandResult::success())
    }
}
