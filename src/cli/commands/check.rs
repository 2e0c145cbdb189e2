//! Check command implementation.
//!
//! The `browsegate check` command evaluates a capability report against the
//! required features and, when a warning is due, inserts the banner into an
//! HTML page.

use std::path::Path;

use crate::cli::args::CheckArgs;
use crate::config::{GateConfig, Overrides};
use crate::error::Result;
use crate::features::{CapabilityReport, CapabilitySource};
use crate::gate::{run_with_config, FeatureOutcome, RunOutcome, Verdict};
use crate::notify::{BannerNotifier, DomTree, HtmlDocument};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    overrides: Overrides,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command on top of the loaded overrides.
    pub fn new(overrides: Overrides, args: CheckArgs) -> Self {
        Self { overrides, args }
    }

    /// The configuration after layering command-line flags.
    pub fn gate_config(&self) -> GateConfig {
        let cli = self
            .args
            .features
            .to_overrides()
            .with_force_warning(self.args.force_warning);
        GateConfig::from_overrides(&self.overrides.clone().merge(cli))
    }

    fn evaluate(&self, config: &GateConfig, ui: &mut dyn UserInterface) -> Result<RunOutcome> {
        let report = match &self.args.report {
            Some(path) => Some(CapabilityReport::load(path)?),
            None => None,
        };
        let detector = report.as_ref().map(|r| r as &dyn CapabilitySource);
        let mut notifier = BannerNotifier::new();

        let Some(html_path) = &self.args.html else {
            return run_with_config(config, detector, &mut notifier, &mut DomTree::new());
        };

        let mut document = HtmlDocument::load(html_path)?;
        let outcome = run_with_config(config, detector, &mut notifier, &mut document)?;

        if outcome.warned() {
            let destination = self.args.output.as_deref().unwrap_or(html_path.as_path());
            document.save(destination)?;
            if !self.args.json {
                ui.success(&format!("Inserted warning into {}", destination.display()));
            }
        } else if let Some(output) = &self.args.output {
            // Keep --output usable as a build step even when nothing changed.
            document.save(output)?;
        }

        Ok(outcome)
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.gate_config();
        let outcome = self.evaluate(&config, ui)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&outcome).map_err(anyhow::Error::from)?;
            ui.output(&json);
        } else {
            show_outcome(ui, &config, &outcome, self.args.report.as_deref());
        }

        if outcome.warned() && self.args.fail_on_warning {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}

fn show_outcome(
    ui: &mut dyn UserInterface,
    config: &GateConfig,
    outcome: &RunOutcome,
    report_path: Option<&Path>,
) {
    let Some(verdict) = outcome.verdict() else {
        ui.warning("No capability report given; the detector is unavailable, no warning shown");
        return;
    };

    if let Some(path) = report_path {
        ui.show_header(&format!("Capability check: {}", path.display()));
    }
    ui.message(&format!(
        "Checking {} required features",
        config.required_features().len()
    ));

    show_checks(ui, verdict);

    if verdict.assessment.is_old_browser() {
        let feature = verdict.assessment.failed_feature().unwrap_or_default();
        ui.warning(&format!("Old browser: \"{}\" is not supported", feature));
    } else if verdict.forced {
        ui.warning("Warning forced by configuration");
    } else {
        ui.success("Browser meets all tested requirements");
    }
}

fn show_checks(ui: &mut dyn UserInterface, verdict: &Verdict) {
    for check in &verdict.assessment.checks {
        match &check.outcome {
            FeatureOutcome::Supported => ui.success(&format!("{} supported", check.feature)),
            FeatureOutcome::Alternative { alternative } => ui.success(&format!(
                "{} satisfied by {}",
                check.feature, alternative
            )),
            FeatureOutcome::Untested => {
                ui.message(&format!("- {} not tested, skipped", check.feature))
            }
            FeatureOutcome::Unsupported => ui.error(&format!("{} unsupported", check.feature)),
        }
    }

    if !verdict.assessment.not_evaluated.is_empty() {
        ui.message(&format!(
            "  not evaluated: {}",
            verdict.assessment.not_evaluated.join(", ")
        ));
    }
}
