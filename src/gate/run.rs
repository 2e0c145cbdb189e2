//! The gate entry point.

use serde::Serialize;

use crate::config::{GateConfig, Overrides};
use crate::error::Result;
use crate::features::CapabilitySource;
use crate::notify::{Document, Notifier};

use super::evaluate::{Assessment, FeatureGate};

/// What a single evaluation decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Per-feature results.
    pub assessment: Assessment,
    /// Whether the warning was forced by configuration.
    pub forced: bool,
}

impl Verdict {
    /// Whether the warning is due.
    pub fn should_warn(&self) -> bool {
        self.assessment.is_old_browser() || self.forced
    }
}

/// Outcome of [`run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// No capability detector was available; nothing was evaluated.
    DetectorUnavailable,
    /// The report was evaluated. The warning was emitted iff
    /// [`Verdict::should_warn`].
    Evaluated(Verdict),
}

impl RunOutcome {
    /// Whether the warning was emitted.
    pub fn warned(&self) -> bool {
        match self {
            Self::DetectorUnavailable => false,
            Self::Evaluated(verdict) => verdict.should_warn(),
        }
    }

    /// The verdict, if the report was evaluated.
    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            Self::DetectorUnavailable => None,
            Self::Evaluated(verdict) => Some(verdict),
        }
    }
}

/// Build the configuration, evaluate the detector's report, and warn if
/// the browser is old or the warning is forced.
///
/// A missing detector is not an error: nothing is evaluated and the
/// document is left alone. Errors only come from the notifier.
///
/// # Example
///
/// ```
/// use browsegate::config::Overrides;
/// use browsegate::features::CapabilityReport;
/// use browsegate::gate::run;
/// use browsegate::notify::{BannerNotifier, DomTree};
///
/// let report = CapabilityReport::new().with("history", false);
/// let mut doc = DomTree::new();
/// let outcome = run(None, Some(&report), &mut BannerNotifier::new(), &mut doc).unwrap();
///
/// assert!(outcome.warned());
/// assert_eq!(doc.body().children.len(), 1);
///
/// let overrides = Overrides::new().with_feature("history", false);
/// let mut doc = DomTree::new();
/// let outcome = run(Some(&overrides), Some(&report), &mut BannerNotifier::new(), &mut doc).unwrap();
/// assert!(!outcome.warned());
/// assert!(doc.body().children.is_empty());
/// ```
pub fn run(
    overrides: Option<&Overrides>,
    detector: Option<&dyn CapabilitySource>,
    notifier: &mut dyn Notifier,
    document: &mut dyn Document,
) -> Result<RunOutcome> {
    let config = match overrides {
        Some(overrides) => GateConfig::from_overrides(overrides),
        None => GateConfig::default(),
    };
    run_with_config(&config, detector, notifier, document)
}

/// [`run`] with an already-built configuration.
pub fn run_with_config(
    config: &GateConfig,
    detector: Option<&dyn CapabilitySource>,
    notifier: &mut dyn Notifier,
    document: &mut dyn Document,
) -> Result<RunOutcome> {
    let Some(report) = detector else {
        if config.debug() {
            tracing::warn!("Capability detector is not available");
        }
        return Ok(RunOutcome::DetectorUnavailable);
    };

    let verdict = Verdict {
        assessment: FeatureGate::new(config).assess(report),
        forced: config.force_warning(),
    };

    if verdict.should_warn() {
        notifier.emit_warning(document)?;
    }

    Ok(RunOutcome::Evaluated(verdict))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{CapabilityReport, MockCapabilities};
    use crate::notify::{BannerNotifier, DomTree, RecordingNotifier};

    #[test]
    fn missing_detector_never_warns() {
        let overrides = Overrides::new().with_force_warning(true).with_debug(true);
        let mut notifier = RecordingNotifier::new();
        let mut doc = DomTree::new();

        let outcome = run(Some(&overrides), None, &mut notifier, &mut doc).unwrap();

        assert_eq!(outcome, RunOutcome::DetectorUnavailable);
        assert!(!outcome.warned());
        assert!(!notifier.was_emitted());
        assert!(doc.body().children.is_empty());
    }

    #[test]
    fn old_browser_emits_once() {
        let report = CapabilityReport::new().with("csstransitions", false);
        let mut notifier = RecordingNotifier::new();
        let mut doc = DomTree::new();

        let outcome = run(None, Some(&report), &mut notifier, &mut doc).unwrap();

        assert!(outcome.warned());
        assert_eq!(notifier.emitted(), 1);
        let verdict = outcome.verdict().unwrap();
        assert_eq!(verdict.assessment.failed_feature(), Some("csstransitions"));
        assert!(!verdict.forced);
    }

    #[test]
    fn modern_browser_is_left_alone() {
        let report = CapabilityReport::new()
            .with("csstransforms3d", true)
            .with("csstransitions", true)
            .with("flexbox", true)
            .with("flexwrap", true)
            .with("history", true);
        let mut notifier = RecordingNotifier::new();
        let mut doc = DomTree::new();

        let outcome = run(None, Some(&report), &mut notifier, &mut doc).unwrap();

        assert!(!outcome.warned());
        assert!(!notifier.was_emitted());
    }

    #[test]
    fn forced_warning_with_empty_report() {
        let overrides = Overrides::new().with_force_warning(true);
        let report = CapabilityReport::new();
        let mut doc = DomTree::new();

        let outcome = run(
            Some(&overrides),
            Some(&report),
            &mut BannerNotifier::new(),
            &mut doc,
        )
        .unwrap();

        assert!(outcome.warned());
        assert!(outcome.verdict().unwrap().forced);
        assert_eq!(doc.body().children.len(), 1);
    }

    #[test]
    fn feature_overrides_apply_before_evaluation() {
        let overrides = Overrides::new().with_feature("webgl", true);
        let caps = MockCapabilities::new().unsupported("webgl");
        let mut notifier = RecordingNotifier::new();
        let mut doc = DomTree::new();

        let outcome = run(Some(&overrides), Some(&caps), &mut notifier, &mut doc).unwrap();

        assert!(outcome.warned());
        assert_eq!(
            outcome.verdict().unwrap().assessment.failed_feature(),
            Some("webgl")
        );
    }

    #[test]
    fn outcome_serializes_with_status() {
        let json = serde_json::to_value(RunOutcome::DetectorUnavailable).unwrap();
        assert_eq!(json, serde_json::json!({"status": "detector_unavailable"}));

        let report = CapabilityReport::new();
        let outcome = run(
            None,
            Some(&report),
            &mut RecordingNotifier::new(),
            &mut DomTree::new(),
        )
        .unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "evaluated");
        assert_eq!(json["forced"], false);
        assert_eq!(json["assessment"]["checks"].as_array().unwrap().len(), 5);
    }
}
