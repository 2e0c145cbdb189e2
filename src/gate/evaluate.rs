//! Old-browser evaluation.
//!
//! [`FeatureGate`] walks the required features in configured order against
//! a capability report. Untested features are skipped. The first tested
//! feature that is neither supported nor covered by a supported alternative
//! marks the browser as old, and nothing after it is looked up.

use serde::Serialize;

use crate::config::GateConfig;
use crate::features::{AlternativeGroups, CapabilitySource};

/// How a single required feature fared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FeatureOutcome {
    /// The feature itself is supported.
    Supported,
    /// The feature isn't supported but an alternative is.
    Alternative {
        /// The supported alternative feature.
        alternative: String,
    },
    /// The report has no entry for the feature; it was skipped.
    Untested,
    /// Tested, unsupported, and no supported alternative.
    Unsupported,
}

impl FeatureOutcome {
    /// Whether this outcome makes the browser old.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Unsupported)
    }
}

/// The evaluated outcome for one required feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCheck {
    /// The required feature.
    pub feature: String,
    /// What the report said about it.
    #[serde(flatten)]
    pub outcome: FeatureOutcome,
}

/// The result of walking the required list once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// Evaluated features in order, ending at the first failure if any.
    pub checks: Vec<FeatureCheck>,
    /// Required features after the first failure that were never looked up.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub not_evaluated: Vec<String>,
}

impl Assessment {
    /// Whether a required feature failed.
    pub fn is_old_browser(&self) -> bool {
        self.failed_feature().is_some()
    }

    /// The feature that failed, if any.
    pub fn failed_feature(&self) -> Option<&str> {
        self.checks
            .iter()
            .find(|c| c.outcome.is_failure())
            .map(|c| c.feature.as_str())
    }

    /// Required features the report never tested.
    pub fn untested(&self) -> impl Iterator<Item = &str> {
        self.checks
            .iter()
            .filter(|c| c.outcome == FeatureOutcome::Untested)
            .map(|c| c.feature.as_str())
    }
}

/// Evaluates a [`GateConfig`] against capability reports.
///
/// # Example
///
/// ```
/// use browsegate::config::GateConfig;
/// use browsegate::features::CapabilityReport;
/// use browsegate::gate::FeatureGate;
///
/// let config = GateConfig::new();
/// let gate = FeatureGate::new(&config);
/// let report = CapabilityReport::new()
///     .with("flexbox", false)
///     .with("flexboxtweener", true);
///
/// assert!(gate.is_feature_satisfied(&report, "flexbox"));
/// assert!(!gate.is_old_browser(&report));
/// ```
#[derive(Debug, Clone)]
pub struct FeatureGate<'a> {
    config: &'a GateConfig,
    alternatives: AlternativeGroups,
}

impl<'a> FeatureGate<'a> {
    /// Create a gate using the built-in alternative groups.
    pub fn new(config: &'a GateConfig) -> Self {
        Self::with_alternatives(config, AlternativeGroups::builtin())
    }

    /// Create a gate with a custom alternative table.
    pub fn with_alternatives(config: &'a GateConfig, alternatives: AlternativeGroups) -> Self {
        Self {
            config,
            alternatives,
        }
    }

    /// The configuration being evaluated.
    pub fn config(&self) -> &GateConfig {
        self.config
    }

    /// Whether the report marks `feature` as supported.
    pub fn is_feature_supported(&self, report: &dyn CapabilitySource, feature: &str) -> bool {
        let supported = report.get(feature) == Some(true);
        if supported && self.config.debug() {
            tracing::info!("Required feature \"{}\" is supported.", feature);
        }
        supported
    }

    /// The first supported alternative to `feature`, if any.
    pub fn supported_alternative(
        &self,
        report: &dyn CapabilitySource,
        feature: &str,
    ) -> Option<String> {
        let found = self
            .alternatives
            .alternatives_for(feature)
            .find(|alternative| report.get(alternative) == Some(true))?;

        if self.config.debug() {
            tracing::info!(
                "An alternative feature (\"{}\") for required feature \"{}\" is supported.",
                found,
                feature
            );
        }
        Some(found.to_string())
    }

    /// Whether another member of `feature`'s group is supported.
    pub fn has_supported_alternative(&self, report: &dyn CapabilitySource, feature: &str) -> bool {
        self.supported_alternative(report, feature).is_some()
    }

    /// Supported in its own right, or through an alternative.
    pub fn is_feature_satisfied(&self, report: &dyn CapabilitySource, feature: &str) -> bool {
        self.is_feature_supported(report, feature)
            || self.has_supported_alternative(report, feature)
    }

    /// Walk the required features and record each outcome.
    pub fn assess(&self, report: &dyn CapabilitySource) -> Assessment {
        let required = self.config.required_features();
        let mut assessment = Assessment::default();

        for (index, feature) in required.iter().enumerate() {
            let outcome = self.check_feature(report, feature);
            let failed = outcome.is_failure();
            assessment.checks.push(FeatureCheck {
                feature: feature.clone(),
                outcome,
            });

            if failed {
                assessment.not_evaluated = required[index + 1..].to_vec();
                break;
            }
        }

        assessment
    }

    fn check_feature(&self, report: &dyn CapabilitySource, feature: &str) -> FeatureOutcome {
        if report.get(feature).is_none() {
            if self.config.debug() {
                tracing::warn!("Required feature \"{}\" was not tested for support.", feature);
            }
            return FeatureOutcome::Untested;
        }

        if self.is_feature_supported(report, feature) {
            return FeatureOutcome::Supported;
        }

        if let Some(alternative) = self.supported_alternative(report, feature) {
            return FeatureOutcome::Alternative { alternative };
        }

        if self.config.debug() {
            tracing::info!("Required feature \"{}\" is not supported.", feature);
        }
        FeatureOutcome::Unsupported
    }

    /// Whether any tested required feature is unsatisfied.
    pub fn is_old_browser(&self, report: &dyn CapabilitySource) -> bool {
        self.assess(report).is_old_browser()
    }

    /// Old browser, or the warning is forced.
    pub fn should_warn(&self, report: &dyn CapabilitySource) -> bool {
        self.is_old_browser(report) || self.config.force_warning()
    }
}

/// [`FeatureGate::is_old_browser`] with the built-in alternatives.
pub fn is_old_browser(config: &GateConfig, report: &dyn CapabilitySource) -> bool {
    FeatureGate::new(config).is_old_browser(report)
}

/// [`FeatureGate::should_warn`] with the built-in alternatives.
pub fn should_warn(config: &GateConfig, report: &dyn CapabilitySource) -> bool {
    FeatureGate::new(config).should_warn(report)
}
