//! The gate configuration: which features a browser must support.

use serde::Serialize;

use crate::config::schema::Overrides;

/// Features required when no overrides are given, in evaluation order.
pub const DEFAULT_REQUIRED_FEATURES: &[&str] = &[
    "csstransforms3d",
    "csstransitions",
    "flexbox",
    "flexwrap",
    "history",
];

/// Configuration for one evaluation run.
///
/// Built once from [`Overrides`] and then only read. The add/remove
/// primitives stay public so tests can shape the required list directly.
///
/// # Example
///
/// ```
/// use browsegate::config::{GateConfig, Overrides};
///
/// let overrides = Overrides::new().with_feature("history", false);
/// let config = GateConfig::from_overrides(&overrides);
/// assert!(!config.requires("history"));
/// assert!(config.requires("flexbox"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateConfig {
    debug: bool,
    force_warning: bool,
    required_features: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            debug: false,
            force_warning: false,
            required_features: DEFAULT_REQUIRED_FEATURES
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }
}

impl GateConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from caller overrides.
    ///
    /// Applied in order: debug flag, feature adjustments, force flag.
    /// A `false` flag never turns off a default.
    pub fn from_overrides(overrides: &Overrides) -> Self {
        let mut config = Self::default();

        if overrides.debug {
            config.debug = true;
        }

        config.apply_feature_overrides(
            overrides
                .features
                .iter()
                .map(|(name, required)| (name.as_str(), *required)),
        );

        if overrides.force_warning {
            config.force_warning = true;
        }

        config
    }

    /// Set the debug flag.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the force-warning flag.
    pub fn with_force_warning(mut self, force: bool) -> Self {
        self.force_warning = force;
        self
    }

    /// Replace the required list, dropping duplicates after the first.
    pub fn with_required_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.required_features.clear();
        for feature in features {
            self.add_required_feature(feature.as_ref());
        }
        self
    }

    /// Whether decision points are logged.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Whether the warning is shown regardless of the report.
    pub fn force_warning(&self) -> bool {
        self.force_warning
    }

    /// Required features in evaluation order.
    pub fn required_features(&self) -> &[String] {
        &self.required_features
    }

    /// Whether `feature` is in the required list.
    pub fn requires(&self, feature: &str) -> bool {
        self.feature_index(feature).is_some()
    }

    /// Append `feature` unless it is already required.
    pub fn add_required_feature(&mut self, feature: &str) {
        if self.feature_index(feature).is_none() {
            self.required_features.push(feature.to_string());
        }
    }

    /// Remove `feature` if it is required.
    pub fn remove_required_feature(&mut self, feature: &str) {
        if let Some(index) = self.feature_index(feature) {
            self.required_features.remove(index);
        }
    }

    /// Add every `true` entry, remove every other entry.
    pub fn apply_feature_overrides<I, S>(&mut self, features: I)
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        for (feature, required) in features {
            if required {
                self.add_required_feature(feature.as_ref());
            } else {
                self.remove_required_feature(feature.as_ref());
            }
        }
    }

    fn feature_index(&self, feature: &str) -> Option<usize> {
        self.required_features.iter().position(|f| f == feature)
    }
}
