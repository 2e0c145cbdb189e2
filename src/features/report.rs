//! Capability report loading and lookup.
//!
//! A report is the serialized output of a feature detector: a JSON object
//! keyed by feature name. A key that is missing was never tested. A key
//! holding `true` is supported; any other value counts as tested and
//! unsupported.

use crate::error::{GateError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// The detector collaborator.
///
/// `get` returns `None` when the feature was not tested, `Some(true)` when
/// it is supported and `Some(false)` when it was tested and unsupported.
pub trait CapabilitySource {
    /// Look up the detection result for `feature`.
    fn get(&self, feature: &str) -> Option<bool>;
}

impl<T: CapabilitySource + ?Sized> CapabilitySource for &T {
    fn get(&self, feature: &str) -> Option<bool> {
        (**self).get(feature)
    }
}

impl CapabilitySource for HashMap<String, bool> {
    fn get(&self, feature: &str) -> Option<bool> {
        HashMap::get(self, feature).copied()
    }
}

impl CapabilitySource for BTreeMap<String, bool> {
    fn get(&self, feature: &str) -> Option<bool> {
        BTreeMap::get(self, feature).copied()
    }
}

/// The three states a feature can be in for a given report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureState {
    /// Tested and supported.
    Supported,
    /// Tested and not supported.
    Unsupported,
    /// Not present in the report.
    NotTested,
}

impl FeatureState {
    /// Classify a raw lookup result.
    pub fn from_lookup(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Supported,
            Some(false) => Self::Unsupported,
            None => Self::NotTested,
        }
    }

    /// Lower-case label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Supported => "supported",
            Self::Unsupported => "unsupported",
            Self::NotTested => "not tested",
        }
    }
}

/// A capability report parsed from detector output.
///
/// # Example
///
/// ```
/// use browsegate::features::{CapabilityReport, CapabilitySource};
///
/// let report = CapabilityReport::from_json_str(r#"{"flexbox": true, "history": false}"#).unwrap();
/// assert_eq!(report.get("flexbox"), Some(true));
/// assert_eq!(report.get("history"), Some(false));
/// assert_eq!(report.get("webgl"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CapabilityReport {
    results: BTreeMap<String, bool>,
}

impl CapabilityReport {
    /// Create an empty report (every feature untested).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result for `feature`.
    pub fn with(mut self, feature: impl Into<String>, supported: bool) -> Self {
        self.results.insert(feature.into(), supported);
        self
    }

    /// Build a report from a JSON value.
    ///
    /// The value must be an object. `true` means supported; any other
    /// value (including nested objects and `null`) means unsupported.
    pub fn from_value(value: Value) -> Result<Self> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(GateError::ReportParseError {
                    path: None,
                    message: format!("expected a JSON object, found {}", json_kind(&other)),
                });
            }
        };

        let results = map
            .into_iter()
            .map(|(feature, value)| (feature, matches!(value, Value::Bool(true))))
            .collect();

        Ok(Self { results })
    }

    /// Parse a report from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| GateError::ReportParseError {
                path: None,
                message: e.to_string(),
            })?;
        Self::from_value(value)
    }

    /// Load a report from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ReportNotFound` if the file doesn't exist.
    /// Returns `ReportParseError` if the content isn't a JSON object.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GateError::ReportNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                GateError::Io(e)
            }
        })?;

        Self::from_json_str(&content).map_err(|e| match e {
            GateError::ReportParseError { message, .. } => GateError::ReportParseError {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    /// State of `feature` in this report.
    pub fn state(&self, feature: &str) -> FeatureState {
        FeatureState::from_lookup(self.get(feature))
    }

    /// Number of tested features.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no feature was tested.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over tested features in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.results.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl CapabilitySource for CapabilityReport {
    fn get(&self, feature: &str) -> Option<bool> {
        self.results.get(feature).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for CapabilityReport {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
