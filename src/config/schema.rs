//! Overrides file schema.
//!
//! This module contains the struct that maps to the optional overrides
//! file (`browsegate.yml` / `browsegate.json`) and to the options accepted
//! by [`crate::gate::run()`].

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Caller-supplied adjustments to the default gate configuration.
///
/// ```yaml
/// debug: true
/// forceWarning: false
/// features:
///   history: false
///   webgl: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Overrides {
    /// Log every decision point of the evaluation
    #[serde(skip_serializing_if = "is_false")]
    pub debug: bool,

    /// Show the warning regardless of detected capabilities
    #[serde(alias = "force_warning", skip_serializing_if = "is_false")]
    pub force_warning: bool,

    /// Feature names to add (`true`) to or remove (any other value) from
    /// the required list, applied in the order given
    #[serde(
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_feature_toggles"
    )]
    #[schemars(with = "IndexMap<String, serde_json::Value>")]
    pub features: IndexMap<String, bool>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Only an explicit `true` adds a feature; `false`, `null`, strings and
/// the like all remove it.
fn deserialize_feature_toggles<'de, D>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, serde_yaml::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, value)| (name, value.as_bool() == Some(true)))
        .collect())
}

/// Generate the JSON Schema for the overrides file.
pub fn overrides_json_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(Overrides);
    schema.to_value()
}

impl Overrides {
    /// Create empty overrides (equivalent to the defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable debug logging.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Force the warning to be shown.
    pub fn with_force_warning(mut self, force: bool) -> Self {
        self.force_warning = force;
        self
    }

    /// Mark a feature as required (`true`) or not required (`false`).
    pub fn with_feature(mut self, name: impl Into<String>, required: bool) -> Self {
        self.features.insert(name.into(), required);
        self
    }

    /// Layer another set of overrides on top of this one.
    ///
    /// Flags are OR-ed together; feature entries in `other` replace
    /// entries for the same name.
    pub fn merge(mut self, other: Overrides) -> Self {
        self.debug |= other.debug;
        self.force_warning |= other.force_warning;
        self.features.extend(other.features);
        self
    }
}
