//! Overrides file discovery and loading.
//!
//! An explicit `--config` path always wins. Otherwise the project
//! directory is searched for `browsegate.yml`, then `browsegate.json`.
//! With neither present the defaults apply.

use crate::config::schema::Overrides;
use crate::error::{GateError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File names searched for in the project directory, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &["browsegate.yml", "browsegate.json"];

/// Find the overrides file in `project_root`, if any.
pub fn find_config_file(project_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Load and parse a single overrides file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML/JSON is invalid.
pub fn load_overrides_file(path: &Path) -> Result<Overrides> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GateError::Io(e)
        }
    })?;

    parse_overrides(&content, path)
}

/// Parse YAML or JSON content into [`Overrides`].
///
/// An empty file yields the defaults.
pub fn parse_overrides(content: &str, source_path: &Path) -> Result<Overrides> {
    if content.trim().is_empty() {
        return Ok(Overrides::default());
    }

    serde_yaml::from_str(content).map_err(|e| GateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load overrides with an optional explicit path.
///
/// If `config_override` is provided, only that file is read and it must
/// exist. Otherwise the project directory is searched and a missing file
/// means the defaults.
pub fn load_overrides(project_root: &Path, config_override: Option<&Path>) -> Result<Overrides> {
    if let Some(path) = config_override {
        return load_overrides_file(path);
    }

    match find_config_file(project_root) {
        Some(path) => {
            tracing::debug!("Loading overrides from {}", path.display());
            load_overrides_file(&path)
        }
        None => Ok(Overrides::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn finds_yaml_before_json() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("browsegate.json"), "{}").unwrap();
        fs::write(temp.path().join("browsegate.yml"), "debug: true").unwrap();

        let found = find_config_file(temp.path()).unwrap();
        assert!(found.ends_with("browsegate.yml"));
    }

    #[test]
    fn finds_json_when_no_yaml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("browsegate.json"), "{}").unwrap();

        let found = find_config_file(temp.path()).unwrap();
        assert!(found.ends_with("browsegate.json"));
    }

    #[test]
    fn missing_project_file_means_defaults() {
        let temp = TempDir::new().unwrap();
        let overrides = load_overrides(temp.path(), None).unwrap();
        assert_eq!(overrides, Overrides::default());
    }

    #[test]
    fn discovered_file_is_loaded() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("browsegate.yml"),
            "features:\n  history: false\n",
        )
        .unwrap();

        let overrides = load_overrides(temp.path(), None).unwrap();
        assert_eq!(overrides.features.get("history"), Some(&false));
    }

    #[test]
    fn explicit_path_wins_over_discovery() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("browsegate.yml"), "debug: true").unwrap();
        let explicit = temp.path().join("other.json");
        fs::write(&explicit, r#"{"forceWarning": true}"#).unwrap();

        let overrides = load_overrides(temp.path(), Some(&explicit)).unwrap();
        assert!(overrides.force_warning);
        assert!(!overrides.debug);
    }

    #[test]
    fn explicit_missing_path_is_not_found() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let result = load_overrides(temp.path(), Some(&missing));
        assert!(matches!(result, Err(GateError::ConfigNotFound { .. })));
    }

    #[test]
    fn invalid_content_is_parse_error() {
        let result = parse_overrides("features: [1, 2", Path::new("browsegate.yml"));
        assert!(matches!(result, Err(GateError::ConfigParseError { .. })));
    }

    #[test]
    fn empty_content_is_default() {
        let overrides = parse_overrides("  \n", Path::new("browsegate.yml")).unwrap();
        assert_eq!(overrides, Overrides::default());
    }
}
