//! Gate configuration and overrides loading.
//!
//! - Overrides file schema in [`schema`]
//! - File discovery and loading in [`loader`]
//! - The evaluated configuration in [`gate`]
//!
//! # Example
//!
//! ```
//! use browsegate::config::{load_overrides, GateConfig};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("browsegate.yml"), "features:\n  webgl: true\n").unwrap();
//!
//! let overrides = load_overrides(temp.path(), None).unwrap();
//! let config = GateConfig::from_overrides(&overrides);
//! assert!(config.requires("webgl"));
//! ```

pub mod gate;
pub mod loader;
pub mod schema;

pub use gate::{GateConfig, DEFAULT_REQUIRED_FEATURES};
pub use loader::{
    find_config_file, load_overrides, load_overrides_file, parse_overrides, CONFIG_FILE_NAMES,
};
pub use schema::{overrides_json_schema, Overrides};
