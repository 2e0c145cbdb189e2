//! Error types for browsegate operations.
//!
//! This module defines [`GateError`], the error type used by the loaders,
//! the HTML document adapter, and the CLI, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Feature evaluation itself is total and never produces a `GateError`
//! - A missing capability detector is not an error: the gate fails open
//! - Use `anyhow::Error` (via `GateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for browsegate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// Overrides file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse an overrides file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Capability report file not found.
    #[error("Capability report not found: {path}")]
    ReportNotFound { path: PathBuf },

    /// Capability report is not a JSON object of feature results.
    #[error("Failed to parse capability report{}: {message}", display_path(.path))]
    ReportParseError {
        path: Option<PathBuf>,
        message: String,
    },

    /// The document has no `<body>` element to insert the warning into.
    #[error("Document has no <body> element{}", display_path(.path))]
    DocumentMissingBody { path: Option<PathBuf> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" at {}", p.display()),
        None => String::new(),
    }
}

/// Result type alias for browsegate operations.
pub type Result<T> = std::result::Result<T, GateError>;
