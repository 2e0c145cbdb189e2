//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use browsegate::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking 5 required features");
//! ui.warning("history was not tested");
//!
//! assert!(ui.has_message("Checking 5 required features"));
//! assert!(ui.has_warning("history was not tested"));
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    outputs: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get captured data output.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a success containing `msg` was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a warning containing `msg` was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// All data output joined by newlines.
    pub fn output_text(&self) -> String {
        self.outputs.join("\n")
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn output(&mut self, data: &str) {
        self.outputs.push(data.to_string());
    }
}
