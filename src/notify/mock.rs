//! Recording notifier for testing.

use crate::error::Result;

use super::dom::Document;
use super::Notifier;

/// Notifier that counts emissions without touching the document.
///
/// # Example
///
/// ```
/// use browsegate::notify::{DomTree, Notifier, RecordingNotifier};
///
/// let mut notifier = RecordingNotifier::new();
/// let mut doc = DomTree::new();
/// notifier.emit_warning(&mut doc).unwrap();
/// assert_eq!(notifier.emitted(), 1);
/// assert!(doc.body().children.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    emitted: usize,
}

impl RecordingNotifier {
    /// Create a notifier with no recorded emissions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times a warning was emitted.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Whether any warning was emitted.
    pub fn was_emitted(&self) -> bool {
        self.emitted > 0
    }
}

impl Notifier for RecordingNotifier {
    fn emit_warning(&mut self, _document: &mut dyn Document) -> Result<()> {
        self.emitted += 1;
        Ok(())
    }
}
