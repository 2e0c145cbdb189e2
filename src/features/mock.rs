//! Recording capability source for testing.
//!
//! `MockCapabilities` implements [`CapabilitySource`] and records every
//! lookup so tests can assert which features the evaluator queried, and in
//! what order. A feature can be poisoned so that querying it panics.
//!
//! # Example
//!
//! ```
//! use browsegate::features::{CapabilitySource, MockCapabilities};
//!
//! let caps = MockCapabilities::new()
//!     .supported("flexbox")
//!     .unsupported("history");
//!
//! assert_eq!(caps.get("flexbox"), Some(true));
//! assert_eq!(caps.get("webgl"), None);
//! assert_eq!(caps.lookups(), ["flexbox", "webgl"]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::report::CapabilitySource;

/// Mock capability source for testing.
#[derive(Debug, Default)]
pub struct MockCapabilities {
    results: HashMap<String, bool>,
    poisoned: HashSet<String>,
    lookups: RefCell<Vec<String>>,
}

impl MockCapabilities {
    /// Create a mock where every feature is untested.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `feature` as supported.
    pub fn supported(mut self, feature: &str) -> Self {
        self.results.insert(feature.to_string(), true);
        self
    }

    /// Mark `feature` as tested and unsupported.
    pub fn unsupported(mut self, feature: &str) -> Self {
        self.results.insert(feature.to_string(), false);
        self
    }

    /// Make any lookup of `feature` panic.
    pub fn poison(mut self, feature: &str) -> Self {
        self.poisoned.insert(feature.to_string());
        self
    }

    /// Features looked up so far, in call order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }

    /// Whether `feature` was looked up at least once.
    pub fn was_queried(&self, feature: &str) -> bool {
        self.lookups.borrow().iter().any(|f| f == feature)
    }

    /// Forget recorded lookups.
    pub fn clear(&self) {
        self.lookups.borrow_mut().clear();
    }
}

impl CapabilitySource for MockCapabilities {
    fn get(&self, feature: &str) -> Option<bool> {
        if self.poisoned.contains(feature) {
            panic!("poisoned feature '{}' was queried", feature);
        }
        self.lookups.borrow_mut().push(feature.to_string());
        self.results.get(feature).copied()
    }
}
