//! Capability reports and feature alternatives.
//!
//! Feature detection itself happens elsewhere (in the browser, usually
//! through Modernizr). This module models its results:
//!
//! - [`report`] - The [`CapabilitySource`] collaborator and the JSON-backed
//!   [`CapabilityReport`]
//! - [`alternatives`] - Groups of features that can stand in for each other
//! - [`mock`] - A recording fake for tests

pub mod alternatives;
pub mod mock;
pub mod report;

pub use alternatives::{AlternativeGroups, BUILTIN_ALTERNATIVE_GROUPS};
pub use mock::MockCapabilities;
pub use report::{CapabilityReport, CapabilitySource, FeatureState};
