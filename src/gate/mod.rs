//! Old-browser detection policy.
//!
//! - [`evaluate`] - [`FeatureGate`], which decides whether a browser is old
//! - [`run`] - The [`run`](run::run) entry point that ties configuration,
//!   evaluation and warning emission together

pub mod evaluate;
pub mod run;

pub use evaluate::{
    is_old_browser, should_warn, Assessment, FeatureCheck, FeatureGate, FeatureOutcome,
};
pub use run::{run, run_with_config, RunOutcome, Verdict};
