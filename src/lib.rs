//! browsegate - Warn visitors on outdated browsers.
//!
//! browsegate takes the results of client-side feature detection (a
//! Modernizr-style capability report), checks them against a list of
//! required features, and inserts a "switch browsers" banner into the page
//! when a required feature is missing.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Required-feature configuration and overrides loading
//! - [`error`] - Error types and result aliases
//! - [`features`] - Capability reports and alternative feature groups
//! - [`gate`] - The old-browser policy and the [`run`](gate::run()) entry point
//! - [`notify`] - Warning banner and document insertion
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use browsegate::config::Overrides;
//! use browsegate::features::CapabilityReport;
//! use browsegate::gate::run;
//! use browsegate::notify::{BannerNotifier, HtmlDocument};
//!
//! let report = CapabilityReport::from_json_str(r#"{"csstransitions": false}"#).unwrap();
//! let mut page = HtmlDocument::new("<html><body><h1>Shop</h1></body></html>");
//!
//! let outcome = run(
//!     Some(&Overrides::new()),
//!     Some(&report),
//!     &mut BannerNotifier::new(),
//!     &mut page,
//! )
//! .unwrap();
//!
//! assert!(outcome.warned());
//! assert!(page.as_str().starts_with("<html><head></head><body><div class=\"browsehappy\">"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod gate;
pub mod notify;
pub mod ui;

pub use error::{GateError, Result};
