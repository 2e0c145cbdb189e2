//! Warning emission.
//!
//! The policy core never touches a page directly. When a warning is due it
//! hands a [`Document`] to a [`Notifier`], which builds the banner and
//! inserts it at the top of the body.
//!
//! - [`dom`] - Node model and the in-memory [`DomTree`]
//! - [`html`] - [`HtmlDocument`], which patches HTML source text
//! - [`banner`] - The banner markup and [`BannerNotifier`]
//! - [`mock`] - [`RecordingNotifier`] for tests

pub mod banner;
pub mod dom;
pub mod html;
pub mod mock;

pub use banner::{
    warning_banner, BannerNotifier, ADVISORY_URL, BANNER_CLASS, LINK_LABEL, LINK_TARGET,
};
pub use dom::{Document, DomTree, Element, Node};
pub use html::HtmlDocument;
pub use mock::RecordingNotifier;

use crate::error::Result;

/// Presents the old-browser warning on a document.
pub trait Notifier {
    /// Insert the warning into `document`.
    ///
    /// Every call inserts another warning; nothing is de-duplicated.
    fn emit_warning(&mut self, document: &mut dyn Document) -> Result<()>;
}
