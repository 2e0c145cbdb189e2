//! The old-browser warning banner.

use crate::error::Result;

use super::dom::{Document, Element, Node};
use super::Notifier;

/// Class name on the banner container.
pub const BANNER_CLASS: &str = "browsehappy";

/// Where the banner link points.
pub const ADVISORY_URL: &str = "http://browsehappy.com/";

/// Label of the banner link.
pub const LINK_LABEL: &str = "modern desktop browser";

/// The link opens in a new browsing context.
pub const LINK_TARGET: &str = "_blank";

const LEAD_TEXT: &str = "It looks like you are using an old browser! To access this site as intended, please view on a smartphone or ";
const TRAILING_TEXT: &str = ".";

/// Build the banner: `div.browsehappy > p > (text, a, text)`.
pub fn warning_banner() -> Node {
    let link = Element::new("a")
        .with_attribute("href", ADVISORY_URL)
        .with_attribute("target", LINK_TARGET)
        .with_child(Node::text(LINK_LABEL));

    let paragraph = Element::new("p")
        .with_child(Node::text(LEAD_TEXT))
        .with_child(link)
        .with_child(Node::text(TRAILING_TEXT));

    Element::new("div")
        .with_attribute("class", BANNER_CLASS)
        .with_child(paragraph)
        .into()
}

/// Inserts [`warning_banner`] at the top of the document body.
#[derive(Debug, Clone, Copy, Default)]
pub struct BannerNotifier;

impl BannerNotifier {
    /// Create a banner notifier.
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for BannerNotifier {
    fn emit_warning(&mut self, document: &mut dyn Document) -> Result<()> {
        tracing::debug!("Inserting old browser warning");
        document.prepend_to_body(warning_banner())
    }
}
