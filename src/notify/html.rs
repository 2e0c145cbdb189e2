//! HTML source documents.
//!
//! `HtmlDocument` wraps page source text. Prepending to the body parses the
//! page with html5ever, so the body is the one a browser would build. A
//! `<body>` inside a comment or script is never mistaken for it, and a page
//! that omits the tag still gets one. The modified tree is serialized back
//! into the source; pages nothing was inserted into keep their original text.

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{namespace_url, ns, parse_document, Attribute, LocalName, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, Node as DomNode, NodeData, RcDom, SerializableHandle};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{GateError, Result};

use super::dom::{Document, Node};

/// An HTML page held as source text.
///
/// # Example
///
/// ```
/// use browsegate::notify::{Document, HtmlDocument, Node};
///
/// let mut doc = HtmlDocument::new("<html><body class=\"home\"><h1>Hi</h1></body></html>");
/// doc.prepend_to_body(Node::text("!")).unwrap();
/// assert_eq!(
///     doc.as_str(),
///     "<html><head></head><body class=\"home\">!<h1>Hi</h1></body></html>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    source: String,
    path: Option<PathBuf>,
}

impl HtmlDocument {
    /// Wrap HTML source text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            path: None,
        }
    }

    /// Read an HTML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Ok(Self {
            source,
            path: Some(path.to_path_buf()),
        })
    }

    /// Write the (possibly patched) source to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.source)?;
        Ok(())
    }

    /// The file this document was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current source text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Consume the document, returning its source text.
    pub fn into_string(self) -> String {
        self.source
    }

    /// Whether the parsed page has a body. Only frameset pages do not.
    pub fn has_body(&self) -> bool {
        find_body(&parse(&self.source)).is_some()
    }
}

impl Document for HtmlDocument {
    fn prepend_to_body(&mut self, node: Node) -> Result<()> {
        let dom = parse(&self.source);
        let body = find_body(&dom).ok_or_else(|| GateError::DocumentMissingBody {
            path: self.path.clone(),
        })?;

        insert_child(&body, 0, to_dom_node(&node));
        self.source = serialize_document(&dom)?;
        Ok(())
    }
}

fn parse(source: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default()).one(source)
}

fn find_body(dom: &RcDom) -> Option<Handle> {
    let html = child_element(&dom.document, "html")?;
    child_element(&html, "body")
}

fn child_element(parent: &Handle, tag: &str) -> Option<Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|child| match &child.data {
            NodeData::Element { name, .. } => name.ns == ns!(html) && name.local.as_ref() == tag,
            _ => false,
        })
        .cloned()
}

fn insert_child(parent: &Handle, index: usize, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().insert(index, child);
}

fn to_dom_node(node: &Node) -> Handle {
    match node {
        Node::Text(text) => DomNode::new(NodeData::Text {
            contents: RefCell::new(StrTendril::from_slice(text)),
        }),
        Node::Element(el) => {
            let attrs = el
                .attributes
                .iter()
                .map(|(name, value)| Attribute {
                    name: QualName::new(None, ns!(), LocalName::from(name.as_str())),
                    value: StrTendril::from_slice(value),
                })
                .collect();
            let handle = DomNode::new(NodeData::Element {
                name: QualName::new(None, ns!(html), LocalName::from(el.tag.as_str())),
                attrs: RefCell::new(attrs),
                template_contents: RefCell::new(None),
                mathml_annotation_xml_integration_point: false,
            });
            for (index, child) in el.children.iter().enumerate() {
                insert_child(&handle, index, to_dom_node(child));
            }
            handle
        }
    }
}

fn serialize_document(dom: &RcDom) -> Result<String> {
    let document: SerializableHandle = dom.document.clone().into();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };

    let mut out = Vec::new();
    serialize(&mut out, &document, opts)?;
    String::from_utf8(out).map_err(|e| GateError::from(anyhow::Error::from(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::dom::Element;
    use crate::notify::warning_banner;
    use tempfile::TempDir;

    #[test]
    fn inserts_as_first_body_child() {
        let mut doc = HtmlDocument::new("<html><body><p>x</p></body></html>");
        doc.prepend_to_body(Element::new("div").into()).unwrap();
        assert_eq!(
            doc.as_str(),
            "<html><head></head><body><div></div><p>x</p></body></html>"
        );
    }

    #[test]
    fn keeps_doctype_and_body_attributes() {
        let mut doc = HtmlDocument::new(
            "<!DOCTYPE html><HTML><BODY onload=\"init()\"><main></main></BODY></HTML>",
        );
        doc.prepend_to_body(Node::text("hi")).unwrap();
        assert_eq!(
            doc.as_str(),
            "<!DOCTYPE html><html><head></head><body onload=\"init()\">hi<main></main></body></html>"
        );
    }

    #[test]
    fn body_mentioned_in_a_comment_is_ignored() {
        let mut doc = HtmlDocument::new(
            "<html><head><!-- keep <body> lean --></head><body><p>x</p></body></html>",
        );
        doc.prepend_to_body(Node::text("BANNER")).unwrap();
        assert_eq!(
            doc.as_str(),
            "<html><head><!-- keep <body> lean --></head><body>BANNER<p>x</p></body></html>"
        );
    }

    #[test]
    fn body_mentioned_in_a_script_is_ignored() {
        let mut doc = HtmlDocument::new(
            "<html><head><script>var tag = '<body>';</script></head><body><p>x</p></body></html>",
        );
        doc.prepend_to_body(Node::text("BANNER")).unwrap();
        assert!(doc
            .as_str()
            .contains("<script>var tag = '<body>';</script></head><body>BANNER<p>x</p>"));
    }

    #[test]
    fn implied_body_receives_the_node() {
        let mut doc = HtmlDocument::new("<!doctype html><title>t</title><p>hi</p>");
        assert!(doc.has_body());
        doc.prepend_to_body(Node::text("BANNER")).unwrap();
        assert_eq!(
            doc.as_str(),
            "<!DOCTYPE html><html><head><title>t</title></head><body>BANNER<p>hi</p></body></html>"
        );
    }

    #[test]
    fn does_not_mistake_tbody_for_body() {
        let mut doc = HtmlDocument::new("<table><tbody><tr><td>1</td></tr></tbody></table>");
        doc.prepend_to_body(Node::text("x")).unwrap();
        assert!(doc.as_str().contains("<body>x<table><tbody>"));
    }

    #[test]
    fn banner_markup_survives_serialization() {
        let mut doc = HtmlDocument::new("<body></body>");
        doc.prepend_to_body(warning_banner()).unwrap();
        assert_eq!(
            doc.as_str(),
            format!(
                "<html><head></head><body>{}</body></html>",
                warning_banner().to_html()
            )
        );
    }

    #[test]
    fn frameset_page_is_error() {
        let source = "<html><frameset><frame src=\"a.html\"></frameset></html>";
        let mut doc = HtmlDocument::new(source);
        assert!(!doc.has_body());

        let result = doc.prepend_to_body(Node::text("x"));
        assert!(matches!(
            result,
            Err(GateError::DocumentMissingBody { path: None })
        ));
        assert_eq!(doc.as_str(), source);
    }

    #[test]
    fn repeated_inserts_stack_at_the_top() {
        let mut doc = HtmlDocument::new("<body>end</body>");
        doc.prepend_to_body(Node::text("b")).unwrap();
        doc.prepend_to_body(Node::text("a")).unwrap();
        assert_eq!(doc.as_str(), "<html><head></head><body>abend</body></html>");
    }

    #[test]
    fn untouched_page_keeps_original_text() {
        let source = "<!doctype html>\n<BODY>\n  <p>x</p>\n";
        let doc = HtmlDocument::new(source);
        assert!(doc.has_body());
        assert_eq!(doc.into_string(), source);
    }

    #[test]
    fn load_and_save_round_trip_through_files() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("index.html");
        fs::write(&input, "<body></body>").unwrap();

        let mut doc = HtmlDocument::load(&input).unwrap();
        assert_eq!(doc.path(), Some(input.as_path()));
        doc.prepend_to_body(Node::text("x")).unwrap();

        let output = temp.path().join("out.html");
        doc.save(&output).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "<html><head></head><body>x</body></html>"
        );
    }

    #[test]
    fn missing_body_error_carries_path() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("frames.html");
        fs::write(&input, "<frameset></frameset>").unwrap();

        let mut doc = HtmlDocument::load(&input).unwrap();
        match doc.prepend_to_body(Node::text("x")) {
            Err(GateError::DocumentMissingBody { path: Some(p) }) => assert_eq!(p, input),
            other => panic!("Expected DocumentMissingBody, got {:?}", other),
        }
    }
}
