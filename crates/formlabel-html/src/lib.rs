//! formlabel HTML Parser
//!
//! HTML5 parsing built on html5ever, converted into the arena DOM, plus
//! markup serialization for report snippets.

mod parser;
mod serializer;

pub use formlabel_dom::{Document, DomTree, NodeId};
pub use parser::HtmlParser;
pub use serializer::HtmlSerializer;

/// Parse an HTML string into a Document.
///
/// Never fails: html5ever recovers from unclosed tags, stray end tags and
/// missing structure the same way a browser would.
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}
