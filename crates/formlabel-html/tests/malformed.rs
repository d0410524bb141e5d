//! Malformed-markup tests for formlabel-html
//!
//! The analyzer relies on the parser never failing and on form controls
//! surviving broken structure.

use formlabel_html::{parse, HtmlParser, HtmlSerializer};

// ============================================================================
// EMPTY AND MINIMAL INPUT
// ============================================================================

#[test]
fn test_parse_empty_string() {
    let doc = parse("");
    // html5ever still synthesizes html/head/body
    assert!(doc.body().is_some());
    assert!(doc.elements_by_tag(&["input", "select", "textarea"]).is_empty());
}

#[test]
fn test_parse_text_only() {
    let doc = parse("just some words");
    let body = doc.body().expect("body");
    assert_eq!(doc.tree().text_content(body), "just some words");
}

#[test]
fn test_parse_only_doctype() {
    let doc = HtmlParser::new().parse("<!DOCTYPE html>");
    assert!(doc.tree().len() > 1);
}

// ============================================================================
// MALFORMED HTML
// ============================================================================

#[test]
fn test_unclosed_tags_keep_fields() {
    let doc = parse("<form><div><label>Name <input id=a><select id=b><option>x");
    let fields = doc.elements_by_tag(&["input", "select", "textarea"]);
    assert_eq!(fields.len(), 2);
}

#[test]
fn test_unclosed_label_still_encloses_field() {
    let doc = parse("<label>Email <input id=\"email\">");
    let input = doc.get_element_by_id("email").expect("input");
    let enclosing = doc
        .tree()
        .ancestors(input)
        .find(|&id| doc.tree().element(id).is_some_and(|e| e.is("label")));
    assert!(enclosing.is_some());
}

#[test]
fn test_stray_end_tags_ignored() {
    let doc = parse("</div></form><input id=\"x\"></label></p>");
    assert!(doc.get_element_by_id("x").is_some());
}

#[test]
fn test_unknown_elements_preserved() {
    let doc = parse("<my-widget><input id=\"inner\"></my-widget>");
    let input = doc.get_element_by_id("inner").expect("input");
    let parent = doc.tree().parent_element(input).expect("parent");
    assert_eq!(doc.tree().element(parent).map(|e| e.name.as_str()), Some("my-widget"));
}

#[test]
fn test_textarea_content_is_text() {
    let doc = parse("<textarea id=\"t\"><input id=\"fake\"></textarea>");
    assert!(doc.get_element_by_id("t").is_some());
    // RCDATA: markup inside textarea is not parsed as elements
    assert!(doc.get_element_by_id("fake").is_none());
}

#[test]
fn test_document_order_preserved() {
    let doc = parse(r#"<select id="s"></select><p><input id="i"></p><textarea id="t"></textarea>"#);
    let ids: Vec<&str> = doc
        .elements_by_tag(&["input", "select", "textarea"])
        .into_iter()
        .filter_map(|id| doc.tree().element(id).and_then(|e| e.id()))
        .collect();
    assert_eq!(ids, vec!["s", "i", "t"]);
}

// ============================================================================
// SERIALIZATION OF PARSED INPUT
// ============================================================================

#[test]
fn test_serialize_parsed_input() {
    let doc = parse(r#"<input type="text" id="name">"#);
    let input = doc.get_element_by_id("name").expect("input");
    assert_eq!(
        HtmlSerializer::new().serialize_outer(doc.tree(), input),
        r#"<input type="text" id="name">"#
    );
}

#[test]
fn test_entities_decoded_then_escaped() {
    let doc = parse("<p id=\"p\">&lt;b&gt; &amp; co</p>");
    let p = doc.get_element_by_id("p").expect("p");
    assert_eq!(doc.tree().text_content(p), "<b> & co");
    assert_eq!(
        HtmlSerializer::new().serialize_outer(doc.tree(), p),
        r#"<p id="p">&lt;b&gt; &amp; co</p>"#
    );
}
