use crate::{compile_element, compile_to_html, CompileOptions};
use pagecraft_model::{Catalog, Document, Element, ElementKind, IdGenerator, PropValue};

fn element(kind: ElementKind, ids: &mut IdGenerator) -> Element {
    let catalog = Catalog::standard();
    Element::new(ids.new_id(), kind, catalog.default_props(kind).unwrap())
}

fn document(kinds: &[ElementKind]) -> Document {
    let mut ids = IdGenerator::new("compiler-test");
    Document {
        elements: kinds.iter().map(|k| element(*k, &mut ids)).collect(),
    }
}

#[test]
fn test_compile_standalone_document() {
    let doc = document(&[ElementKind::Heading, ElementKind::Paragraph]);
    let html = compile_to_html(&doc, CompileOptions::default());

    println!("Generated HTML:\n{}", html);

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<title>Exported Page</title>"));
    assert!(html.contains("<div class=\"page\">"));
    // The page renders without the editor: styling is embedded.
    assert!(html.contains("<style>"));
    assert!(html.contains(".page { max-width: 800px;"));
}

#[test]
fn test_button_renders_as_styled_anchor() {
    let mut ids = IdGenerator::new("compiler-test");
    let mut el = element(ElementKind::Button, &mut ids);
    el.props
        .insert("text".to_string(), PropValue::from("Click Me"));
    el.props.insert("href".to_string(), PropValue::from("#"));
    el.props
        .insert("bg".to_string(), PropValue::from("#3b82f6"));

    let markup = compile_element(&el);

    assert!(markup.starts_with("<a "));
    assert!(markup.contains("href=\"#\""));
    assert!(markup.contains(">Click Me</a>"));
    assert!(markup.contains("background:#3b82f6"));
}

#[test]
fn test_heading_uses_declared_level() {
    let mut ids = IdGenerator::new("compiler-test");
    let mut el = element(ElementKind::Heading, &mut ids);
    el.props.insert("level".to_string(), PropValue::from("h3"));

    let markup = compile_element(&el);

    assert!(markup.starts_with("<h3 "));
    assert!(markup.ends_with("</h3>"));
    assert!(markup.contains("font-size:36px"));
}

#[test]
fn test_heading_unknown_level_falls_back() {
    let mut ids = IdGenerator::new("compiler-test");
    let mut el = element(ElementKind::Heading, &mut ids);
    el.props
        .insert("level".to_string(), PropValue::from("<script>"));

    let markup = compile_element(&el);

    assert!(markup.starts_with("<h2 "));
}

#[test]
fn test_divider_renders_horizontal_rule() {
    let doc = document(&[ElementKind::Divider]);
    let markup = compile_element(&doc.elements[0]);

    assert!(markup.starts_with("<hr "));
    assert!(markup.contains("border-top-width:1px"));
    assert!(markup.contains("margin:16px 0"));
}

#[test]
fn test_section_renders_container_only() {
    let doc = document(&[ElementKind::Section]);
    let markup = compile_element(&doc.elements[0]);

    // Children are reserved, not rendered.
    assert!(markup.contains("padding:40px"));
    assert!(markup.contains("></div>"));
}

#[test]
fn test_text_content_is_escaped() {
    let mut ids = IdGenerator::new("compiler-test");
    let mut el = element(ElementKind::Paragraph, &mut ids);
    el.props.insert(
        "text".to_string(),
        PropValue::from("Fish & <chips> \"daily\""),
    );

    let markup = compile_element(&el);

    assert!(markup.contains("Fish &amp; &lt;chips&gt; &quot;daily&quot;"));
    assert!(!markup.contains("<chips>"));
}

#[test]
fn test_export_reflects_live_values() {
    let mut doc = document(&[ElementKind::Badge]);

    let before = compile_to_html(&doc, CompileOptions::default());
    assert!(before.contains(">New</span>"));

    doc.elements[0]
        .props
        .insert("text".to_string(), PropValue::from("Updated"));

    let after = compile_to_html(&doc, CompileOptions::default());
    assert!(after.contains(">Updated</span>"));
    assert!(!after.contains(">New</span>"));
}

#[test]
fn test_elements_appear_in_document_order() {
    let doc = document(&[
        ElementKind::Badge,
        ElementKind::Heading,
        ElementKind::Divider,
    ]);
    let html = compile_to_html(&doc, CompileOptions::default());

    let badge = html.find("<span").unwrap();
    let heading = html.find("<h1").unwrap();
    let divider = html.find("<hr").unwrap();
    assert!(badge < heading && heading < divider);
}

#[test]
fn test_compact_output_without_pretty() {
    let doc = document(&[ElementKind::Heading]);
    let options = CompileOptions {
        pretty: false,
        ..Default::default()
    };

    let html = compile_to_html(&doc, options);
    assert!(!html.contains('\n'));
}
