//! # Property-Editor Contract
//!
//! For a selected element, the editable field set is determined purely
//! by its kind: one field per property key, each with an input type
//! matching the property's semantic type. No field exists for a kind
//! that doesn't declare that property. Editing a field issues a
//! single-key [`Mutation::UpdateProperties`].

use crate::{EditSession, Mutation};
use pagecraft_model::{Element, ElementKind, PropValue};
use std::collections::BTreeMap;

/// Input widget appropriate to a property's semantic type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text,
    MultilineText,
    Number { min: f64, max: f64 },
    Color,
    Choice { options: &'static [&'static str] },
}

/// One editable field: binds a property key to an input.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyField {
    pub key: &'static str,
    pub label: &'static str,
    pub input: FieldInput,
}

const fn text(key: &'static str, label: &'static str) -> PropertyField {
    PropertyField {
        key,
        label,
        input: FieldInput::Text,
    }
}

const fn multiline(key: &'static str, label: &'static str) -> PropertyField {
    PropertyField {
        key,
        label,
        input: FieldInput::MultilineText,
    }
}

const fn number(key: &'static str, label: &'static str, min: f64, max: f64) -> PropertyField {
    PropertyField {
        key,
        label,
        input: FieldInput::Number { min, max },
    }
}

const fn color(key: &'static str, label: &'static str) -> PropertyField {
    PropertyField {
        key,
        label,
        input: FieldInput::Color,
    }
}

const fn choice(
    key: &'static str,
    label: &'static str,
    options: &'static [&'static str],
) -> PropertyField {
    PropertyField {
        key,
        label,
        input: FieldInput::Choice { options },
    }
}

const HEADING_FIELDS: &[PropertyField] = &[
    text("text", "Text"),
    choice("level", "Tag", &["h1", "h2", "h3", "h4"]),
    number("fontSize", "Font Size", 12.0, 96.0),
    color("color", "Color"),
    choice("textAlign", "Align", &["left", "center", "right"]),
];

const PARAGRAPH_FIELDS: &[PropertyField] = &[
    multiline("text", "Text"),
    number("fontSize", "Font Size", 10.0, 48.0),
    color("color", "Color"),
    choice("textAlign", "Align", &["left", "center", "right"]),
    number("lineHeight", "Line Height", 1.0, 3.0),
];

const BUTTON_FIELDS: &[PropertyField] = &[
    text("text", "Label"),
    color("bg", "Background"),
    color("color", "Text Color"),
    number("borderRadius", "Border Radius", 0.0, 50.0),
    number("fontSize", "Font Size", 10.0, 32.0),
    text("href", "Link (href)"),
];

const IMAGE_FIELDS: &[PropertyField] = &[
    text("src", "URL"),
    text("alt", "Alt Text"),
    number("height", "Height (px)", 50.0, 800.0),
    number("borderRadius", "Border Radius", 0.0, 50.0),
    choice("objectFit", "Object Fit", &["cover", "contain", "fill", "none"]),
];

const DIVIDER_FIELDS: &[PropertyField] = &[
    color("color", "Color"),
    number("thickness", "Thickness (px)", 1.0, 10.0),
    number("margin", "Margin (px)", 0.0, 80.0),
];

const CARD_FIELDS: &[PropertyField] = &[
    text("title", "Title"),
    multiline("body", "Body"),
    color("bg", "Background"),
    color("borderColor", "Border Color"),
    number("borderRadius", "Border Radius", 0.0, 40.0),
    number("padding", "Padding", 8.0, 80.0),
];

const SECTION_FIELDS: &[PropertyField] = &[
    color("bg", "Background"),
    number("padding", "Padding", 0.0, 120.0),
    number("borderRadius", "Border Radius", 0.0, 40.0),
];

// Badge backgrounds are rgba() strings, so plain text input.
const BADGE_FIELDS: &[PropertyField] = &[
    text("text", "Text"),
    text("bg", "Background"),
    color("color", "Text Color"),
    color("borderColor", "Border Color"),
    number("borderRadius", "Border Radius", 0.0, 999.0),
];

/// Editable fields for a kind.
pub fn fields_for(kind: ElementKind) -> &'static [PropertyField] {
    match kind {
        ElementKind::Heading => HEADING_FIELDS,
        ElementKind::Paragraph => PARAGRAPH_FIELDS,
        ElementKind::Button => BUTTON_FIELDS,
        ElementKind::Image => IMAGE_FIELDS,
        ElementKind::Divider => DIVIDER_FIELDS,
        ElementKind::Card => CARD_FIELDS,
        ElementKind::Section => SECTION_FIELDS,
        ElementKind::Badge => BADGE_FIELDS,
    }
}

/// What the properties panel should show.
#[derive(Debug)]
pub enum InspectorView<'a> {
    /// Nothing selected. An empty state, not an error.
    Empty,

    /// The selected element and its editable fields.
    Element {
        element: &'a Element,
        fields: &'static [PropertyField],
    },
}

/// Resolve the current selection to an inspector view.
pub fn inspect(session: &EditSession) -> InspectorView<'_> {
    match session.selected_element() {
        Some(element) => InspectorView::Element {
            fields: fields_for(element.kind),
            element,
        },
        None => InspectorView::Empty,
    }
}

/// Build the single-key mutation a field edit produces.
pub fn edit_field(id: &str, key: &str, value: PropValue) -> Mutation {
    let mut props = BTreeMap::new();
    props.insert(key.to_string(), value);
    Mutation::UpdateProperties {
        id: id.to_string(),
        props,
    }
}
