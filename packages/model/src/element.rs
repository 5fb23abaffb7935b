use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single configurable property value.
///
/// Property bags only ever hold strings and numbers (enumerated
/// properties like text alignment are strings constrained by the
/// property-editor schema), so an untagged enum round-trips cleanly
/// through JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Number(f64),
    Text(String),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            PropValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            PropValue::Text(_) => None,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Text(s) => write!(f, "{}", s),
            // Integral numbers print without a trailing ".0" so that
            // interpolated CSS values read "36px", not "36.0px".
            PropValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            PropValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        PropValue::Number(n as f64)
    }
}

/// The closed set of element kinds a document can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Heading,
    Paragraph,
    Button,
    Image,
    Divider,
    Card,
    Section,
    Badge,
}

impl ElementKind {
    /// All kinds, in palette order.
    pub const ALL: [ElementKind; 8] = [
        ElementKind::Heading,
        ElementKind::Paragraph,
        ElementKind::Button,
        ElementKind::Image,
        ElementKind::Divider,
        ElementKind::Card,
        ElementKind::Section,
        ElementKind::Badge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Heading => "heading",
            ElementKind::Paragraph => "paragraph",
            ElementKind::Button => "button",
            ElementKind::Image => "image",
            ElementKind::Divider => "divider",
            ElementKind::Card => "card",
            ElementKind::Section => "section",
            ElementKind::Badge => "badge",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One positioned, typed content unit within a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Stable, opaque identifier. Assigned at creation, never mutated.
    pub id: String,

    pub kind: ElementKind,

    /// Property bag. Valid keys and defaults are determined by `kind`.
    pub props: BTreeMap<String, PropValue>,

    /// Reserved for nested composition (section kind only). No
    /// operation populates this today.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(id: String, kind: ElementKind, props: BTreeMap<String, PropValue>) -> Self {
        Self {
            id,
            kind,
            props,
            children: Vec::new(),
        }
    }

    /// Property lookup rendered to a plain string ("" when absent).
    pub fn prop_str(&self, key: &str) -> String {
        self.props.get(key).map(|v| v.to_string()).unwrap_or_default()
    }
}

/// The ordered sequence of elements constituting one page.
///
/// Order is render/publish order. There is no separate root object;
/// the document IS the sequence, and it serializes as a plain JSON
/// array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Index of the element with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|el| el.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }
}
