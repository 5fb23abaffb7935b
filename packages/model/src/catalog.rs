//! Element-kind catalog: the read-only registry each new element is
//! instantiated from.
//!
//! The catalog is an explicitly constructed value, not a process-wide
//! singleton, so tests can inject their own. Default property bags are
//! deep-copied on every instantiation; mutating one element never
//! affects the catalog or any other element.

use crate::element::{ElementKind, PropValue};
use std::collections::BTreeMap;

/// One palette entry: display label, icon glyph, and the default
/// property bag used when instantiating a new element of this kind.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub kind: ElementKind,
    pub label: &'static str,
    pub icon: &'static str,
    defaults: BTreeMap<String, PropValue>,
}

impl CatalogEntry {
    fn new(
        kind: ElementKind,
        label: &'static str,
        icon: &'static str,
        defaults: Vec<(&str, PropValue)>,
    ) -> Self {
        Self {
            kind,
            label,
            icon,
            defaults: defaults
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }

    /// Default property bag for this kind.
    pub fn defaults(&self) -> &BTreeMap<String, PropValue> {
        &self.defaults
    }
}

/// Read-only registry of all element kinds.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The standard palette: all eight kinds with their stock defaults.
    pub fn standard() -> Self {
        fn s(v: &str) -> PropValue {
            PropValue::from(v)
        }
        fn n(v: f64) -> PropValue {
            PropValue::Number(v)
        }

        Self {
            entries: vec![
                CatalogEntry::new(
                    ElementKind::Heading,
                    "Heading",
                    "H1",
                    vec![
                        ("text", s("Your Heading Here")),
                        ("level", s("h1")),
                        ("color", s("#e8edf5")),
                        ("fontSize", n(36.0)),
                        ("fontWeight", s("bold")),
                        ("textAlign", s("left")),
                    ],
                ),
                CatalogEntry::new(
                    ElementKind::Paragraph,
                    "Paragraph",
                    "¶",
                    vec![
                        (
                            "text",
                            s("Add your paragraph text here. Click to edit this content."),
                        ),
                        ("color", s("#8a9bb5")),
                        ("fontSize", n(16.0)),
                        ("textAlign", s("left")),
                        ("lineHeight", n(1.7)),
                    ],
                ),
                CatalogEntry::new(
                    ElementKind::Button,
                    "Button",
                    "BTN",
                    vec![
                        ("text", s("Click Me")),
                        ("bg", s("#3b82f6")),
                        ("color", s("#ffffff")),
                        ("fontSize", n(14.0)),
                        ("borderRadius", n(8.0)),
                        ("padding", s("12px 24px")),
                        ("href", s("#")),
                    ],
                ),
                CatalogEntry::new(
                    ElementKind::Image,
                    "Image",
                    "IMG",
                    vec![
                        ("src", s("https://picsum.photos/seed/portfolio/600/300")),
                        ("alt", s("Image")),
                        ("width", s("100%")),
                        ("height", n(200.0)),
                        ("borderRadius", n(8.0)),
                        ("objectFit", s("cover")),
                    ],
                ),
                CatalogEntry::new(
                    ElementKind::Divider,
                    "Divider",
                    "—",
                    vec![
                        ("color", s("#1f2d40")),
                        ("thickness", n(1.0)),
                        ("margin", n(16.0)),
                    ],
                ),
                CatalogEntry::new(
                    ElementKind::Card,
                    "Card",
                    "□",
                    vec![
                        ("title", s("Card Title")),
                        ("body", s("Card content goes here.")),
                        ("bg", s("#111827")),
                        ("borderColor", s("#1f2d40")),
                        ("borderRadius", n(12.0)),
                        ("padding", n(24.0)),
                        ("titleColor", s("#e8edf5")),
                        ("bodyColor", s("#8a9bb5")),
                    ],
                ),
                CatalogEntry::new(
                    ElementKind::Section,
                    "Section",
                    "[ ]",
                    vec![
                        ("bg", s("#0d1420")),
                        ("padding", n(40.0)),
                        ("borderRadius", n(12.0)),
                    ],
                ),
                CatalogEntry::new(
                    ElementKind::Badge,
                    "Badge",
                    "⬭",
                    vec![
                        ("text", s("New")),
                        ("bg", s("rgba(59,130,246,0.15)")),
                        ("color", s("#60a5fa")),
                        ("borderColor", s("#3b82f6")),
                        ("fontSize", n(12.0)),
                        ("borderRadius", n(999.0)),
                    ],
                ),
            ],
        }
    }

    /// All entries, in palette order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Lookup by kind. `None` only occurs for a catalog that was
    /// constructed without the kind, which is a programming error in
    /// the caller, not a user-facing condition.
    pub fn entry(&self, kind: ElementKind) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    /// Deep copy of the default property bag for a kind.
    pub fn default_props(&self, kind: ElementKind) -> Option<BTreeMap<String, PropValue>> {
        self.entry(kind).map(|e| e.defaults.clone())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
