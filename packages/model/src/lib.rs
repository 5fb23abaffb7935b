//! # Pagecraft Model
//!
//! The page document model: an ordered sequence of typed, uniquely
//! identified elements, each carrying a property bag.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document + element catalog           │
//! │  - Element / kind / property types          │
//! │  - Read-only kind catalog with defaults     │
//! │  - Id generation                            │
//! │  - Lossless structured (JSON) form          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations, sessions, saved layouts  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: publishable markup form      │
//! └─────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod element;
pub mod id_generator;
pub mod serializer;

pub use catalog::{Catalog, CatalogEntry};
pub use element::{Document, Element, ElementKind, PropValue};
pub use id_generator::{get_page_id, IdGenerator};
pub use serializer::{deserialize_document, serialize_document, DocumentError};
