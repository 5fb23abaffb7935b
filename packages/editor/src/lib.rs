//! # Pagecraft Editor
//!
//! Core document editing engine for Pagecraft.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: elements + catalog + structured form │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session lifecycle + mutations       │
//! │  - Apply mutations with validation          │
//! │  - Selection + drag-and-drop state          │
//! │  - Bounded saved-layout store               │
//! │  - Persistence sink (memory / file)         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: publishable markup form      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The element sequence is source of truth**: order is render order
//! 2. **Single-owner, single-writer**: one live document per session,
//!    every operation completes before the next is processed
//! 3. **Total operations**: stale ids degrade to no-ops, indices clamp
//! 4. **Snapshots are values**: saving or loading a layout never
//!    aliases property storage with the live document
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{EditSession, Mutation};
//! use pagecraft_model::{Catalog, ElementKind};
//!
//! let mut session = EditSession::new("portfolio", Catalog::standard());
//!
//! // Drop a heading at the top of the page
//! session.apply(Mutation::InsertElement {
//!     kind: ElementKind::Heading,
//!     index: 0,
//! })?;
//! ```

mod drag;
mod errors;
mod inspector;
mod layout_store;
mod mutations;
mod session;
mod storage;

pub use drag::{DragController, DragPayload, DragState};
pub use errors::EditorError;
pub use inspector::{edit_field, fields_for, inspect, FieldInput, InspectorView, PropertyField};
pub use layout_store::{LayoutStore, SavedLayout, MAX_SAVED_LAYOUTS};
pub use mutations::{Direction, Mutation, MutationError, MutationOutcome};
pub use session::EditSession;
pub use storage::{FileSink, LayoutSink, MemorySink};

// Re-export common types for convenience
pub use pagecraft_model::{Catalog, Document, Element, ElementKind, PropValue};
