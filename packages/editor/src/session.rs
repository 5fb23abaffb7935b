//! # Edit Session
//!
//! One session owns exactly one live document, mutated only through
//! [`Mutation`]s, plus the ephemeral editing state around it: the
//! current selection and a version counter.
//!
//! The session is single-owner, single-writer: every operation runs to
//! completion before the next user-triggered event is processed, so no
//! locking discipline is required.

use crate::{EditorError, Mutation, MutationOutcome, SavedLayout};
use pagecraft_model::{get_page_id, Catalog, Document, Element, IdGenerator};

/// An editing session over one live document.
#[derive(Debug)]
pub struct EditSession {
    /// The live document
    document: Document,

    /// Injected kind registry (read-only)
    catalog: Catalog,

    /// Session-scoped id generator
    ids: IdGenerator,

    /// Current version number (increments on each applied mutation)
    pub version: u64,

    /// At most one selected element id; ephemeral, never persisted
    selection: Option<String>,
}

impl EditSession {
    /// Create an empty session for a named page.
    pub fn new(page_name: &str, catalog: Catalog) -> Self {
        Self {
            document: Document::new(),
            catalog,
            ids: IdGenerator::new(page_name),
            version: 0,
            selection: None,
        }
    }

    /// Create a session over an existing document.
    ///
    /// The id generator resumes past any ids in the document that were
    /// minted under this page's seed, so reopening a page under its
    /// original name cannot hand out an id the document already holds.
    pub fn with_document(page_name: &str, catalog: Catalog, document: Document) -> Self {
        let seed = get_page_id(page_name);
        let prefix = format!("{}-", seed);
        let count = document
            .iter()
            .filter_map(|el| el.id.strip_prefix(&prefix))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .unwrap_or(0);

        Self {
            document,
            catalog,
            ids: IdGenerator::resume(seed, count),
            version: 0,
            selection: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Apply a mutation, tracking version and selection side effects.
    ///
    /// Insert and duplicate select the created element; removing the
    /// selected element or clearing the document drops the selection.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationOutcome, EditorError> {
        let outcome = mutation.apply(&mut self.document, &self.catalog, &mut self.ids)?;

        if outcome.changed {
            self.version += 1;
        }

        if let Some(created) = &outcome.created {
            self.selection = Some(created.clone());
        } else if matches!(mutation, Mutation::Clear) {
            self.selection = None;
        } else if matches!(&self.selection, Some(id) if !self.document.contains(id)) {
            self.selection = None;
        }

        Ok(outcome)
    }

    /// Select an element. Ids not present in the document are ignored;
    /// the UI only hands back ids it got from the model.
    pub fn select(&mut self, id: &str) {
        if self.document.contains(id) {
            self.selection = Some(id.to_string());
        }
    }

    pub fn deselect(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.as_deref().and_then(|id| self.document.get(id))
    }

    /// Deep-copy a saved layout back into the live document.
    ///
    /// Further edits must never retroactively mutate the snapshot, so
    /// the stored property storage is never aliased.
    pub fn load_layout(&mut self, layout: &SavedLayout) {
        self.document = layout.document.clone();
        self.selection = None;
        self.version += 1;
    }
}
