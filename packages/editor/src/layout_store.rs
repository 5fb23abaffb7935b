//! # Saved-Layout Store
//!
//! A bounded, most-recent-first list of named document snapshots.
//! Saving deep-copies the live document; a snapshot is immutable from
//! the moment it is taken, so later edits to the live document never
//! leak into it.

use chrono::{DateTime, Utc};
use pagecraft_model::Document;
use serde::{Deserialize, Serialize};

/// Snapshots kept per store before the oldest is evicted.
pub const MAX_SAVED_LAYOUTS: usize = 10;

/// A named, timestamped snapshot of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLayout {
    pub name: String,
    pub saved_at: DateTime<Utc>,
    pub document: Document,
}

/// Bounded most-recent-first snapshot list.
#[derive(Debug)]
pub struct LayoutStore {
    layouts: Vec<SavedLayout>,
    capacity: usize,

    /// Total saves ever taken; names stay unique across evictions
    save_count: u64,
}

impl LayoutStore {
    pub fn new() -> Self {
        Self::with_capacity(MAX_SAVED_LAYOUTS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layouts: Vec::new(),
            capacity,
            save_count: 0,
        }
    }

    /// Snapshot the given document, prepend it, and evict beyond
    /// capacity. Returns the stored snapshot.
    pub fn save(&mut self, document: &Document) -> &SavedLayout {
        self.save_count += 1;

        let layout = SavedLayout {
            name: format!("Layout {}", self.save_count),
            saved_at: Utc::now(),
            document: document.clone(),
        };

        self.layouts.insert(0, layout);
        self.layouts.truncate(self.capacity);

        &self.layouts[0]
    }

    /// Snapshots, most recent first.
    pub fn layouts(&self) -> &[SavedLayout] {
        &self.layouts
    }

    pub fn get(&self, index: usize) -> Option<&SavedLayout> {
        self.layouts.get(index)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}
