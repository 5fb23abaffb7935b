//! # Document Mutations
//!
//! High-level semantic operations on the element sequence.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation represents one user gesture
//! 2. **Total over well-formed input**: operations keyed by an id that
//!    no longer exists are no-ops, since the UI only ever issues ids it
//!    obtained from the model itself
//! 3. **Clamped**: out-of-range indices resolve to the nearest valid
//!    index instead of erroring
//!
//! ## Mutation Semantics
//!
//! ### InsertElement
//! - Deep-copies the kind's catalog defaults, assigns a fresh id
//! - Index clamped to [0, len]
//!
//! ### MoveToIndex
//! - Removes the element first, then clamps the target against the
//!   post-removal length. Moving the first of three elements to "the
//!   end" places it last, not second-to-last. This matches the
//!   drop-target semantics of the drag protocol.
//!
//! ### UpdateProperties
//! - Shallow merge: keys present overwrite, keys absent are untouched

use pagecraft_model::{Catalog, Document, Element, ElementKind, IdGenerator, PropValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Direction for an adjacent swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Instantiate a new element from the catalog at index
    InsertElement {
        kind: ElementKind,
        index: usize,
    },

    /// Remove an element (no-op if the id is absent)
    RemoveElement {
        id: String,
    },

    /// Deep-copy an element with a fresh id, inserted right after the
    /// original
    DuplicateElement {
        id: String,
    },

    /// Swap an element with its immediate neighbor
    MoveAdjacent {
        id: String,
        direction: Direction,
    },

    /// Relocate an element to an index computed against the sequence
    /// after removal
    MoveToIndex {
        id: String,
        index: usize,
    },

    /// Shallow-merge a partial property bag into an element
    UpdateProperties {
        id: String,
        props: BTreeMap<String, PropValue>,
    },

    /// Empty the document
    Clear,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Kind not in catalog: {0}")]
    UnknownKind(ElementKind),
}

/// Result of applying a mutation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationOutcome {
    /// Id of the element this mutation created, if any
    pub created: Option<String>,

    /// Whether the document actually changed
    pub changed: bool,
}

impl MutationOutcome {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            created: None,
            changed: true,
        }
    }

    fn created(id: String) -> Self {
        Self {
            created: Some(id),
            changed: true,
        }
    }
}

impl Mutation {
    /// Apply mutation to a document with validation
    pub fn apply(
        &self,
        doc: &mut Document,
        catalog: &Catalog,
        ids: &mut IdGenerator,
    ) -> Result<MutationOutcome, MutationError> {
        // Validate first
        self.validate(doc, catalog)?;

        match self {
            Mutation::InsertElement { kind, index } => {
                Self::apply_insert(doc, catalog, ids, *kind, *index)
            }

            Mutation::RemoveElement { id } => Ok(Self::apply_remove(doc, id)),

            Mutation::DuplicateElement { id } => Self::apply_duplicate(doc, ids, id),

            Mutation::MoveAdjacent { id, direction } => {
                Ok(Self::apply_move_adjacent(doc, id, *direction))
            }

            Mutation::MoveToIndex { id, index } => Ok(Self::apply_move_to_index(doc, id, *index)),

            Mutation::UpdateProperties { id, props } => {
                Ok(Self::apply_update_props(doc, id, props))
            }

            Mutation::Clear => {
                let changed = !doc.is_empty();
                doc.elements.clear();
                Ok(if changed {
                    MutationOutcome::changed()
                } else {
                    MutationOutcome::unchanged()
                })
            }
        }
    }

    fn apply_insert(
        doc: &mut Document,
        catalog: &Catalog,
        ids: &mut IdGenerator,
        kind: ElementKind,
        index: usize,
    ) -> Result<MutationOutcome, MutationError> {
        let props = catalog
            .default_props(kind)
            .ok_or(MutationError::UnknownKind(kind))?;

        let element = Element::new(ids.new_id(), kind, props);
        let id = element.id.clone();

        let insert_index = index.min(doc.len());
        doc.elements.insert(insert_index, element);

        Ok(MutationOutcome::created(id))
    }

    fn apply_remove(doc: &mut Document, id: &str) -> MutationOutcome {
        match doc.position(id) {
            Some(index) => {
                doc.elements.remove(index);
                MutationOutcome::changed()
            }
            None => MutationOutcome::unchanged(),
        }
    }

    fn apply_duplicate(
        doc: &mut Document,
        ids: &mut IdGenerator,
        id: &str,
    ) -> Result<MutationOutcome, MutationError> {
        let index = doc
            .position(id)
            .ok_or_else(|| MutationError::ElementNotFound(id.to_string()))?;

        // Clone is a structural deep copy: the duplicate shares no
        // property storage with the original.
        let mut copy = doc.elements[index].clone();
        copy.id = ids.new_id();
        let new_id = copy.id.clone();

        doc.elements.insert(index + 1, copy);

        Ok(MutationOutcome::created(new_id))
    }

    fn apply_move_adjacent(doc: &mut Document, id: &str, direction: Direction) -> MutationOutcome {
        let Some(index) = doc.position(id) else {
            return MutationOutcome::unchanged();
        };

        let target = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < doc.len() => index + 1,
            // Already at the boundary
            _ => return MutationOutcome::unchanged(),
        };

        doc.elements.swap(index, target);
        MutationOutcome::changed()
    }

    fn apply_move_to_index(doc: &mut Document, id: &str, index: usize) -> MutationOutcome {
        let Some(from) = doc.position(id) else {
            return MutationOutcome::unchanged();
        };

        let element = doc.elements.remove(from);
        // Target index is interpreted against the post-removal sequence.
        let to = index.min(doc.len());
        doc.elements.insert(to, element);

        MutationOutcome::changed()
    }

    fn apply_update_props(
        doc: &mut Document,
        id: &str,
        props: &BTreeMap<String, PropValue>,
    ) -> MutationOutcome {
        let Some(element) = doc.get_mut(id) else {
            return MutationOutcome::unchanged();
        };

        if props.is_empty() {
            return MutationOutcome::unchanged();
        }

        // Shallow merge: present keys overwrite, absent keys survive.
        for (key, value) in props {
            element.props.insert(key.clone(), value.clone());
        }

        MutationOutcome::changed()
    }

    /// Validate without applying.
    ///
    /// Only two conditions are actual errors: duplicating an id that is
    /// not in the document, and instantiating a kind the catalog does
    /// not know. Everything else degrades to a no-op on apply.
    pub fn validate(&self, doc: &Document, catalog: &Catalog) -> Result<(), MutationError> {
        match self {
            Mutation::InsertElement { kind, .. } => {
                catalog
                    .entry(*kind)
                    .ok_or(MutationError::UnknownKind(*kind))?;
                Ok(())
            }

            Mutation::DuplicateElement { id } => {
                if doc.contains(id) {
                    Ok(())
                } else {
                    Err(MutationError::ElementNotFound(id.clone()))
                }
            }

            Mutation::RemoveElement { .. }
            | Mutation::MoveAdjacent { .. }
            | Mutation::MoveToIndex { .. }
            | Mutation::UpdateProperties { .. }
            | Mutation::Clear => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::MoveToIndex {
            id: "abc-1".to_string(),
            index: 2,
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_validation_rejects_unknown_duplicate_target() {
        let doc = Document::new();
        let catalog = Catalog::standard();

        let mutation = Mutation::DuplicateElement {
            id: "missing".to_string(),
        };

        assert!(mutation.validate(&doc, &catalog).is_err());
    }
}
