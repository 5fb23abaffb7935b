//! # Drag-and-Drop Protocol
//!
//! Design-level drag state, independent of any DOM. A drag begins
//! either from the palette (carrying a kind) or from an existing
//! element (carrying its id). While dragging, the candidate drop gap is
//! tracked as transient UI feedback. Dropping translates the payload
//! into a [`Mutation`]; the state is cleared unconditionally on drop or
//! cancellation so a failed drop never leaves stale highlighting.

use crate::Mutation;
use pagecraft_model::ElementKind;
use serde::{Deserialize, Serialize};

/// What is being dragged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DragPayload {
    /// A new element of this kind, dragged from the palette
    NewElement(ElementKind),

    /// An existing element being relocated
    MoveElement(String),
}

/// An in-progress drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub payload: DragPayload,

    /// Candidate drop gap under the pointer, recomputed continuously
    pub hover_index: Option<usize>,
}

/// Tracks at most one in-progress drag.
#[derive(Debug, Default)]
pub struct DragController {
    state: Option<DragState>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag from the palette ("new" intent).
    pub fn begin_from_palette(&mut self, kind: ElementKind) {
        self.state = Some(DragState {
            payload: DragPayload::NewElement(kind),
            hover_index: None,
        });
    }

    /// Begin a drag from an existing element ("move" intent).
    pub fn begin_from_element(&mut self, id: impl Into<String>) {
        self.state = Some(DragState {
            payload: DragPayload::MoveElement(id.into()),
            hover_index: None,
        });
    }

    /// Track the candidate drop gap while the pointer moves.
    pub fn hover(&mut self, index: usize) {
        if let Some(state) = &mut self.state {
            state.hover_index = Some(index);
        }
    }

    /// The gap currently highlighted, if any.
    pub fn hover_index(&self) -> Option<usize> {
        self.state.as_ref().and_then(|s| s.hover_index)
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_some()
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        self.state.as_ref().map(|s| &s.payload)
    }

    /// Abort the drag without producing a mutation.
    pub fn cancel(&mut self) {
        self.state = None;
    }

    /// Drop at the given gap. Clears the drag state unconditionally and
    /// returns the mutation to apply, or `None` when no drag was in
    /// progress.
    pub fn drop_at(&mut self, index: usize) -> Option<Mutation> {
        let state = self.state.take()?;

        Some(match state.payload {
            DragPayload::NewElement(kind) => Mutation::InsertElement { kind, index },
            DragPayload::MoveElement(id) => Mutation::MoveToIndex { id, index },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_drop_yields_insert() {
        let mut drag = DragController::new();
        drag.begin_from_palette(ElementKind::Card);
        drag.hover(2);

        assert!(drag.is_dragging());
        assert_eq!(drag.hover_index(), Some(2));

        let mutation = drag.drop_at(2);
        assert_eq!(
            mutation,
            Some(Mutation::InsertElement {
                kind: ElementKind::Card,
                index: 2,
            })
        );

        // State cleared unconditionally
        assert!(!drag.is_dragging());
        assert_eq!(drag.hover_index(), None);
    }

    #[test]
    fn test_element_drop_yields_move() {
        let mut drag = DragController::new();
        drag.begin_from_element("abc-3");

        let mutation = drag.drop_at(0);
        assert_eq!(
            mutation,
            Some(Mutation::MoveToIndex {
                id: "abc-3".to_string(),
                index: 0,
            })
        );
    }

    #[test]
    fn test_drop_without_drag_is_none() {
        let mut drag = DragController::new();
        assert_eq!(drag.drop_at(0), None);
    }

    #[test]
    fn test_cancel_clears_highlight() {
        let mut drag = DragController::new();
        drag.begin_from_palette(ElementKind::Divider);
        drag.hover(1);

        drag.cancel();

        assert!(!drag.is_dragging());
        assert_eq!(drag.hover_index(), None);
        // A later drop must not resurrect the cancelled drag.
        assert_eq!(drag.drop_at(1), None);
    }

    #[test]
    fn test_hover_without_drag_is_ignored() {
        let mut drag = DragController::new();
        drag.hover(4);
        assert_eq!(drag.hover_index(), None);
    }
}
