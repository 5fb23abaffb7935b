//! Comprehensive mutation tests

use pagecraft_editor::{Catalog, Direction, EditSession, ElementKind, Mutation, PropValue};
use std::collections::BTreeMap;

fn session() -> EditSession {
    EditSession::new("test-page", Catalog::standard())
}

fn insert(session: &mut EditSession, kind: ElementKind, index: usize) -> String {
    session
        .apply(Mutation::InsertElement { kind, index })
        .expect("insert should succeed")
        .created
        .expect("insert should create an element")
}

#[test]
fn test_insert_uses_deep_copied_defaults() {
    let mut session = session();

    let id = insert(&mut session, ElementKind::Heading, 0);

    let element = session.document().get(&id).unwrap();
    let defaults = session
        .catalog()
        .default_props(ElementKind::Heading)
        .unwrap();
    assert_eq!(element.props, defaults);

    // Mutating the instance must not change the catalog.
    let mut props = BTreeMap::new();
    props.insert("text".to_string(), PropValue::from("Edited"));
    session
        .apply(Mutation::UpdateProperties { id, props })
        .unwrap();

    let defaults_after = session
        .catalog()
        .default_props(ElementKind::Heading)
        .unwrap();
    assert_eq!(
        defaults_after.get("text"),
        Some(&PropValue::from("Your Heading Here"))
    );
}

#[test]
fn test_insert_index_is_clamped() {
    let mut session = session();

    insert(&mut session, ElementKind::Heading, 0);
    let id = insert(&mut session, ElementKind::Badge, 99);

    // Clamped to the end, not an error.
    assert_eq!(session.document().position(&id), Some(1));
}

#[test]
fn test_duplicate_inserts_after_original_with_fresh_id() {
    let mut session = session();

    let first = insert(&mut session, ElementKind::Card, 0);
    let second = insert(&mut session, ElementKind::Button, 1);

    let outcome = session
        .apply(Mutation::DuplicateElement { id: first.clone() })
        .unwrap();
    let copy = outcome.created.unwrap();

    let doc = session.document();
    assert_eq!(doc.len(), 3);
    assert_eq!(doc.position(&first), Some(0));
    assert_eq!(doc.position(&copy), Some(1));
    assert_eq!(doc.position(&second), Some(2));

    // Fresh id, distinct from every existing id.
    assert_ne!(copy, first);
    assert_ne!(copy, second);
    assert_eq!(doc.get(&copy).unwrap().props, doc.get(&first).unwrap().props);
}

#[test]
fn test_duplicate_props_are_independent() {
    let mut session = session();

    let original = insert(&mut session, ElementKind::Card, 0);
    let copy = session
        .apply(Mutation::DuplicateElement {
            id: original.clone(),
        })
        .unwrap()
        .created
        .unwrap();

    let mut props = BTreeMap::new();
    props.insert("title".to_string(), PropValue::from("Copy Title"));
    session
        .apply(Mutation::UpdateProperties {
            id: copy.clone(),
            props,
        })
        .unwrap();

    let doc = session.document();
    assert_eq!(
        doc.get(&original).unwrap().props.get("title"),
        Some(&PropValue::from("Card Title"))
    );
    assert_eq!(
        doc.get(&copy).unwrap().props.get("title"),
        Some(&PropValue::from("Copy Title"))
    );
}

#[test]
fn test_duplicate_missing_id_is_an_error() {
    let mut session = session();

    let result = session.apply(Mutation::DuplicateElement {
        id: "missing".to_string(),
    });

    assert!(result.is_err());
}

#[test]
fn test_move_adjacent_boundaries_are_noops() {
    let mut session = session();

    let first = insert(&mut session, ElementKind::Heading, 0);
    let last = insert(&mut session, ElementKind::Paragraph, 1);

    session
        .apply(Mutation::MoveAdjacent {
            id: first.clone(),
            direction: Direction::Up,
        })
        .unwrap();
    session
        .apply(Mutation::MoveAdjacent {
            id: last.clone(),
            direction: Direction::Down,
        })
        .unwrap();

    assert_eq!(session.document().position(&first), Some(0));
    assert_eq!(session.document().position(&last), Some(1));
}

#[test]
fn test_move_adjacent_swaps_exactly_two_positions() {
    let mut session = session();

    let a = insert(&mut session, ElementKind::Heading, 0);
    let b = insert(&mut session, ElementKind::Paragraph, 1);
    let c = insert(&mut session, ElementKind::Divider, 2);
    let d = insert(&mut session, ElementKind::Badge, 3);

    session
        .apply(Mutation::MoveAdjacent {
            id: c.clone(),
            direction: Direction::Up,
        })
        .unwrap();

    let doc = session.document();
    assert_eq!(doc.position(&a), Some(0));
    assert_eq!(doc.position(&c), Some(1));
    assert_eq!(doc.position(&b), Some(2));
    assert_eq!(doc.position(&d), Some(3));
}

#[test]
fn test_move_to_index_targets_post_removal_sequence() {
    let mut session = session();

    let a = insert(&mut session, ElementKind::Heading, 0);
    let b = insert(&mut session, ElementKind::Paragraph, 1);
    let c = insert(&mut session, ElementKind::Divider, 2);

    // Moving the first of three elements to "the end" places it last,
    // not second-to-last: the target counts the sequence after removal.
    session
        .apply(Mutation::MoveToIndex {
            id: a.clone(),
            index: 2,
        })
        .unwrap();

    let doc = session.document();
    assert_eq!(doc.position(&b), Some(0));
    assert_eq!(doc.position(&c), Some(1));
    assert_eq!(doc.position(&a), Some(2));
}

#[test]
fn test_move_to_index_clamps_target() {
    let mut session = session();

    let a = insert(&mut session, ElementKind::Heading, 0);
    insert(&mut session, ElementKind::Paragraph, 1);

    session
        .apply(Mutation::MoveToIndex {
            id: a.clone(),
            index: 50,
        })
        .unwrap();

    assert_eq!(session.document().position(&a), Some(1));
}

#[test]
fn test_remove_absent_id_leaves_document_unchanged() {
    let mut session = session();

    insert(&mut session, ElementKind::Heading, 0);
    insert(&mut session, ElementKind::Button, 1);
    let before = session.document().clone();

    session
        .apply(Mutation::RemoveElement {
            id: "missing".to_string(),
        })
        .unwrap();

    assert_eq!(session.document(), &before);
}

#[test]
fn test_update_properties_merges_without_clobbering() {
    let mut session = session();

    let id = insert(&mut session, ElementKind::Heading, 0);

    let mut props = BTreeMap::new();
    props.insert("color".to_string(), PropValue::from("#ff0000"));
    session
        .apply(Mutation::UpdateProperties {
            id: id.clone(),
            props,
        })
        .unwrap();

    let element = session.document().get(&id).unwrap();
    assert_eq!(element.props.get("color"), Some(&PropValue::from("#ff0000")));
    // Untouched keys survive the merge.
    assert_eq!(element.props.get("fontSize"), Some(&PropValue::Number(36.0)));
    assert_eq!(
        element.props.get("text"),
        Some(&PropValue::from("Your Heading Here"))
    );
}

#[test]
fn test_update_properties_absent_id_is_noop() {
    let mut session = session();
    insert(&mut session, ElementKind::Heading, 0);
    let before = session.document().clone();

    let mut props = BTreeMap::new();
    props.insert("color".to_string(), PropValue::from("#ff0000"));
    let outcome = session
        .apply(Mutation::UpdateProperties {
            id: "missing".to_string(),
            props,
        })
        .unwrap();

    assert!(!outcome.changed);
    assert_eq!(session.document(), &before);
}

#[test]
fn test_clear_empties_document_and_selection() {
    let mut session = session();

    insert(&mut session, ElementKind::Heading, 0);
    insert(&mut session, ElementKind::Paragraph, 1);
    assert!(session.selection().is_some());

    session.apply(Mutation::Clear).unwrap();

    assert_eq!(session.document().len(), 0);
    assert!(session.selection().is_none());
}

#[test]
fn test_all_kinds_instantiate_from_catalog() {
    let mut session = session();
    let catalog = Catalog::standard();

    for (i, kind) in ElementKind::ALL.into_iter().enumerate() {
        let id = insert(&mut session, kind, i);
        let element = session.document().get(&id).unwrap();
        assert_eq!(element.kind, kind);
        assert_eq!(element.props, catalog.default_props(kind).unwrap());
    }

    assert_eq!(session.document().len(), ElementKind::ALL.len());
}
