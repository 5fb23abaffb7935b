//! Structured form: the lossless, round-trippable encoding of a
//! document (a pretty-printed JSON array of elements).
//!
//! Deserialization validates the unique-id invariant so a corrupt or
//! hand-edited file cannot smuggle duplicate ids into a session.

use crate::element::Document;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate element id: {0}")]
    DuplicateId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Encode a document as pretty JSON.
pub fn serialize_document(doc: &Document) -> Result<String, DocumentError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Decode a document from JSON, validating id uniqueness.
pub fn deserialize_document(json: &str) -> Result<Document, DocumentError> {
    let doc: Document = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for el in doc.iter() {
        if !seen.insert(el.id.as_str()) {
            return Err(DocumentError::DuplicateId(el.id.clone()));
        }
    }

    Ok(doc)
}
