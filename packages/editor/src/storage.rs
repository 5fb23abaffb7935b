//! # Persistence Sink
//!
//! Where saved layouts go when they outlive the session. Sinks can be:
//! - **Memory-backed**: Temporary, for testing or in-memory operations
//! - **File-backed**: JSON files in a directory
//!
//! Sink failures propagate to the caller as [`EditorError`]; they are
//! never swallowed.

use crate::{EditorError, SavedLayout};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Storage backend for saved layouts.
pub trait LayoutSink {
    /// Persist a snapshot, returning an opaque reference to it.
    fn save(&mut self, layout: &SavedLayout) -> Result<String, EditorError>;

    /// References to every stored snapshot.
    fn list(&self) -> Result<Vec<String>, EditorError>;

    /// Fetch a snapshot by reference.
    fn load(&self, snapshot_ref: &str) -> Result<SavedLayout, EditorError>;
}

/// In-memory sink (for testing, temp sessions).
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: BTreeMap<String, SavedLayout>,
    next_key: u64,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutSink for MemorySink {
    fn save(&mut self, layout: &SavedLayout) -> Result<String, EditorError> {
        self.next_key += 1;
        let key = format!("snapshot-{}", self.next_key);
        self.entries.insert(key.clone(), layout.clone());
        Ok(key)
    }

    fn list(&self) -> Result<Vec<String>, EditorError> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn load(&self, snapshot_ref: &str) -> Result<SavedLayout, EditorError> {
        self.entries
            .get(snapshot_ref)
            .cloned()
            .ok_or_else(|| EditorError::SnapshotNotFound(snapshot_ref.to_string()))
    }
}

/// File-backed sink: one `<ref>.json` per snapshot under a directory.
#[derive(Debug)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Open a sink rooted at `dir`, creating the directory if needed.
    pub fn open(dir: PathBuf) -> Result<Self, EditorError> {
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, snapshot_ref: &str) -> PathBuf {
        self.dir.join(format!("{}.json", snapshot_ref))
    }
}

impl LayoutSink for FileSink {
    fn save(&mut self, layout: &SavedLayout) -> Result<String, EditorError> {
        let snapshot_ref = format!("{}-{}", layout.saved_at.timestamp_millis(), layout.name)
            .replace(' ', "-")
            .to_lowercase();

        let json = serde_json::to_string_pretty(layout)?;
        std::fs::write(self.path_for(&snapshot_ref), json)?;

        Ok(snapshot_ref)
    }

    fn list(&self) -> Result<Vec<String>, EditorError> {
        let mut refs = Vec::new();

        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    refs.push(stem.to_string());
                }
            }
        }

        refs.sort();
        Ok(refs)
    }

    fn load(&self, snapshot_ref: &str) -> Result<SavedLayout, EditorError> {
        let path = self.path_for(snapshot_ref);
        if !path.exists() {
            return Err(EditorError::SnapshotNotFound(snapshot_ref.to_string()));
        }

        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pagecraft_model::Document;

    fn layout(name: &str) -> SavedLayout {
        SavedLayout {
            name: name.to_string(),
            saved_at: Utc::now(),
            document: Document::new(),
        }
    }

    #[test]
    fn test_memory_sink_round_trip() {
        let mut sink = MemorySink::new();

        let key = sink.save(&layout("Layout 1")).unwrap();
        let restored = sink.load(&key).unwrap();

        assert_eq!(restored.name, "Layout 1");
        assert_eq!(sink.list().unwrap(), vec![key]);
    }

    #[test]
    fn test_memory_sink_missing_ref() {
        let sink = MemorySink::new();
        let result = sink.load("snapshot-99");
        assert!(matches!(result, Err(EditorError::SnapshotNotFound(_))));
    }
}
