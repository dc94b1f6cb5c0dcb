use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info};

use crate::error::PersistenceError;
use crate::search::{self, Matches};

/// Default history file name, resolved against the working directory
pub const DEFAULT_HISTORY_FILE: &str = "clipboard_history.json";

/// A single captured clipboard snapshot
pub type ClipboardEntry = String;

/// Read a JSON array of strings from `path`.
///
/// A missing file is an empty history. Anything else that is not a JSON
/// array of strings is reported, never silently dropped.
pub fn load(path: &Path) -> Result<Vec<ClipboardEntry>, PersistenceError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No history file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&content).map_err(|source| PersistenceError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `entries` to `path` as a JSON array, replacing any existing file.
pub fn save(path: &Path, entries: &[ClipboardEntry]) -> Result<(), PersistenceError> {
    let io_err = |source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let json = serde_json::to_string(entries).map_err(|source| PersistenceError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(io_err)
}

/// Append `candidate` unless it is blank or already present.
///
/// Returns whether the entry was inserted.
pub fn append(entries: &mut Vec<ClipboardEntry>, candidate: &str) -> bool {
    if candidate.trim().is_empty() {
        return false;
    }
    if entries.iter().any(|existing| existing == candidate) {
        return false;
    }
    entries.push(candidate.to_string());
    true
}

/// Drop every entry. Cleared entries are gone for good.
pub fn clear(entries: &mut Vec<ClipboardEntry>) {
    entries.clear();
}

/// Insertion-ordered, deduplicated clipboard history (oldest first)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStore {
    entries: Vec<ClipboardEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap entries as loaded from disk. Uniqueness is only enforced on append.
    pub fn from_entries(entries: Vec<ClipboardEntry>) -> Self {
        Self { entries }
    }

    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        let entries = load(path)?;
        info!("Loaded {} history entries from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        save(path, &self.entries)?;
        info!("Saved {} history entries to {}", self.entries.len(), path.display());
        Ok(())
    }

    pub fn append(&mut self, candidate: &str) -> bool {
        append(&mut self.entries, candidate)
    }

    pub fn clear(&mut self) {
        clear(&mut self.entries);
    }

    pub fn search<'a>(&'a self, query: &str) -> Matches<'a> {
        search::search(&self.entries, query)
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_append_is_idempotent() {
        let mut history = HistoryStore::new();

        assert!(history.append("Same content"));
        assert!(!history.append("Same content"));

        assert_eq!(history.entries(), ["Same content"]);
    }

    #[test]
    fn test_blank_entries_rejected() {
        let mut history = HistoryStore::new();

        for blank in ["", " ", "\n\t", "   \r\n  "] {
            assert!(!history.append(blank));
        }

        assert!(history.is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut history = HistoryStore::new();

        history.append("First item");
        history.append("Second item");
        history.append("First item");

        assert_eq!(history.entries(), ["First item", "Second item"]);
    }

    #[test]
    fn test_padded_text_is_kept_verbatim() {
        let mut history = HistoryStore::new();

        assert!(history.append("  indented"));
        assert!(history.append("indented"));

        assert_eq!(history.entries(), ["  indented", "indented"]);
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryStore::new();
        history.append("Item 1");
        history.append("Item 2");
        assert_eq!(history.len(), 2);

        history.clear();

        assert_eq!(history.len(), 0);
        assert!(history.append("Item 1"));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();

        let entries = load(&dir.path().join("absent.json")).unwrap();

        assert!(entries.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_HISTORY_FILE);
        let entries = vec![
            "plain".to_string(),
            "multi\nline \"quoted\"".to_string(),
            "ünïcödé ✂".to_string(),
        ];

        save(&path, &entries).unwrap();

        assert_eq!(load(&path).unwrap(), entries);
    }

    #[test]
    fn test_save_overwrites_and_creates_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("history.json");

        save(&path, &["old".to_string(), "older".to_string()]).unwrap();
        save(&path, &["new".to_string()]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"["new"]"#);
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "not json at all").unwrap();

        let err = load(&path).unwrap_err();

        assert!(matches!(err, PersistenceError::Malformed { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_load_rejects_non_string_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, r#"{"entries": ["a"]}"#).unwrap();
        assert!(matches!(load(&path), Err(PersistenceError::Malformed { .. })));

        fs::write(&path, r#"["a", 2]"#).unwrap();
        assert!(matches!(load(&path), Err(PersistenceError::Malformed { .. })));
    }

    #[test]
    fn test_load_keeps_duplicates_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, r#"["a", "a"]"#).unwrap();

        let mut history = HistoryStore::load(&path).unwrap();

        assert_eq!(history.len(), 2);
        assert!(!history.append("a"));
    }
}
