//! File system document store

use crate::domain::title::{basename, has_doc_extension, UNTITLED_FILENAME};
use crate::error::{SlipboxError, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A document file with its modification time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    pub name: String,
    pub modified: DateTime<Utc>,
}

impl DocumentEntry {
    pub fn new(name: String, modified: DateTime<Utc>) -> Self {
        DocumentEntry { name, modified }
    }
}

/// Abstract storage for documents
pub trait DocumentStore {
    /// Directory the documents live in
    fn data_dir(&self) -> &Path;

    /// All documents, newest first, ties broken by name
    fn list_documents(&self) -> Result<Vec<DocumentEntry>>;

    /// Read a document's text
    fn read_document(&self, name: &str) -> Result<String>;

    /// Create or overwrite a document
    fn write_document(&self, name: &str, text: &str) -> Result<()>;

    /// Delete a document; missing documents are not an error
    fn remove_document(&self, name: &str) -> Result<()>;

    fn document_exists(&self, name: &str) -> bool;

    /// Document names newest first, writing an empty `untitled.md` when the
    /// store holds nothing yet
    fn ensure_seeded(&self) -> Result<Vec<String>> {
        let docs = self.list_documents()?;
        if !docs.is_empty() {
            return Ok(docs.into_iter().map(|d| d.name).collect());
        }

        log::info!(
            "Seeding empty data directory {} with {}",
            self.data_dir().display(),
            UNTITLED_FILENAME
        );
        self.write_document(UNTITLED_FILENAME, "")?;
        Ok(vec![UNTITLED_FILENAME.to_string()])
    }
}

/// Documents stored as flat `.md` files in one directory
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub data_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: PathBuf) -> Self {
        FileSystemStore { data_dir }
    }

    fn ensure_data_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).map_err(SlipboxError::Io)
    }

    /// Path of a document, rejecting names that would leave the data directory
    fn document_path(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name == "." || name == ".." || basename(name) != name {
            return Err(SlipboxError::InvalidDocumentName(name.to_string()));
        }
        Ok(self.data_dir.join(name))
    }
}

impl DocumentStore for FileSystemStore {
    fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn list_documents(&self) -> Result<Vec<DocumentEntry>> {
        self.ensure_data_dir()?;

        let mut docs = Vec::new();
        let walker = WalkDir::new(&self.data_dir).min_depth(1).max_depth(1);

        for entry in walker {
            let entry = entry.map_err(|e| SlipboxError::Io(io::Error::from(e)))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if !has_doc_extension(name) {
                continue;
            }
            let modified = entry
                .metadata()
                .ok()
                .and_then(|m| m.modified().ok())
                .map(DateTime::<Utc>::from)
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
            docs.push(DocumentEntry::new(name.to_string(), modified));
        }

        // Newest first
        docs.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));

        Ok(docs)
    }

    fn read_document(&self, name: &str) -> Result<String> {
        let path = self.document_path(name)?;
        fs::read_to_string(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                SlipboxError::NotFound(name.to_string())
            } else {
                SlipboxError::Io(e)
            }
        })
    }

    fn write_document(&self, name: &str, text: &str) -> Result<()> {
        let path = self.document_path(name)?;
        self.ensure_data_dir()?;
        fs::write(&path, text).map_err(SlipboxError::Io)
    }

    fn remove_document(&self, name: &str) -> Result<()> {
        let path = self.document_path(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SlipboxError::Io(e)),
        }
    }

    fn document_exists(&self, name: &str) -> bool {
        self.document_path(name).map(|p| p.is_file()).unwrap_or(false)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{write_aged, write_at};
    use super::*;
    use tempfile::TempDir;

    fn names(docs: &[DocumentEntry]) -> Vec<&str> {
        docs.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_list_creates_missing_data_dir() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().join("data"));

        let docs = store.list_documents().unwrap();
        assert!(docs.is_empty());
        assert!(temp.path().join("data").is_dir());
    }

    #[test]
    fn test_list_newest_first() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());

        write_aged(temp.path(), "old.md", "old", 300);
        write_aged(temp.path(), "new.md", "new", 10);
        write_aged(temp.path(), "mid.md", "mid", 100);

        let docs = store.list_documents().unwrap();
        assert_eq!(names(&docs), vec!["new.md", "mid.md", "old.md"]);
    }

    #[test]
    fn test_list_ties_sorted_by_name() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());

        let now = std::time::SystemTime::now();
        for name in ["c.md", "a.md", "b.md"] {
            write_at(temp.path(), name, name, now);
        }

        let docs = store.list_documents().unwrap();
        assert_eq!(names(&docs), vec!["a.md", "b.md", "c.md"]);
    }

    #[test]
    fn test_list_ignores_other_entries() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());

        fs::write(temp.path().join("note.md"), "note").unwrap();
        fs::write(temp.path().join("LOUD.MD"), "loud").unwrap();
        fs::write(temp.path().join("readme.txt"), "text").unwrap();
        fs::create_dir(temp.path().join("folder.md")).unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested").join("deep.md"), "deep").unwrap();

        let docs = store.list_documents().unwrap();
        let mut found = names(&docs);
        found.sort();
        assert_eq!(found, vec!["LOUD.MD", "note.md"]);
    }

    #[test]
    fn test_read_write_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());

        store.write_document("note.md", "# Note\n\nBody").unwrap();
        assert!(store.document_exists("note.md"));
        assert_eq!(store.read_document("note.md").unwrap(), "# Note\n\nBody");
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());

        match store.read_document("ghost.md").unwrap_err() {
            SlipboxError::NotFound(name) => assert_eq!(name, "ghost.md"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_traversal_names() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().join("data"));

        for name in ["../escape.md", "a/b.md", "..", "", "c\\d.md"] {
            assert!(
                matches!(
                    store.write_document(name, "x"),
                    Err(SlipboxError::InvalidDocumentName(_))
                ),
                "accepted {:?}",
                name
            );
        }
        assert!(!temp.path().join("escape.md").exists());
    }

    #[test]
    fn test_remove_document() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());

        store.write_document("gone.md", "bye").unwrap();
        store.remove_document("gone.md").unwrap();
        assert!(!store.document_exists("gone.md"));

        // Removing twice is fine
        store.remove_document("gone.md").unwrap();
    }

    #[test]
    fn test_ensure_seeded_writes_untitled() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().join("data"));

        let docs = store.ensure_seeded().unwrap();
        assert_eq!(docs, vec!["untitled.md"]);
        assert_eq!(store.read_document("untitled.md").unwrap(), "");
    }

    #[test]
    fn test_ensure_seeded_keeps_existing() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());

        store.write_document("todo.md", "# Todo").unwrap();

        let docs = store.ensure_seeded().unwrap();
        assert_eq!(docs, vec!["todo.md"]);
        assert!(!store.document_exists("untitled.md"));
    }
}
