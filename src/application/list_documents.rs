//! List documents use case

use crate::error::Result;
use crate::infrastructure::{DocumentEntry, DocumentStore};

/// List documents newest first, optionally keeping only the first `limit`.
pub fn list_documents<S: DocumentStore>(
    store: &S,
    limit: Option<usize>,
) -> Result<Vec<DocumentEntry>> {
    let mut docs = store.list_documents()?;
    if let Some(n) = limit {
        docs.truncate(n);
    }
    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::test_support::write_aged;
    use crate::infrastructure::FileSystemStore;
    use tempfile::TempDir;

    #[test]
    fn test_list_with_limit() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());

        write_aged(temp.path(), "a.md", "a", 30);
        write_aged(temp.path(), "b.md", "b", 20);
        write_aged(temp.path(), "c.md", "c", 10);

        let docs = list_documents(&store, Some(2)).unwrap();
        let names: Vec<_> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["c.md", "b.md"]);
    }

    #[test]
    fn test_list_does_not_seed() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());

        assert!(list_documents(&store, None).unwrap().is_empty());
        assert!(!store.document_exists("untitled.md"));
    }
}
