//! Open document use case

use crate::domain::title::{filename_from_slug, slug_from_filename};
use crate::domain::Neighbors;
use crate::error::{SlipboxError, Result};
use crate::infrastructure::{list_plugin_scripts, DocumentStore};
use std::path::Path;

/// Everything the editor page needs to show one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub name: String,
    pub text: String,
    pub previous: String,
    pub next: String,
    pub plugins: Vec<String>,
}

/// Resolve a URL slug to a document plus its navigation neighbours.
/// Unknown slugs show the newest document.
pub fn open_document<S: DocumentStore>(
    store: &S,
    plugins_dir: &Path,
    slug: &str,
) -> Result<EditorView> {
    let docs = store.ensure_seeded()?;
    let requested = filename_from_slug(slug);

    let neighbors = Neighbors::around(&docs, &requested)
        .ok_or_else(|| SlipboxError::NotFound(requested.clone()))?;

    if neighbors.current != requested {
        log::debug!("No document {}, showing {}", requested, neighbors.current);
    }

    let text = store.read_document(neighbors.current)?;

    Ok(EditorView {
        name: neighbors.current.to_string(),
        text,
        previous: neighbors.previous.to_string(),
        next: neighbors.next.to_string(),
        plugins: list_plugin_scripts(plugins_dir),
    })
}

/// Slug of the most recently modified document, seeding if needed
pub fn newest_document_slug<S: DocumentStore>(store: &S) -> Result<String> {
    let docs = store.ensure_seeded()?;
    docs.first()
        .map(|name| slug_from_filename(name).to_string())
        .ok_or_else(|| SlipboxError::NotFound("newest document".to_string()))
}
