//! Save document use case
//!
//! Saving regenerates the filename from the first line. When the title maps
//! to a different name the text is written under the new (deduplicated) name
//! and the old file is removed.

use crate::domain::plan_save;
use crate::domain::title::{basename, UNTITLED_FILENAME};
use crate::error::Result;
use crate::infrastructure::DocumentStore;

/// Result of a save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Name the document now lives under
    pub name: String,
    /// Previous name when the save renamed the document
    pub renamed_from: Option<String>,
}

/// Save `text` for the document the client calls `doc`.
///
/// Only the last path component of `doc` is honoured; an empty value means
/// `untitled.md`.
pub fn save_document<S: DocumentStore>(store: &S, doc: &str, text: &str) -> Result<SaveOutcome> {
    let current = match basename(doc) {
        "" => UNTITLED_FILENAME,
        name => name,
    };

    let docs = store.ensure_seeded()?;
    let plan = plan_save(current, text, &docs);

    store.write_document(&plan.target, text)?;
    log::debug!("Saved {} ({} bytes)", plan.target, text.len());

    if !plan.is_rename() {
        return Ok(SaveOutcome {
            name: plan.target,
            renamed_from: None,
        });
    }

    if store.document_exists(&plan.current) {
        store.remove_document(&plan.current)?;
    }
    log::info!("Renamed {} -> {}", plan.current, plan.target);

    Ok(SaveOutcome {
        name: plan.target,
        renamed_from: Some(plan.current),
    })
}
