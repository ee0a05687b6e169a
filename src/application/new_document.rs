//! New document use case

use crate::domain::title::UNTITLED_FILENAME;
use crate::domain::unique_name;
use crate::error::Result;
use crate::infrastructure::DocumentStore;
use std::collections::HashSet;

/// Create an empty `untitled[-N].md` and return its filename
pub fn create_document<S: DocumentStore>(store: &S) -> Result<String> {
    let docs = store.ensure_seeded()?;
    let taken: HashSet<String> = docs.into_iter().collect();

    let name = unique_name(UNTITLED_FILENAME, &taken);
    store.write_document(&name, "")?;
    log::info!("Created {}", name);

    Ok(name)
}
