//! Search documents use case

use crate::domain::search::matches;
use crate::domain::SearchHit;
use crate::error::Result;
use crate::infrastructure::DocumentStore;

/// Every document containing `query` (case-insensitive), newest first
pub fn search_documents<S: DocumentStore>(store: &S, query: &str) -> Result<Vec<SearchHit>> {
    let docs = store.ensure_seeded()?;
    let mut hits = Vec::new();

    for name in &docs {
        let text = store.read_document(name)?;
        if matches(&text, query) {
            hits.push(SearchHit::from_document(name, &text));
        }
    }

    log::debug!("Search {:?} matched {} of {}", query, hits.len(), docs.len());
    Ok(hits)
}
