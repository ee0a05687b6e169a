//! Full-text search over documents

use crate::domain::title::{first_line_title, slug_from_filename};

/// Maximum characters of body text shown under a search hit
pub const FRAGMENT_CHARS: usize = 80;

/// A document matching a search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub slug: String,
    pub fragment: String,
}

impl SearchHit {
    /// Build a hit from a document filename and its text
    pub fn from_document(name: &str, text: &str) -> Self {
        SearchHit {
            title: first_line_title(text),
            slug: slug_from_filename(name).to_string(),
            fragment: fragment(text),
        }
    }
}

/// Case-insensitive substring match. An empty query matches everything.
pub fn matches(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Body text after the title line, whitespace collapsed, cut short
fn fragment(text: &str) -> String {
    let body = text.lines().skip(1).collect::<Vec<_>>().join(" ");
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(FRAGMENT_CHARS).collect()
}
