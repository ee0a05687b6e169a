//! Output formatting utilities

use crate::domain::SearchHit;
use crate::infrastructure::DocumentEntry;
use chrono::Local;

/// Format a list of documents for display
pub fn format_document_list(docs: &[DocumentEntry]) -> String {
    if docs.is_empty() {
        return "No documents found".to_string();
    }

    let mut output = String::new();
    for entry in docs {
        output.push_str(&format!(
            "{}  {}\n",
            entry.modified.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
            entry.name
        ));
    }
    output
}

/// Format search hits: title and slug, then the fragment indented
pub fn format_search_results(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No matching documents".to_string();
    }

    let mut output = String::new();
    for hit in hits {
        output.push_str(&format!("{} ({})\n", hit.title, hit.slug));
        if !hit.fragment.is_empty() {
            output.push_str(&format!("    {}\n", hit.fragment));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_document_list(&[]), "No documents found");
    }

    #[test]
    fn test_format_document_list() {
        let modified = Utc.with_ymd_and_hms(2025, 1, 17, 9, 30, 0).unwrap();
        let docs = vec![
            DocumentEntry::new("groceries.md".to_string(), modified),
            DocumentEntry::new("trip-ideas.md".to_string(), modified),
        ];

        let output = format_document_list(&docs);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("  groceries.md"));
        assert!(lines[1].ends_with("  trip-ideas.md"));
    }

    #[test]
    fn test_format_search_results() {
        let hits = vec![
            SearchHit {
                title: "Groceries".to_string(),
                slug: "groceries".to_string(),
                fragment: "milk eggs".to_string(),
            },
            SearchHit {
                title: "Empty".to_string(),
                slug: "empty".to_string(),
                fragment: String::new(),
            },
        ];

        assert_eq!(
            format_search_results(&hits),
            "Groceries (groceries)\n    milk eggs\nEmpty (empty)\n"
        );
    }

    #[test]
    fn test_format_no_hits() {
        assert_eq!(format_search_results(&[]), "No matching documents");
    }
}
