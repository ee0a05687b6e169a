//! Document titles, slugs and filenames
//!
//! A document is named after its first line. The slug is the lowercase,
//! dash-separated ASCII form of that line; the filename is the slug plus
//! `.md`.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Extension every document filename carries
pub const DOC_EXT: &str = ".md";

/// Slug used when a title has nothing left after cleanup
pub const UNTITLED_SLUG: &str = "untitled";

/// Filename of the seed document and the base for new documents
pub const UNTITLED_FILENAME: &str = "untitled.md";

/// Leading markdown heading marker: `#`, `##`, ... plus following whitespace
fn heading_marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^#+\s*").unwrap())
}

/// Runs of anything that is not a lowercase ASCII letter or digit
fn non_slug_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Turn a title into a filesystem and URL safe slug.
///
/// `"# Héllo, World!"` becomes `"hello-world"`. An empty result falls back to
/// `"untitled"`. Applying it to its own output is a no-op.
pub fn slugify_title(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let without_marker = heading_marker_regex().replace(&lowered, "");

    let folded: String = without_marker
        .nfkd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect();

    let dashed = non_slug_regex().replace_all(&folded, "-");
    let slug = dashed.trim_matches('-');

    if slug.is_empty() {
        UNTITLED_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// First line of a text, without the line terminator
pub fn first_line(text: &str) -> &str {
    let line = text.split('\n').next().unwrap_or("");
    line.strip_suffix('\r').unwrap_or(line)
}

/// Human-readable title: first line without heading marker, or "Untitled"
pub fn first_line_title(text: &str) -> String {
    let cleaned = heading_marker_regex().replace(first_line(text), "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        "Untitled".to_string()
    } else {
        cleaned.to_string()
    }
}

/// The filename a document with this text should live under
pub fn filename_from_text(text: &str) -> String {
    format!("{}{}", slugify_title(first_line(text)), DOC_EXT)
}

/// Whether a filename carries the document extension (any case)
pub fn has_doc_extension(name: &str) -> bool {
    let Some(split) = name.len().checked_sub(DOC_EXT.len()) else {
        return false;
    };
    name.is_char_boundary(split) && name[split..].eq_ignore_ascii_case(DOC_EXT)
}

/// Filename without its `.md` extension
pub fn slug_from_filename(name: &str) -> &str {
    if has_doc_extension(name) {
        &name[..name.len() - DOC_EXT.len()]
    } else {
        name
    }
}

/// Last path component of a client supplied name, ignoring trailing
/// separators.
///
/// Both separators are honoured so `../x` and `a\b` cannot escape the data
/// directory.
pub fn basename(name: &str) -> &str {
    name.trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("")
}

/// Map a URL slug back to the filename it refers to
pub fn filename_from_slug(slug: &str) -> String {
    format!("{}{}", basename(slug.trim()), DOC_EXT)
}
