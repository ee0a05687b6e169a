//! Circular previous/next navigation over the ordered document list

/// The document being shown and its neighbours in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbors<'a> {
    pub current: &'a str,
    pub previous: &'a str,
    pub next: &'a str,
}

impl<'a> Neighbors<'a> {
    /// Resolve `name` in `docs` and pick the documents on either side,
    /// wrapping at both ends. Unknown names resolve to the first document.
    pub fn around<S: AsRef<str>>(docs: &'a [S], name: &str) -> Option<Self> {
        if docs.is_empty() {
            return None;
        }

        let len = docs.len();
        let index = docs.iter().position(|d| d.as_ref() == name).unwrap_or(0);

        Some(Neighbors {
            current: docs[index].as_ref(),
            previous: docs[(index + len - 1) % len].as_ref(),
            next: docs[(index + 1) % len].as_ref(),
        })
    }
}
