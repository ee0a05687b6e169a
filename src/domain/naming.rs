//! Filename deduplication and the rename-on-save decision

use crate::domain::title::{filename_from_text, DOC_EXT};
use std::collections::HashSet;

/// Return `base` if free, otherwise the first free `stem-N.md` with N >= 2
pub fn unique_name(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }

    let stem = base.strip_suffix(DOC_EXT).unwrap_or(base);
    let mut n = 2;
    loop {
        let candidate = format!("{}-{}{}", stem, n, DOC_EXT);
        if !taken.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Where a save lands relative to where the document currently lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePlan {
    pub current: String,
    pub target: String,
}

impl SavePlan {
    /// Whether the backing file moves to a new name
    pub fn is_rename(&self) -> bool {
        self.current != self.target
    }
}

/// Decide the filename for `text` saved over the document named `current`.
///
/// `existing` is every document name in the data directory. The current
/// document does not block its own new name, so a document whose title maps
/// back onto its suffixed name keeps it.
pub fn plan_save<'a, I>(current: &str, text: &str, existing: I) -> SavePlan
where
    I: IntoIterator<Item = &'a String>,
{
    let mut taken: HashSet<String> = existing.into_iter().cloned().collect();
    taken.insert(current.to_string());

    let desired = filename_from_text(text);
    let target = if desired == current {
        desired
    } else {
        taken.remove(current);
        unique_name(&desired, &taken)
    };

    SavePlan {
        current: current.to_string(),
        target,
    }
}
