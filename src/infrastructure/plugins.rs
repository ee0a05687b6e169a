//! Browser plugin discovery
//!
//! Every `.js` file dropped into the plugins directory is loaded by the
//! editor page.

use std::path::Path;
use walkdir::WalkDir;

fn is_script(name: &str) -> bool {
    name.to_lowercase().ends_with(".js")
}

/// Plugin script filenames in load order. A missing or unreadable directory
/// yields no plugins.
pub fn list_plugin_scripts(dir: &Path) -> Vec<String> {
    let mut scripts: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| is_script(name))
        .collect();

    scripts.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    scripts
}
