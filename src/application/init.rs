//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::config::resolve_path;
use crate::infrastructure::{Config, Workspace};
use std::fs;
use std::path::{Path, PathBuf};

/// Which configured directory a bundled asset belongs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssetHome {
    Public,
    Plugins,
}

/// Browser assets shipped inside the binary
const BUNDLED_ASSETS: &[(AssetHome, &str, &str)] = &[
    (
        AssetHome::Public,
        "main.css",
        include_str!("../../public/main.css"),
    ),
    (
        AssetHome::Public,
        "view/edit/edit.js",
        include_str!("../../public/view/edit/edit.js"),
    ),
    (
        AssetHome::Public,
        "view/edit/plugins.js",
        include_str!("../../public/view/edit/plugins.js"),
    ),
    (
        AssetHome::Public,
        "view/search/search.css",
        include_str!("../../public/view/search/search.css"),
    ),
    (
        AssetHome::Public,
        "view/search/search.js",
        include_str!("../../public/view/search/search.js"),
    ),
    (
        AssetHome::Plugins,
        "download.js",
        include_str!("../../public/plugins/download.js"),
    ),
    (
        AssetHome::Plugins,
        "preview.js",
        include_str!("../../public/plugins/preview.js"),
    ),
];

/// What `init` created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub root: PathBuf,
    pub data_dir: PathBuf,
    pub assets_written: Vec<PathBuf>,
}

/// Initialize a new workspace at the specified path.
///
/// Existing asset files are left alone so customised scripts survive.
pub fn init(path: &Path) -> Result<InitReport> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::new(path.to_path_buf());
    workspace.initialize()?;

    let config = Config::default();
    workspace.save_config(&config)?;

    let data_dir = resolve_path(path, &config.data_dir);
    fs::create_dir_all(&data_dir)?;

    let public_dir = resolve_path(path, &config.public_dir);
    let plugins_dir = resolve_path(path, &config.plugins_dir);

    let mut assets_written = Vec::new();
    for (home, relative, contents) in BUNDLED_ASSETS {
        let base = match home {
            AssetHome::Public => &public_dir,
            AssetHome::Plugins => &plugins_dir,
        };
        let target = base.join(relative);
        if target.exists() {
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, contents)?;
        assets_written.push(target);
    }
    fs::create_dir_all(public_dir.join("media"))?;

    log::info!(
        "Initialized slipbox workspace at {} ({} assets written)",
        path.display(),
        assets_written.len()
    );

    Ok(InitReport {
        root: path.to_path_buf(),
        data_dir,
        assets_written,
    })
}
