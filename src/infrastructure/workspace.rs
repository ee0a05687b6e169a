//! Workspace discovery and layout

use crate::error::{SlipboxError, Result};
use crate::infrastructure::config::{resolve_path, Config, WORKSPACE_DIR};
use std::fs;
use std::path::{Path, PathBuf};

/// A slipbox workspace: a root directory holding `.slipbox/config.toml`
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Create a workspace handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Discover the workspace root.
    /// An explicit root wins, then SLIPBOX_ROOT, then walking up from the
    /// current directory.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return if Self::has_workspace_dir(path) {
                Ok(Workspace::new(path.to_path_buf()))
            } else {
                Err(SlipboxError::NotSlipboxDirectory(path.to_path_buf()))
            };
        }

        if let Ok(root_path) = std::env::var("SLIPBOX_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(SlipboxError::Config(format!(
                    "SLIPBOX_ROOT is set to '{}' but no .slipbox directory found. \
                    Run 'slipbox init' in that directory or unset SLIPBOX_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the workspace root by walking up from a starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(SlipboxError::NotSlipboxDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    /// Create the .slipbox directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(SlipboxError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&workspace_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Load config and resolve every path against the root
    pub fn settings(&self) -> Result<Settings> {
        let mut config = self.load_config()?;
        config.apply_env_overrides()?;
        Ok(Settings::resolve(&self.root, &config))
    }
}

/// Runtime settings with absolute paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    pub bind: String,
    pub data_dir: PathBuf,
    pub public_dir: PathBuf,
    pub plugins_dir: PathBuf,
    pub users_file: PathBuf,
}

impl Settings {
    pub fn resolve(root: &Path, config: &Config) -> Self {
        Settings {
            port: config.port,
            bind: config.bind.clone(),
            data_dir: resolve_path(root, &config.data_dir),
            public_dir: resolve_path(root, &config.public_dir),
            plugins_dir: resolve_path(root, &config.plugins_dir),
            users_file: resolve_path(root, &config.users_file),
        }
    }

    /// Address the HTTP server binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
