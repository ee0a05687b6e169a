//! Configuration management

use crate::error::{SlipboxError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory marking a slipbox workspace root
pub const WORKSPACE_DIR: &str = ".slipbox";

const CONFIG_FILE: &str = "config.toml";

fn default_port() -> u16 {
    8001
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_plugins_dir() -> PathBuf {
    PathBuf::from("public").join("plugins")
}

fn default_users_file() -> PathBuf {
    PathBuf::from("users.ini")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
    #[serde(default = "default_plugins_dir")]
    pub plugins_dir: PathBuf,
    #[serde(default = "default_users_file")]
    pub users_file: PathBuf,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: default_port(),
            bind: default_bind(),
            data_dir: default_data_dir(),
            public_dir: default_public_dir(),
            plugins_dir: default_plugins_dir(),
            users_file: default_users_file(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .slipbox/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SlipboxError::NotSlipboxDirectory(path.to_path_buf())
            } else {
                SlipboxError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| SlipboxError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .slipbox/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join(CONFIG_FILE);

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| SlipboxError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Apply `PORT` and `SLIPBOX_DATA` overrides from the environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (the environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| SlipboxError::Config(format!("Invalid PORT value: '{}'", port)))?;
        }
        if let Some(data) = lookup("SLIPBOX_DATA") {
            if !data.trim().is_empty() {
                self.data_dir = PathBuf::from(data);
            }
        }
        Ok(())
    }
}

/// Resolve a configured path against the workspace root
pub fn resolve_path(root: &Path, configured: &Path) -> PathBuf {
    if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        root.join(configured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8001);
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.plugins_dir, PathBuf::from("public").join("plugins"));
        assert_eq!(config.users_file, PathBuf::from("users.ini"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            port: 9000,
            ..Config::default()
        };

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".slipbox").exists());
        assert!(temp.path().join(".slipbox/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_fills_missing_fields() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".slipbox")).unwrap();
        fs::write(
            temp.path().join(".slipbox/config.toml"),
            "port = 8123\ncreated = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.port, 8123);
        assert_eq!(loaded.data_dir, PathBuf::from("data"));
        assert_eq!(loaded.bind, "0.0.0.0");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            SlipboxError::NotSlipboxDirectory(_) => {}
            _ => panic!("Expected NotSlipboxDirectory error"),
        }
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".slipbox")).unwrap();
        fs::write(temp.path().join(".slipbox/config.toml"), "port = [").unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            SlipboxError::Config(msg) => assert!(msg.contains("config.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [("PORT", "9999"), ("SLIPBOX_DATA", "/srv/notes")]
            .into_iter()
            .collect();
        let mut config = Config::default();

        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.port, 9999);
        assert_eq!(config.data_dir, PathBuf::from("/srv/notes"));
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = Config::default();
        let result = config.apply_overrides(|key| (key == "PORT").then(|| "eighty".to_string()));
        assert!(matches!(result, Err(SlipboxError::Config(_))));
    }

    #[test]
    fn test_no_overrides_keeps_values() {
        let mut config = Config::default();
        config.apply_overrides(|_| None).unwrap();
        assert_eq!(config.port, 8001);
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_resolve_path() {
        let root = Path::new("/srv/slipbox");
        assert_eq!(
            resolve_path(root, Path::new("data")),
            PathBuf::from("/srv/slipbox/data")
        );
        assert_eq!(
            resolve_path(root, Path::new("/var/notes")),
            PathBuf::from("/var/notes")
        );
    }
}
