//! Config management use case

use crate::error::{SlipboxError, Result};
use crate::infrastructure::{Config, Workspace};
use std::path::PathBuf;

/// Keys accepted by `get` and `set`
pub const CONFIG_KEYS: &[&str] = &[
    "port",
    "bind",
    "data_dir",
    "public_dir",
    "plugins_dir",
    "users_file",
    "created",
];

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;
        format_value(&config, key)
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "port" => {
                config.port = value.parse().map_err(|_| {
                    SlipboxError::Config(format!("Invalid port: '{}'", value))
                })?;
            }
            "bind" => {
                if value.trim().is_empty() {
                    return Err(SlipboxError::Config("Bind address cannot be empty".to_string()));
                }
                config.bind = value.to_string();
            }
            "data_dir" => config.data_dir = PathBuf::from(value),
            "public_dir" => config.public_dir = PathBuf::from(value),
            "plugins_dir" => config.plugins_dir = PathBuf::from(value),
            "users_file" => config.users_file = PathBuf::from(value),
            "created" => {
                return Err(SlipboxError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => return Err(unknown_key(key)),
        }

        self.workspace.save_config(&config)?;
        Ok(())
    }

    /// List all config values as `(key, value)` pairs
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        let config = self.workspace.load_config()?;
        CONFIG_KEYS
            .iter()
            .map(|key| format_value(&config, key).map(|value| (*key, value)))
            .collect()
    }
}

fn format_value(config: &Config, key: &str) -> Result<String> {
    match key {
        "port" => Ok(config.port.to_string()),
        "bind" => Ok(config.bind.clone()),
        "data_dir" => Ok(config.data_dir.display().to_string()),
        "public_dir" => Ok(config.public_dir.display().to_string()),
        "plugins_dir" => Ok(config.plugins_dir.display().to_string()),
        "users_file" => Ok(config.users_file.display().to_string()),
        "created" => Ok(config.created.to_rfc3339()),
        _ => Err(unknown_key(key)),
    }
}

fn unknown_key(key: &str) -> SlipboxError {
    SlipboxError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::new(temp.path().to_path_buf());
        workspace.initialize().unwrap();
        workspace.save_config(&Config::default()).unwrap();
        (temp, ConfigService::new(workspace))
    }

    #[test]
    fn test_get_defaults() {
        let (_temp, service) = service();
        assert_eq!(service.get("port").unwrap(), "8001");
        assert_eq!(service.get("data_dir").unwrap(), "data");
    }

    #[test]
    fn test_set_and_get() {
        let (_temp, service) = service();
        service.set("port", "9090").unwrap();
        service.set("data_dir", "/srv/notes").unwrap();
        assert_eq!(service.get("port").unwrap(), "9090");
        assert_eq!(service.get("data_dir").unwrap(), "/srv/notes");
    }

    #[test]
    fn test_set_invalid_port() {
        let (_temp, service) = service();
        assert!(matches!(
            service.set("port", "99999"),
            Err(SlipboxError::Config(_))
        ));
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, service) = service();
        match service.set("created", "2020-01-01T00:00:00Z").unwrap_err() {
            SlipboxError::Config(msg) => assert!(msg.contains("read-only")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = service();
        match service.get("colour").unwrap_err() {
            SlipboxError::Config(msg) => assert!(msg.contains("Unknown config key")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_list_covers_all_keys() {
        let (_temp, service) = service();
        let pairs = service.list().unwrap();
        let keys: Vec<_> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, CONFIG_KEYS);
    }
}
