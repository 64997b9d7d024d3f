//! Store configuration
//!
//! Loaded from `.super-actions.toml`, first in the current working directory,
//! then in the home directory. Without a file the defaults apply.
//!
//! ```toml
//! log_actions = false
//!
//! [initial_state.counter]
//! value = 100
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, StoreError};

const CONFIG_FILE: &str = ".super-actions.toml";

/// Store configuration loaded from .super-actions.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root state the store starts from
    #[serde(default)]
    pub initial_state: toml::Table,

    /// Install the logging middleware
    #[serde(default = "default_log_actions")]
    pub log_actions: bool,
}

fn default_log_actions() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_state: toml::Table::new(),
            log_actions: default_log_actions(),
        }
    }
}

impl StoreConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Result<Self> {
        for path in config_file_candidates() {
            if path.is_file() {
                return Self::load_from(&path);
            }
        }

        log::debug!("No {} found, using default store config", CONFIG_FILE);
        Ok(Self::default())
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|source| StoreError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded store config from {}", path.display());
        Ok(config)
    }

    /// The configured initial state as a JSON object
    pub fn initial_state(&self) -> Result<Value> {
        Ok(serde_json::to_value(&self.initial_state)?)
    }
}

/// Config file locations in lookup order
fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(CONFIG_FILE));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert!(config.log_actions);
        assert_eq!(config.initial_state().unwrap(), json!({}));
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            log_actions = false

            [initial_state.counter]
            value = 100
            label = "clicks"
        "#;
        let config: StoreConfig = toml::from_str(toml).unwrap();
        assert!(!config.log_actions);
        assert_eq!(
            config.initial_state().unwrap(),
            json!({"counter": {"value": 100, "label": "clicks"}})
        );
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: StoreConfig = toml::from_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!(
            "super-actions-invalid-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "log_actions = \"maybe\"").unwrap();

        let err = StoreConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, StoreError::Config { .. }));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = StoreConfig::load_from(Path::new("/nonexistent/.super-actions.toml")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn test_candidates_start_with_cwd() {
        let candidates = config_file_candidates();
        assert_eq!(candidates[0], PathBuf::from(CONFIG_FILE));
    }
}
