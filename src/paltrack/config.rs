use crate::auth::Credentials;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "pallet_data.csv";
const DEFAULT_BACKUP_DIR: &str = "backups";

/// Configuration for paltrack, stored as config.json in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaltrackConfig {
    /// Canonical data file name, relative to the data directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Backup archive directory, relative to the data directory.
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,

    /// When set, every CLI invocation must authenticate against these.
    #[serde(default)]
    pub credentials: Option<Credentials>,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_backup_dir() -> String {
    DEFAULT_BACKUP_DIR.to_string()
}

impl Default for PaltrackConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            backup_dir: default_backup_dir(),
            credentials: None,
        }
    }
}

impl PaltrackConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PaltrackConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_loads_defaults() {
        let dir = tempdir().unwrap();
        let config = PaltrackConfig::load(dir.path()).unwrap();
        assert_eq!(config, PaltrackConfig::default());
        assert_eq!(config.data_file, "pallet_data.csv");
    }

    #[test]
    fn save_and_load_round_trips() {
        let dir = tempdir().unwrap();
        let config = PaltrackConfig {
            data_file: "pallets.csv".into(),
            backup_dir: "archive".into(),
            credentials: Some(Credentials::new("admin", "1234")),
        };
        config.save(dir.path()).unwrap();

        let loaded = PaltrackConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "{\"data_file\": \"other.csv\"}",
        )
        .unwrap();

        let config = PaltrackConfig::load(dir.path()).unwrap();
        assert_eq!(config.data_file, "other.csv");
        assert_eq!(config.backup_dir, "backups");
        assert!(config.credentials.is_none());
    }
}
