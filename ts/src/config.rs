//! Configuration for tripstore

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripplanner")
        .join("trip_plans.db")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("tripstore").join("config.yml")),
            Some(PathBuf::from("tripstore.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path_is_under_tripplanner() {
        let config = Config::default();
        assert!(config.db_path.ends_with("tripplanner/trip_plans.db"));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "db_path: /tmp/custom.db\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/custom.db"));
    }

    #[test]
    fn test_load_missing_field_uses_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "{}\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.db_path.ends_with("tripplanner/trip_plans.db"));
    }
}
