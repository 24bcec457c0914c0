use crate::error::{FarmdeskError, Result};
use crate::query::DEFAULT_RECENT_COUNT;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
/// Overrides the platform config directory.
pub const HOME_ENV: &str = "FARMDESK_HOME";

pub const KEYS: [&str; 2] = ["recent-count", "seed-mock-data"];

/// Configuration for farmdesk, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct FarmdeskConfig {
    /// How many records the dashboard's recent activity shows
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,

    /// Load the demo records on startup
    #[serde(default = "default_seed")]
    pub seed_mock_data: bool,
}

fn default_recent_count() -> usize {
    DEFAULT_RECENT_COUNT
}

fn default_seed() -> bool {
    true
}

impl Default for FarmdeskConfig {
    fn default() -> Self {
        Self {
            recent_count: default_recent_count(),
            seed_mock_data: default_seed(),
        }
    }
}

impl FarmdeskConfig {
    /// Directory holding `config.json`: `$FARMDESK_HOME`, else the platform config dir.
    pub fn default_dir() -> Result<PathBuf> {
        if let Some(home) = std::env::var_os(HOME_ENV) {
            return Ok(PathBuf::from(home));
        }
        ProjectDirs::from("com", "farmdesk", "farmdesk")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| FarmdeskError::Config("Could not determine config dir".to_string()))
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: FarmdeskConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "recent-count" => Some(self.recent_count.to_string()),
            "seed-mock-data" => Some(self.seed_mock_data.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "recent-count" => {
                let count: usize = value.parse().map_err(|_| {
                    FarmdeskError::Config(format!("recent-count must be a number, got '{}'", value))
                })?;
                if count == 0 {
                    return Err(FarmdeskError::Config(
                        "recent-count must be at least 1".to_string(),
                    ));
                }
                self.recent_count = count;
            }
            "seed-mock-data" => {
                self.seed_mock_data = value.parse().map_err(|_| {
                    FarmdeskError::Config(format!(
                        "seed-mock-data must be true or false, got '{}'",
                        value
                    ))
                })?;
            }
            other => {
                return Err(FarmdeskError::Config(format!(
                    "Unknown config key: {} (known keys: {})",
                    other,
                    KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// `(key, value)` pairs in a stable order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}
