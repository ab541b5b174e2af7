//! Profile configuration management

use crate::error::{Result, TakaraError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_morning_hour() -> u32 {
    6
}

fn default_evening_hour() -> u32 {
    18
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub name: String,
    #[serde(default = "default_morning_hour")]
    pub morning_hour: u32,
    #[serde(default = "default_evening_hour")]
    pub evening_hour: u32,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(name: Option<String>) -> Self {
        Config {
            name: name.unwrap_or_else(|| "Guest".to_string()),
            morning_hour: default_morning_hour(),
            evening_hour: default_evening_hour(),
            created: Utc::now(),
        }
    }

    /// Load config from .takara/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".takara").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TakaraError::NotTakaraDirectory(path.to_path_buf())
            } else {
                TakaraError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TakaraError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .takara/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let takara_dir = path.join(".takara");
        let config_path = takara_dir.join("config.toml");

        if !takara_dir.exists() {
            fs::create_dir(&takara_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Validate a morning/evening boundary pair.
    pub fn validate_hours(morning: u32, evening: u32) -> Result<()> {
        if morning > 23 || evening > 23 {
            return Err(TakaraError::Config(format!(
                "Invalid hour: {} (hours are 0-23)",
                if morning > 23 { morning } else { evening }
            )));
        }
        if morning >= evening {
            return Err(TakaraError::Config(format!(
                "morning_hour ({}) must be before evening_hour ({})",
                morning, evening
            )));
        }
        Ok(())
    }
}
