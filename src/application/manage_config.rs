//! Config management use case

use crate::error::{Result, TakaraError};
use crate::infrastructure::{Config, EntryStore, FileStore};

/// Service for managing the journal profile configuration
pub struct ConfigService {
    store: FileStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: FileStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "name" => Ok(config.name.clone()),
            "morning_hour" => Ok(config.morning_hour.to_string()),
            "evening_hour" => Ok(config.evening_hour.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TakaraError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: name, morning_hour, evening_hour, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "name" => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(TakaraError::Config("Name cannot be empty".to_string()));
                }
                config.name = trimmed.to_string();
            }
            "morning_hour" => {
                let hour = Self::parse_hour(value)?;
                Config::validate_hours(hour, config.evening_hour)?;
                config.morning_hour = hour;
            }
            "evening_hour" => {
                let hour = Self::parse_hour(value)?;
                Config::validate_hours(config.morning_hour, hour)?;
                config.evening_hour = hour;
            }
            "created" => {
                return Err(TakaraError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TakaraError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: name, morning_hour, evening_hour",
                    key
                )));
            }
        }

        self.store.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }

    fn parse_hour(value: &str) -> Result<u32> {
        value
            .parse::<u32>()
            .map_err(|_| TakaraError::Config(format!("Invalid hour: '{}' (hours are 0-23)", value)))
    }
}
