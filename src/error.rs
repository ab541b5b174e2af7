//! Error types for takara

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the takara application
#[derive(Debug, Error)]
pub enum TakaraError {
    #[error("Not a takara journal: {0}")]
    NotTakaraDirectory(PathBuf),

    #[error("Invalid day reference: {0}")]
    InvalidDayReference(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TakaraError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TakaraError::NotTakaraDirectory(_) => 2,
            TakaraError::InvalidDayReference(_) => 3,
            TakaraError::EntryNotFound(_) => 4,
            TakaraError::InvalidEntry(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TakaraError::NotTakaraDirectory(path) => {
                format!(
                    "Not a takara journal: {}\n\n\
                    Suggestions:\n\
                    • Run 'takara init' in this directory to create a new journal\n\
                    • Navigate to an existing takara journal\n\
                    • Set TAKARA_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            TakaraError::InvalidDayReference(ref_str) => {
                format!(
                    "Invalid day reference: '{}'\n\n\
                    Valid day references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2026-08-07)\n\n\
                    Examples:\n\
                    takara topic tomorrow\n\
                    takara show yesterday\n\
                    takara show 2026-08-01",
                    ref_str
                )
            }
            TakaraError::EntryNotFound(id) => {
                format!(
                    "Entry not found: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'takara list' to see your entries and their ids\n\
                    • Entry ids are UUIDs (e.g., 550e8400-e29b-41d4-a716-446655440000)",
                    id
                )
            }
            TakaraError::InvalidEntry(msg) => {
                format!(
                    "{}\n\n\
                    An entry needs some text and a positivity score from 0 to 100.\n\
                    Example: takara add \"Had lunch with a friend\" --positivity 80",
                    msg
                )
            }
            TakaraError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: takara config name \"Aki\"",
                        msg
                    )
                } else if msg.contains("hour") {
                    format!(
                        "{}\n\n\
                        Hours are 0-23 and morning_hour must come before evening_hour.\n\
                        Example: takara config evening_hour 19",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TakaraError
pub type Result<T> = std::result::Result<T, TakaraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_takara_directory_suggestion() {
        let err = TakaraError::NotTakaraDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("takara init"));
        assert!(msg.contains("TAKARA_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_day_reference_examples() {
        let err = TakaraError::InvalidDayReference("badday".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("today"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("takara show yesterday"));
    }

    #[test]
    fn test_entry_not_found_suggestions() {
        let err = TakaraError::EntryNotFound("nope".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("takara list"));
        assert!(msg.contains("UUID"));
    }

    #[test]
    fn test_invalid_entry_suggestions() {
        let err = TakaraError::InvalidEntry("Entry text cannot be empty".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("positivity"));
        assert!(msg.contains("takara add"));
    }

    #[test]
    fn test_config_unknown_key_suggestions() {
        let err = TakaraError::Config("Unknown config key: 'xyz'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("takara config name"));
    }

    #[test]
    fn test_config_hour_suggestions() {
        let err = TakaraError::Config("Invalid hour: 25".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("0-23"));
        assert!(msg.contains("evening_hour"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            TakaraError::NotTakaraDirectory(PathBuf::from("/tmp")).exit_code(),
            2
        );
        assert_eq!(
            TakaraError::InvalidDayReference("x".to_string()).exit_code(),
            3
        );
        assert_eq!(TakaraError::EntryNotFound("x".to_string()).exit_code(), 4);
        assert_eq!(TakaraError::InvalidEntry("x".to_string()).exit_code(), 5);
        let io = TakaraError::Io(std::io::Error::other("disk on fire"));
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = TakaraError::Io(std::io::Error::other("disk on fire"));
        let msg = err.display_with_suggestions();
        // Thiserror prefixes with the error type
        assert_eq!(msg, "IO error: disk on fire");
    }
}
