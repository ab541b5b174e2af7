//! Record entry use case

use crate::domain::{topic, HappinessEntry};
use crate::error::{Result, TakaraError};
use crate::infrastructure::{EntryStore, FileStore};
use chrono::Local;

/// Fields collected from the input flow
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub text: String,
    pub positivity: f64,
    pub music_title: Option<String>,
    pub music_artist: Option<String>,
    pub location_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Service for recording a happy moment
pub struct RecordEntryService {
    store: FileStore,
}

impl RecordEntryService {
    /// Create a new record entry service
    pub fn new(store: FileStore) -> Self {
        RecordEntryService { store }
    }

    /// Validate the input, stamp it with the current moment and today's
    /// topic id, and persist it. Returns the stored entry.
    pub fn execute(&self, input: NewEntry) -> Result<HappinessEntry> {
        let text = input.text.trim().to_string();
        if text.is_empty() {
            return Err(TakaraError::InvalidEntry(
                "Entry text cannot be empty".to_string(),
            ));
        }

        if !(0.0..=100.0).contains(&input.positivity) {
            return Err(TakaraError::InvalidEntry(format!(
                "Positivity must be between 0 and 100, got {}",
                input.positivity
            )));
        }

        if input.music_artist.is_some() && input.music_title.is_none() {
            return Err(TakaraError::InvalidEntry(
                "A music artist needs a music title".to_string(),
            ));
        }

        if input.latitude.is_some() != input.longitude.is_some() {
            return Err(TakaraError::InvalidEntry(
                "Latitude and longitude must be given together".to_string(),
            ));
        }

        let now = Local::now();
        let today_topic = topic::generate_topic(now.date_naive());

        let mut entry = HappinessEntry::new(now, today_topic.id, text, input.positivity);
        entry.music_title = input.music_title;
        entry.music_artist = input.music_artist;
        entry.location_name = input.location_name;
        entry.latitude = input.latitude;
        entry.longitude = input.longitude;

        self.store.insert_entry(&entry)?;

        Ok(entry)
    }
}
