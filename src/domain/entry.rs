//! Journal entry model

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded happy moment.
///
/// `date` is stamped when the entry is created and never changes;
/// `positivity` is kept in [0, 100] by the recording flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HappinessEntry {
    pub id: Uuid,
    pub date: DateTime<Local>,
    pub topic_id: String,
    pub text: String,
    pub positivity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl HappinessEntry {
    /// Create an entry stamped with the given moment.
    pub fn new(date: DateTime<Local>, topic_id: String, text: String, positivity: f64) -> Self {
        HappinessEntry {
            id: Uuid::new_v4(),
            date,
            topic_id,
            text,
            positivity,
            music_title: None,
            music_artist: None,
            location_name: None,
            latitude: None,
            longitude: None,
        }
    }

    /// The local calendar day this entry belongs to (time of day stripped).
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}
