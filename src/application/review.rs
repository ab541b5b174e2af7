//! Weekly review use case

use crate::domain::{stats, HappinessEntry};
use crate::error::Result;
use crate::infrastructure::{EntryStore, FileStore};
use chrono::{Datelike, Duration, NaiveDate};

/// This week's findings: the entries recorded between Monday and Sunday
/// of the week containing `today`, with count and average positivity.
#[derive(Debug, Clone)]
pub struct WeeklyReview {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub entries: Vec<HappinessEntry>,
    pub average_positivity: f64,
}

impl WeeklyReview {
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Build the review for the ISO week (Monday start) containing `today`.
pub fn weekly_review(store: &FileStore, today: NaiveDate) -> Result<WeeklyReview> {
    let week_start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    let week_end = week_start + Duration::days(6);

    let mut entries = store.load_entries()?;
    entries.retain(|e| {
        let day = e.day();
        day >= week_start && day <= week_end
    });

    let average_positivity = stats::average_positivity(&entries);

    Ok(WeeklyReview {
        week_start,
        week_end,
        entries,
        average_positivity,
    })
}
