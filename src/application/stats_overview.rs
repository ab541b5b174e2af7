//! Profile statistics use case

use crate::domain::stats;
use crate::error::Result;
use crate::infrastructure::{EntryStore, FileStore};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Aggregates backing the profile view: streak, totals, and the set of
/// days that carry at least one entry (for the calendar).
#[derive(Debug, Clone)]
pub struct StatsOverview {
    pub name: String,
    pub streak_days: u32,
    pub total_entries: usize,
    pub average_positivity: f64,
    pub entry_days: HashSet<NaiveDate>,
}

/// Compute the overview from the stored entries, anchored at `today`.
pub fn stats_overview(store: &FileStore, today: NaiveDate) -> Result<StatsOverview> {
    let config = store.load_config()?;
    let entries = store.load_entries()?;

    Ok(StatsOverview {
        name: config.name,
        streak_days: stats::calculate_streak(&entries, today),
        total_entries: entries.len(),
        average_positivity: stats::average_positivity(&entries),
        entry_days: stats::entry_days(&entries),
    })
}
