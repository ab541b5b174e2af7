//! Treasure box listing use case

use crate::domain::HappinessEntry;
use crate::error::{Result, TakaraError};
use crate::infrastructure::{EntryStore, FileStore};
use chrono::NaiveDate;
use regex::RegexBuilder;

/// Filters for browsing the treasure box
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
    pub search: Option<String>,
}

/// List entries newest first, filtered by day range, text search,
/// and an optional limit.
pub fn list_entries(store: &FileStore, options: &ListOptions) -> Result<Vec<HappinessEntry>> {
    let mut entries = store.load_entries()?;

    if let Some(from) = options.from {
        entries.retain(|e| e.day() >= from);
    }
    if let Some(to) = options.to {
        entries.retain(|e| e.day() <= to);
    }

    if let Some(pattern) = &options.search {
        let matcher = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| TakaraError::Config(format!("Invalid search pattern: {}", e)))?;
        entries.retain(|e| matcher.is_match(&e.text));
    }

    if let Some(n) = options.limit {
        entries.truncate(n);
    }

    Ok(entries)
}
