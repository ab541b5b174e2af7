//! Derived statistics over the entry collection
//!
//! Pure reads of an already-loaded entry list: the consecutive-day streak,
//! the set of days that have at least one entry (calendar highlighting),
//! and the overall average positivity. Callers pass `today` in; the clock
//! stays at the application layer.

use crate::domain::HappinessEntry;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Count consecutive days with at least one entry, walking backward
/// from `today`. A day without an entry ends the walk, so the count is 0
/// whenever today itself has no entry.
pub fn calculate_streak(entries: &[HappinessEntry], today: NaiveDate) -> u32 {
    let days = entry_days(entries);

    let mut streak = 0;
    let mut check = today;
    while days.contains(&check) {
        streak += 1;
        match check.pred_opt() {
            Some(previous) => check = previous,
            None => break,
        }
    }

    streak
}

/// The distinct local calendar days present in the collection.
/// Multiple entries on one day collapse to a single member.
pub fn entry_days(entries: &[HappinessEntry]) -> HashSet<NaiveDate> {
    entries.iter().map(|entry| entry.day()).collect()
}

/// Arithmetic mean of the positivity scores, 0.0 for an empty collection.
/// The zero sentinel matters: the value feeds a displayed percentage.
pub fn average_positivity(entries: &[HappinessEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }

    let sum: f64 = entries.iter().map(|entry| entry.positivity).sum();
    sum / entries.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration, Local, TimeZone};

    fn entry_on(date: NaiveDate, positivity: f64) -> HappinessEntry {
        let stamp = Local
            .with_ymd_and_hms(date.year(), date.month(), date.day(), 12, 0, 0)
            .unwrap();
        HappinessEntry::new(stamp, "1".to_string(), "something nice".to_string(), positivity)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_streak_empty_collection() {
        assert_eq!(calculate_streak(&[], today()), 0);
    }

    #[test]
    fn test_streak_single_entry_today() {
        let entries = vec![entry_on(today(), 50.0)];
        assert_eq!(calculate_streak(&entries, today()), 1);
    }

    #[test]
    fn test_streak_three_consecutive_days() {
        let entries = vec![
            entry_on(today(), 50.0),
            entry_on(today() - Duration::days(1), 60.0),
            entry_on(today() - Duration::days(2), 70.0),
        ];
        assert_eq!(calculate_streak(&entries, today()), 3);
    }

    #[test]
    fn test_streak_broken_when_today_missing() {
        // A long run ending yesterday still counts as 0
        let entries = vec![
            entry_on(today() - Duration::days(1), 50.0),
            entry_on(today() - Duration::days(2), 50.0),
            entry_on(today() - Duration::days(3), 50.0),
        ];
        assert_eq!(calculate_streak(&entries, today()), 0);
    }

    #[test]
    fn test_streak_stops_at_gap() {
        let entries = vec![
            entry_on(today(), 50.0),
            entry_on(today() - Duration::days(1), 50.0),
            // gap at -2
            entry_on(today() - Duration::days(3), 50.0),
        ];
        assert_eq!(calculate_streak(&entries, today()), 2);
    }

    #[test]
    fn test_streak_counts_days_not_entries() {
        let entries = vec![
            entry_on(today(), 40.0),
            entry_on(today(), 90.0),
            entry_on(today() - Duration::days(1), 50.0),
        ];
        assert_eq!(calculate_streak(&entries, today()), 2);
    }

    #[test]
    fn test_entry_days_collapses_same_day() {
        let morning = HappinessEntry::new(
            Local.with_ymd_and_hms(2026, 8, 7, 8, 0, 0).unwrap(),
            "1".to_string(),
            "coffee".to_string(),
            60.0,
        );
        let evening = HappinessEntry::new(
            Local.with_ymd_and_hms(2026, 8, 7, 21, 0, 0).unwrap(),
            "1".to_string(),
            "dinner".to_string(),
            80.0,
        );

        let days = entry_days(&[morning, evening]);
        assert_eq!(days.len(), 1);
        assert!(days.contains(&today()));
    }

    #[test]
    fn test_entry_days_empty() {
        assert!(entry_days(&[]).is_empty());
    }

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(average_positivity(&[]), 0.0);
    }

    #[test]
    fn test_average_two_entries() {
        let entries = vec![entry_on(today(), 80.0), entry_on(today(), 60.0)];
        assert_eq!(average_positivity(&entries), 70.0);
    }

    #[test]
    fn test_average_single_entry() {
        let entries = vec![entry_on(today(), 42.0)];
        assert_eq!(average_positivity(&entries), 42.0);
    }
}
