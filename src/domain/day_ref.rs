//! Day reference parsing and resolution

use crate::error::{Result, TakaraError};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A user-supplied reference to a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayReference {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Next day
    Tomorrow,
    /// Most recent occurrence of a weekday (today counts)
    Weekday(Weekday),
    /// Specific date
    Date(NaiveDate),
}

impl DayReference {
    /// Parse a day reference: today/yesterday/tomorrow, a weekday name
    /// (full or three-letter), or an ISO date (YYYY-MM-DD).
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DayReference::Today),
            "yesterday" => Ok(DayReference::Yesterday),
            "tomorrow" => Ok(DayReference::Tomorrow),
            "monday" | "mon" => Ok(DayReference::Weekday(Weekday::Mon)),
            "tuesday" | "tue" => Ok(DayReference::Weekday(Weekday::Tue)),
            "wednesday" | "wed" => Ok(DayReference::Weekday(Weekday::Wed)),
            "thursday" | "thu" => Ok(DayReference::Weekday(Weekday::Thu)),
            "friday" | "fri" => Ok(DayReference::Weekday(Weekday::Fri)),
            "saturday" | "sat" => Ok(DayReference::Weekday(Weekday::Sat)),
            "sunday" | "sun" => Ok(DayReference::Weekday(Weekday::Sun)),
            _ => NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .map(DayReference::Date)
                .map_err(|_| TakaraError::InvalidDayReference(input.to_string())),
        }
    }

    /// Resolve this reference against a base date.
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            DayReference::Today => base_date,
            DayReference::Yesterday => base_date - Duration::days(1),
            DayReference::Tomorrow => base_date + Duration::days(1),
            DayReference::Weekday(target) => {
                let days_back = (base_date.weekday().num_days_from_monday() + 7
                    - target.num_days_from_monday())
                    % 7;
                base_date - Duration::days(days_back as i64)
            }
            DayReference::Date(date) => *date,
        }
    }
}
