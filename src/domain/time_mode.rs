//! Morning/evening split
//!
//! The day is cut into a morning half (read the prompt, keep an eye out)
//! and an evening half (write down what you found). The boundaries come
//! from the profile config.

/// Which half of the day it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeMode {
    Morning,
    Evening,
}

impl TimeMode {
    /// Classify an hour of day (0-23). Hours in
    /// [morning_start, evening_start) are morning, the rest evening.
    pub fn for_hour(hour: u32, morning_start: u32, evening_start: u32) -> TimeMode {
        if hour >= morning_start && hour < evening_start {
            TimeMode::Morning
        } else {
            TimeMode::Evening
        }
    }

    pub fn is_evening(&self) -> bool {
        matches!(self, TimeMode::Evening)
    }
}
