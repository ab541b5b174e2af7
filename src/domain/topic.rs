//! Daily topic generation
//!
//! Every calendar day maps to one prompt asking whether the user caught a
//! small act of kindness: a (subject, action) pair drawn from two fixed word
//! lists. The mapping depends only on the day-of-year, so the same date
//! always produces the same topic.

use chrono::{Datelike, NaiveDate};

/// A daily writing prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: String,
    pub question: String,
    pub input_question: String,
    pub hint: String,
}

/// The people a topic can be about. 19 entries.
pub const SUBJECTS: [&str; 19] = [
    "A friend",
    "Your family",
    "Your mother",
    "Your father",
    "A sibling",
    "A grandparent",
    "A teacher",
    "A classmate",
    "A club teammate",
    "A junior at school",
    "An older student",
    "A childhood friend",
    "A shop clerk",
    "A station attendant",
    "A neighbor",
    "A stranger",
    "Your pet",
    "Your favorite star",
    "Yourself",
];

/// The small kindnesses a topic can ask about. 20 entries.
pub const ACTIONS: [&str; 20] = [
    "say thank you to them",
    "tell them you love them",
    "smile at them",
    "treat them kindly",
    "listen to them",
    "hear out their worries",
    "help them out",
    "compliment them",
    "laugh with them",
    "cheer them up",
    "give them a little present",
    "root for them",
    "lend them a hand",
    "share a recommendation with them",
    "share a meal with them",
    "reach out to them",
    "meet up with them",
    "say hello to them",
    "tell them how you feel",
    "show them your gratitude",
];

/// Number of distinct (subject, action) pairs: 19 x 20 = 380.
/// Covers every day of the year before the cycle wraps.
pub fn total_combinations() -> usize {
    SUBJECTS.len() * ACTIONS.len()
}

/// Map a 1-based day-of-year onto (subject index, action index).
///
/// The cycle is longer than any year, so no pair repeats within one
/// calendar year, but January 1st always restarts at pair 0. That restart
/// is intentional: stored entries reference topics by day-of-year id.
fn pair_for_day(day_of_year: usize) -> (usize, usize) {
    let index = (day_of_year - 1) % total_combinations();
    (index % SUBJECTS.len(), index / SUBJECTS.len())
}

/// Generate the topic for a calendar date.
pub fn generate_topic(date: NaiveDate) -> Topic {
    // ordinal() is 1-based and total over valid dates
    let day_of_year = date.ordinal() as usize;
    let (subject_index, action_index) = pair_for_day(day_of_year);
    let subject = SUBJECTS[subject_index];
    let action = ACTIONS[action_index];

    Topic {
        id: day_of_year.to_string(),
        question: format!("{} — did you {}?", subject, action),
        input_question: format!("Today, did I {}?", action),
        hint: hint_for(subject).to_string(),
    }
}

/// Hint shown under the prompt. A few subjects get a bespoke nudge,
/// everyone else shares the default.
fn hint_for(subject: &str) -> &'static str {
    match subject {
        "Yourself" => "Be good to yourself too!",
        "Your pet" => "Fluffy time counts double.",
        "Your favorite star" => "Cheering from afar counts!",
        "A stranger" => "The smallest gesture is enough.",
        "A station attendant" => "A quick nod on the way through works.",
        _ => "Little things count just as much.",
    }
}
