//! Output formatting utilities

use crate::application::{StatsOverview, WeeklyReview};
use crate::domain::{HappinessEntry, Topic};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

const LINE_TEXT_WIDTH: usize = 56;

/// Format the day's topic card: the question plus its hint.
pub fn format_topic_card(topic: &Topic) -> String {
    format!("{}\n  hint: {}\n", topic.question, topic.hint)
}

/// Nudge shown in the evening hours.
pub fn evening_nudge() -> &'static str {
    "It's evening. Write today's moment down: takara add \"...\"\n"
}

/// One status line for the home view: streak and the positivity battery.
pub fn format_home_status(streak_days: u32, average_positivity: f64) -> String {
    format!(
        "Streak: {}  |  Positivity: {}\n",
        format_days(streak_days),
        format_battery(average_positivity)
    )
}

/// Render an average positivity as a ten-segment battery gauge.
pub fn format_battery(percent: f64) -> String {
    let filled = ((percent / 10.0).round() as usize).min(10);
    let mut gauge = String::with_capacity(10);
    for i in 0..10 {
        gauge.push(if i < filled { '#' } else { '-' });
    }
    format!("[{}] {:.0}%", gauge, percent)
}

/// Compact one-line rendering: day, score, truncated text.
pub fn format_entry_line(entry: &HappinessEntry) -> String {
    let mut text: String = entry.text.chars().take(LINE_TEXT_WIDTH).collect();
    if entry.text.chars().count() > LINE_TEXT_WIDTH {
        text.push_str("...");
    }
    format!("{}  {:>3.0}%  {}", entry.day().format("%Y-%m-%d"), entry.positivity, text)
}

/// Full card rendering: date, score, text, and the optional
/// location/music lines when present.
pub fn format_entry_card(entry: &HappinessEntry) -> String {
    let mut card = format!(
        "{}  [{:.0}%]\n  {}\n",
        entry.day().format("%Y-%m-%d (%a)"),
        entry.positivity,
        entry.text
    );

    if let Some(location) = &entry.location_name {
        card.push_str(&format!("  location: {}\n", location));
    }

    if let Some(title) = &entry.music_title {
        match &entry.music_artist {
            Some(artist) => card.push_str(&format!("  music: {} - {}\n", title, artist)),
            None => card.push_str(&format!("  music: {}\n", title)),
        }
    }

    card.push_str(&format!("  id: {}\n", entry.id));
    card
}

/// Format a list of entries, either as one-liners or as full cards.
pub fn format_entry_list(entries: &[HappinessEntry], full: bool) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    if full {
        entries
            .iter()
            .map(format_entry_card)
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        let mut output = String::new();
        for entry in entries {
            output.push_str(&format_entry_line(entry));
            output.push('\n');
        }
        output
    }
}

/// Format the entries of a single day, full cards.
pub fn format_day_view(day: NaiveDate, entries: &[HappinessEntry]) -> String {
    if entries.is_empty() {
        return format!("No entries on {}", day.format("%Y-%m-%d"));
    }

    let mut output = format!("{}\n\n", day.format("%Y-%m-%d (%a)"));
    output.push_str(
        &entries
            .iter()
            .map(format_entry_card)
            .collect::<Vec<_>>()
            .join("\n"),
    );
    output
}

/// Format the weekly review header and cards.
pub fn format_review(review: &WeeklyReview) -> String {
    let mut output = format!(
        "Week {} to {}\n",
        review.week_start.format("%Y-%m-%d"),
        review.week_end.format("%Y-%m-%d")
    );

    if review.entries.is_empty() {
        output.push_str("No entries this week yet. Go find a small happy thing!\n");
        return output;
    }

    output.push_str(&format!(
        "Found {} this week!\n",
        format_moments(review.count())
    ));
    output.push_str(&format!(
        "Average positivity: {:.0}%\n\n",
        review.average_positivity
    ));
    output.push_str(
        &review
            .entries
            .iter()
            .map(format_entry_card)
            .collect::<Vec<_>>()
            .join("\n"),
    );
    output
}

/// Format the profile stats block with a month calendar.
pub fn format_stats(overview: &StatsOverview, month_first: NaiveDate, today: NaiveDate) -> String {
    let mut output = format!("{}'s treasure box\n", overview.name);
    output.push_str(&format!("  Streak: {}\n", format_days(overview.streak_days)));
    output.push_str(&format!("  Entries: {}\n", overview.total_entries));
    output.push_str(&format!(
        "  Positivity: {}\n\n",
        format_battery(overview.average_positivity)
    ));
    output.push_str(&format_month_calendar(
        month_first,
        &overview.entry_days,
        today,
    ));
    output
}

/// Render one month, Monday-first. Days with an entry are starred,
/// today (when bare) is dotted.
pub fn format_month_calendar(
    month_first: NaiveDate,
    entry_days: &HashSet<NaiveDate>,
    today: NaiveDate,
) -> String {
    let month = month_first.month();
    let title = month_first.format("%B %Y").to_string();
    let mut output = format!("{:^28}\n", title);
    output.push_str("  Mo  Tu  We  Th  Fr  Sa  Su\n");

    let mut line = String::new();
    for _ in 0..month_first.weekday().num_days_from_monday() {
        line.push_str("    ");
    }

    let mut day = month_first;
    loop {
        let marker = if entry_days.contains(&day) {
            '*'
        } else if day == today {
            '.'
        } else {
            ' '
        };
        line.push_str(&format!(" {:>2}{}", day.day(), marker));

        if day.weekday() == Weekday::Sun {
            output.push_str(line.trim_end());
            output.push('\n');
            line.clear();
        }

        match day.succ_opt() {
            Some(next) if next.month() == month => day = next,
            _ => break,
        }
    }

    if !line.trim().is_empty() {
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.push_str("  (* = entry, . = today)\n");
    output
}

fn format_days(count: u32) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", count)
    }
}

fn format_moments(count: usize) -> String {
    if count == 1 {
        "1 happy moment".to_string()
    } else {
        format!("{} happy moments", count)
    }
}
