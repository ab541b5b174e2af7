//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "takara")]
#[command(about = "Terminal happiness journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Your display name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Show the writing prompt for a day
    Topic {
        /// Day reference (e.g., today, tomorrow, monday, 2026-08-07)
        #[arg(value_name = "DAY", default_value = "today")]
        day: String,
    },

    /// Record a happy moment
    Add {
        /// What made you happy
        text: String,

        /// Positivity score, 0-100
        #[arg(short, long, default_value_t = 50.0)]
        positivity: f64,

        /// Song that goes with the moment
        #[arg(long, value_name = "TITLE")]
        music: Option<String>,

        /// Artist of the song
        #[arg(long, requires = "music")]
        artist: Option<String>,

        /// Where it happened
        #[arg(long, value_name = "NAME")]
        location: Option<String>,

        /// Latitude of the place
        #[arg(long, requires = "lon")]
        lat: Option<f64>,

        /// Longitude of the place
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
    },

    /// Browse the treasure box
    List {
        /// Earliest day to include (day reference)
        #[arg(long, value_name = "DAY")]
        from: Option<String>,

        /// Latest day to include (day reference)
        #[arg(long, value_name = "DAY")]
        to: Option<String>,

        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only entries whose text matches this pattern
        #[arg(short, long, value_name = "PATTERN")]
        search: Option<String>,

        /// Show full entry cards instead of one line each
        #[arg(long)]
        full: bool,
    },

    /// Show all entries of one day
    Show {
        /// Day reference (e.g., today, yesterday, 2026-08-01)
        #[arg(value_name = "DAY", default_value = "today")]
        day: String,
    },

    /// Review this week's happy moments
    Review,

    /// Streak, totals, and the entry calendar
    Stats {
        /// Month to show in the calendar (default: current month)
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,
    },

    /// Delete an entry by id
    Delete {
        /// Entry id (shown by 'takara list --full')
        id: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
