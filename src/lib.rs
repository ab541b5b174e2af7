//! takara - Terminal happiness journal
//!
//! A command-line journal for recording one small happy moment per day,
//! with a deterministic daily writing prompt, streak and positivity
//! statistics, and a treasure-box view of past entries.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TakaraError;
