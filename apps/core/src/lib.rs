//! MoodBot core.
//!
//! A rule-based supportive chat companion: every message is scored, checked
//! for crisis phrasing, answered from canned reply pools and logged to a local
//! SQLite journal from which a daily mood trend is derived.

pub mod brain;
pub mod chat;
pub mod config;
pub mod console;
pub mod database;
pub mod error;
pub mod models;
pub mod mood;
pub mod telemetry;

#[cfg(test)]
mod tests;
