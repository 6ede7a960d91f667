//! Crisis phrase detection.
//!
//! Phrase-list membership on word boundaries, intentionally over-inclusive.

use crate::error::AppError;
use regex::Regex;

/// Detects crisis phrasing in normalized text.
pub struct CrisisDetector {
    pattern: Option<Regex>,
}

impl CrisisDetector {
    /// Compiles all phrases into one word-bounded alternation.
    pub fn new(phrases: &[String]) -> Result<Self, AppError> {
        let alternatives: Vec<String> = phrases
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|")))
            .map_err(|e| AppError::Internal(format!("Invalid crisis pattern: {}", e)))?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Returns true if any phrase appears as a whole word or phrase.
    pub fn is_crisis(&self, normalized: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|p| p.is_match(normalized))
    }
}
