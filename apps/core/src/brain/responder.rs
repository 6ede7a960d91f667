//! Responder - turns one message into a score, a crisis verdict, topic tags
//! and a reply.
//!
//! Order of evaluation:
//! 1. Normalize the text and score it.
//! 2. Crisis override (phrase match or severe score) replaces everything else.
//! 3. Otherwise bucket the score, tag topics and pick a template, with at most
//!    one suffix: a coping tip for negative, a topic sentence for tagged neutral.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::crisis::CrisisDetector;
use super::lexicon::Lexicon;
use super::normalize::normalize;
use super::random::{choose, ReplyRng};
use super::sentiment::SentimentScorer;
use super::topics::TopicTagger;
use crate::error::AppError;

/// Scores at or above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Scores at or below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;
/// Scores at or below this trigger the crisis override on their own.
pub const SEVERE_THRESHOLD: f64 = -0.85;

/// Sentiment bucket derived from the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Positive,
    Neutral,
    Negative,
}

impl Bucket {
    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Bucket::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Bucket::Negative
        } else {
            Bucket::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Positive => "positive",
            Bucket::Neutral => "neutral",
            Bucket::Negative => "negative",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Why the crisis override fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrisisTrigger {
    /// A crisis phrase matched.
    Phrase,
    /// No phrase, but the score was at or below `SEVERE_THRESHOLD`.
    SevereScore,
}

/// Outcome of classifying one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Compound sentiment score of the normalized text.
    pub score: f64,
    /// Set when the crisis override replaced the normal reply.
    pub crisis: Option<CrisisTrigger>,
    /// `None` under the crisis override.
    pub bucket: Option<Bucket>,
    /// Matched topics in table order; empty under the crisis override.
    pub tags: Vec<String>,
    pub reply: String,
}

impl Classification {
    pub fn is_crisis(&self) -> bool {
        self.crisis.is_some()
    }
}

/// Rule-based classifier and reply picker.
pub struct Responder {
    scorer: Arc<dyn SentimentScorer>,
    crisis: CrisisDetector,
    topics: TopicTagger,
    lexicon: Lexicon,
}

impl Responder {
    /// Builds a responder from a scorer and the phrase tables.
    pub fn new(scorer: Arc<dyn SentimentScorer>, lexicon: Lexicon) -> Result<Self, AppError> {
        let crisis = CrisisDetector::new(&lexicon.crisis_phrases)?;
        let topics = TopicTagger::new(lexicon.topics.clone());
        Ok(Self {
            scorer,
            crisis,
            topics,
            lexicon,
        })
    }

    /// Classifies `text` and picks a reply. Total: every input, including "", classifies.
    pub fn classify(&self, text: &str, rng: &mut dyn ReplyRng) -> Classification {
        let normalized = normalize(text);
        let score = self.scorer.compound(&normalized);

        let crisis = if self.crisis.is_crisis(&normalized) {
            Some(CrisisTrigger::Phrase)
        } else if score <= SEVERE_THRESHOLD {
            Some(CrisisTrigger::SevereScore)
        } else {
            None
        };

        if crisis.is_some() {
            return Classification {
                score,
                crisis,
                bucket: None,
                tags: Vec::new(),
                reply: self.lexicon.crisis_message.clone(),
            };
        }

        let bucket = Bucket::from_score(score);
        let tags = self.topics.tag(&normalized);
        let reply = self.compose_reply(bucket, &tags, rng);

        debug!(score, bucket = %bucket, tags = ?tags, "Message classified");

        Classification {
            score,
            crisis: None,
            bucket: Some(bucket),
            tags,
            reply,
        }
    }

    fn compose_reply(&self, bucket: Bucket, tags: &[String], rng: &mut dyn ReplyRng) -> String {
        let pool = match bucket {
            Bucket::Positive => &self.lexicon.positive_responses,
            Bucket::Neutral => &self.lexicon.neutral_responses,
            Bucket::Negative => &self.lexicon.negative_responses,
        };
        let mut reply = choose(rng, pool).unwrap_or_default().to_string();

        match bucket {
            Bucket::Negative => {
                if let Some(tip) = choose(rng, &self.lexicon.coping_tips) {
                    reply.push_str(" Tip: ");
                    reply.push_str(tip);
                }
            }
            Bucket::Neutral if !tags.is_empty() => {
                reply.push_str(&format!(
                    " I noticed you're talking about {}. Want tips related to that?",
                    tags.join(", ")
                ));
            }
            _ => {}
        }

        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries_are_exact() {
        assert_eq!(Bucket::from_score(0.05), Bucket::Positive);
        assert_eq!(Bucket::from_score(0.0499), Bucket::Neutral);
        assert_eq!(Bucket::from_score(-0.05), Bucket::Negative);
        assert_eq!(Bucket::from_score(-0.0499), Bucket::Neutral);
        assert_eq!(Bucket::from_score(0.0), Bucket::Neutral);
        assert_eq!(Bucket::from_score(1.0), Bucket::Positive);
        assert_eq!(Bucket::from_score(-1.0), Bucket::Negative);
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(Bucket::Positive.to_string(), "positive");
        assert_eq!(Bucket::Negative.label(), "negative");
    }
}
