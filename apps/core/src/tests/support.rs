//! Test doubles shared by the suites.

use crate::brain::{Lexicon, ReplyRng, Responder, SentimentScorer};
use crate::database::ConversationLog;
use crate::error::AppError;
use crate::models::{Message, Role};
use async_trait::async_trait;
use std::sync::Arc;

/// Scorer that ignores the text and returns a fixed compound score.
pub struct FixedScorer(pub f64);

impl SentimentScorer for FixedScorer {
    fn compound(&self, _normalized: &str) -> f64 {
        self.0
    }
}

/// Random source that always picks the same index (clamped to the pool).
pub struct FixedPick(pub usize);

impl ReplyRng for FixedPick {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

/// Responder over the bundled tables with a fixed score.
pub fn responder_with_score(score: f64) -> Responder {
    Responder::new(Arc::new(FixedScorer(score)), Lexicon::default())
        .expect("Failed to build responder")
}

/// Log whose writes always fail, as if the database were gone.
pub struct FailingLog;

#[async_trait]
impl ConversationLog for FailingLog {
    async fn append(
        &self,
        _user: &str,
        _role: Role,
        _text: &str,
        _score: Option<f64>,
    ) -> Result<Message, AppError> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }

    async fn history(&self, _user: &str, _limit: u32) -> Result<Vec<Message>, AppError> {
        Ok(Vec::new())
    }
}
