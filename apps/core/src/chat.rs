use crate::brain::{Classification, ReplyRng, Responder};
use crate::config::{DEFAULT_HISTORY_LIMIT, DEFAULT_TREND_LIMIT};
use crate::database::ConversationLog;
use crate::error::AppError;
use crate::models::Message;
use crate::mood::{daily_trend, DailyMood};
use tracing::{info, instrument, warn};

/// Everything produced by one turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub classification: Classification,
    /// Stored user row, carrying the score.
    pub user_message: Message,
    /// Stored bot row, without score.
    pub bot_message: Message,
}

/// Classifies messages and records each turn in the conversation log.
///
/// The scorer, phrase tables, random source and log are all injected, so tests
/// can pin the reply and swap the storage.
pub struct ChatService<L: ConversationLog> {
    responder: Responder,
    log: L,
    rng: Box<dyn ReplyRng>,
    history_limit: u32,
    trend_limit: u32,
}

impl<L: ConversationLog> ChatService<L> {
    pub fn new(responder: Responder, log: L, rng: Box<dyn ReplyRng>) -> Self {
        Self {
            responder,
            log,
            rng,
            history_limit: DEFAULT_HISTORY_LIMIT,
            trend_limit: DEFAULT_TREND_LIMIT,
        }
    }

    /// Overrides how many rows `history` and `mood_trend` read.
    pub fn with_limits(mut self, history_limit: u32, trend_limit: u32) -> Self {
        self.history_limit = history_limit;
        self.trend_limit = trend_limit;
        self
    }

    /// Processes one user message.
    ///
    /// 1. Classifies the text (crisis override, bucket, tags, reply).
    /// 2. Stores the user row with its score and the bot row in one write.
    ///
    /// A storage failure fails the whole turn; nothing is half-written.
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn handle_turn(&mut self, user: &str, text: &str) -> Result<TurnOutcome, AppError> {
        let classification = self.responder.classify(text, self.rng.as_mut());

        if let Some(trigger) = classification.crisis {
            warn!(?trigger, score = classification.score, "Crisis override triggered");
        }

        let (user_message, bot_message) = self
            .log
            .record_turn(user, text, classification.score, &classification.reply)
            .await?;

        info!(
            user_id = user_message.id,
            bot_id = bot_message.id,
            bucket = classification.bucket.map(|b| b.label()).unwrap_or("crisis"),
            "Turn recorded"
        );

        Ok(TurnOutcome {
            classification,
            user_message,
            bot_message,
        })
    }

    /// Most recent messages of `user`, oldest first.
    pub async fn history(&self, user: &str) -> Result<Vec<Message>, AppError> {
        self.log.history(user, self.history_limit).await
    }

    /// Daily mood trend over the user's recent messages.
    pub async fn mood_trend(&self, user: &str) -> Result<Vec<DailyMood>, AppError> {
        let messages = self.log.history(user, self.trend_limit).await?;
        Ok(daily_trend(&messages))
    }
}
