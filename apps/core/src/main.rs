// MoodBot entry point
// Wires configuration, logging, the conversation store and the responder
// into the console loop.

use anyhow::Context;
use moodbot_core::brain::{Lexicon, LexiconScorer, ReplyRng, Responder, StdReplyRng};
use moodbot_core::chat::ChatService;
use moodbot_core::config::Config;
use moodbot_core::console::Console;
use moodbot_core::database::ConversationStore;
use moodbot_core::telemetry;
use std::sync::Arc;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment alone is enough.
    dotenv::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;
    telemetry::init_tracing(&config)?;

    info!(version = env!("CARGO_PKG_VERSION"), "MoodBot starting");

    let store = ConversationStore::open(&config.db_path)
        .await
        .with_context(|| format!("Failed to open {}", config.db_path.display()))?;
    info!(db_path = %config.db_path.display(), "Conversation store ready");

    let responder = Responder::new(Arc::new(LexiconScorer::new()), Lexicon::default())?;
    let rng: Box<dyn ReplyRng> = match config.reply_seed {
        Some(seed) => Box::new(StdReplyRng::seeded(seed)),
        None => Box::new(StdReplyRng::from_entropy()),
    };

    let service = ChatService::new(responder, store, rng)
        .with_limits(config.history_limit, config.trend_limit);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut console = Console::new(service, config.user.clone(), std::io::stdout());
    console.run(stdin).await?;

    info!("MoodBot stopped");
    Ok(())
}
