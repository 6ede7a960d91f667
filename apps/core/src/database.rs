use crate::error::AppError;
use crate::models::{Message, MessageRow, Role};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How long a writer waits for another connection's write lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(10);

/// Writes take the lock before reading the last timestamp; a deferred
/// read-then-write transaction gets SQLITE_BUSY without waiting.
const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

/// Append-only, per-user ordered message log.
///
/// Implementations must surface every write failure; a lost row breaks the
/// history the mood trend is computed from.
#[async_trait]
pub trait ConversationLog: Send + Sync {
    /// Writes one row with a store-assigned timestamp and id.
    async fn append(
        &self,
        user: &str,
        role: Role,
        text: &str,
        score: Option<f64>,
    ) -> Result<Message, AppError>;

    /// Returns up to `limit` most recent rows of `user`, oldest first.
    async fn history(&self, user: &str, limit: u32) -> Result<Vec<Message>, AppError>;

    /// Writes the user row and the bot row of one turn.
    async fn record_turn(
        &self,
        user: &str,
        user_text: &str,
        score: f64,
        bot_text: &str,
    ) -> Result<(Message, Message), AppError> {
        let user_message = self.append(user, Role::User, user_text, Some(score)).await?;
        let bot_message = self.append(user, Role::Bot, bot_text, None).await?;
        Ok((user_message, bot_message))
    }
}

/// SQLite-backed conversation log.
#[derive(Clone)]
pub struct ConversationStore {
    pool: SqlitePool,
}

impl ConversationStore {
    /// Opens (creating if missing) the database file and initializes the schema.
    pub async fn open(path: &Path) -> Result<Self, AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                info!("Creating database directory: {:?}", parent);
                std::fs::create_dir_all(parent)?;
            }
        }

        info!("Opening conversation store at: {}", path.display());

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    /// Private in-memory database, gone when the store is dropped.
    pub async fn in_memory() -> Result<Self, AppError> {
        // Every in-memory connection is its own database, so pin a single one.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool and makes sure the schema exists.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, AppError> {
        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Creates the `messages` table and its index if absent. Safe to call repeatedly.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user TEXT NOT NULL,
                role TEXT NOT NULL,
                text TEXT NOT NULL,
                compound REAL,
                timestamp TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_messages_user_id ON messages (user, id);
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Conversation store schema ready.");
        Ok(())
    }

    /// Underlying pool, for raw queries against the `messages` table.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Timestamp for the next row: now, but never earlier than the last stored row.
    async fn next_timestamp(conn: &mut SqliteConnection) -> Result<DateTime<Utc>, AppError> {
        let now = Utc::now();
        let last: Option<String> =
            sqlx::query_scalar("SELECT timestamp FROM messages ORDER BY id DESC LIMIT 1")
                .fetch_optional(&mut *conn)
                .await?;

        let Some(last) = last else {
            return Ok(now);
        };

        match DateTime::parse_from_rfc3339(&last) {
            Ok(previous) => Ok(now.max(previous.with_timezone(&Utc))),
            Err(e) => {
                warn!("Ignoring unparsable timestamp '{}' of last row: {}", last, e);
                Ok(now)
            }
        }
    }

    async fn insert(
        conn: &mut SqliteConnection,
        user: &str,
        role: Role,
        text: &str,
        score: Option<f64>,
    ) -> Result<Message, AppError> {
        let timestamp = Self::next_timestamp(conn)
            .await?
            .to_rfc3339_opts(SecondsFormat::Micros, true);

        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (user, role, text, compound, timestamp)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, user, role, text, compound, timestamp
            "#,
        )
        .bind(user)
        .bind(role.as_str())
        .bind(text)
        .bind(score)
        .bind(&timestamp)
        .fetch_one(&mut *conn)
        .await?;

        debug!(id = row.id, role = %role, "Message appended");
        Message::try_from(row)
    }
}

#[async_trait]
impl ConversationLog for ConversationStore {
    async fn append(
        &self,
        user: &str,
        role: Role,
        text: &str,
        score: Option<f64>,
    ) -> Result<Message, AppError> {
        let mut tx = self.pool.begin_with(BEGIN_WRITE).await?;
        let message = Self::insert(&mut *tx, user, role, text, score).await?;
        tx.commit().await?;
        Ok(message)
    }

    async fn history(&self, user: &str, limit: u32) -> Result<Vec<Message>, AppError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, user, role, text, compound, timestamp
            FROM messages
            WHERE user = ?
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(user)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().rev().map(Message::try_from).collect()
    }

    async fn record_turn(
        &self,
        user: &str,
        user_text: &str,
        score: f64,
        bot_text: &str,
    ) -> Result<(Message, Message), AppError> {
        let mut tx = self.pool.begin_with(BEGIN_WRITE).await?;
        let user_message = Self::insert(&mut *tx, user, Role::User, user_text, Some(score)).await?;
        let bot_message = Self::insert(&mut *tx, user, Role::Bot, bot_text, None).await?;
        tx.commit().await?;
        Ok((user_message, bot_message))
    }
}
