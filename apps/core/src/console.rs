//! Line-oriented chat front end.
//!
//! Reads one line at a time, treats commands locally and everything else as a
//! turn for the `ChatService`. Output goes to any `Write`, input comes from any
//! async line source, so a whole session can be scripted in tests.

use crate::chat::ChatService;
use crate::database::ConversationLog;
use crate::error::AppError;
use crate::models::{Message, Role};
use crate::mood::{DailyMood, MoodSummary};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::error;

pub const HELPLINE_NOTE: &str =
    "If you're in India, call AASRA 91-22-2754-6669, or your local emergency number.";

const BAR_WIDTH: f64 = 20.0;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line, ignored.
    Empty,
    Exit,
    Help,
    /// Raw rows with scores and timestamps.
    History,
    /// Daily mood trend.
    Mood,
    SwitchUser(String),
    /// Anything starting with a single `/` that is not a known command.
    Unknown(String),
    /// A message for the bot, exactly as typed.
    Say(String),
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
        return Command::Exit;
    }

    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Say(line.to_string());
    };
    // "//" escapes a message that itself starts with "/".
    if rest.starts_with('/') {
        return match line.find('/') {
            Some(idx) => Command::Say(format!("{}{}", &line[..idx], &line[idx + 1..])),
            None => Command::Say(line.to_string()),
        };
    }

    let (name, argument) = match rest.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (rest, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "exit" | "quit" => Command::Exit,
        "help" => Command::Help,
        "history" => Command::History,
        "mood" => Command::Mood,
        "user" if !argument.is_empty() => Command::SwitchUser(argument.to_string()),
        _ => Command::Unknown(trimmed.to_string()),
    }
}

/// Interactive session bound to one output stream.
pub struct Console<L: ConversationLog, W: Write> {
    service: ChatService<L>,
    user: String,
    out: W,
}

impl<L: ConversationLog, W: Write> Console<L, W> {
    pub fn new(service: ChatService<L>, user: String, out: W) -> Self {
        Self { service, user, out }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until `exit` or end of input.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<(), AppError> {
        self.banner()?;
        self.show_conversation().await?;

        let mut lines = input.lines();
        loop {
            write!(self.out, "\n{}> ", self.user)?;
            self.out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(self.out)?;
                break;
            };

            match parse_command(&line) {
                Command::Empty => {}
                Command::Exit => break,
                Command::Help => self.help()?,
                Command::History => self.show_raw_history().await?,
                Command::Mood => self.show_mood().await?,
                Command::SwitchUser(name) => {
                    self.user = name;
                    writeln!(self.out, "Now chatting as {}.", self.user)?;
                    self.show_conversation().await?;
                }
                Command::Unknown(command) => {
                    writeln!(self.out, "Unknown command: {}. Type /help for the list.", command)?;
                }
                Command::Say(text) => self.say(&text).await?,
            }
        }

        writeln!(
            self.out,
            "Take care. Your chat is stored locally. Not for clinical use."
        )?;
        self.out.flush()?;
        Ok(())
    }

    async fn say(&mut self, text: &str) -> Result<(), AppError> {
        match self.service.handle_turn(&self.user, text).await {
            Ok(outcome) => {
                writeln!(self.out, "Bot: {}", outcome.classification.reply)?;
                if outcome.classification.is_crisis() {
                    writeln!(self.out, "{}", HELPLINE_NOTE)?;
                }
            }
            Err(e) => {
                error!("Turn failed: {}", e);
                writeln!(self.out, "Sorry, your message could not be saved: {}", e)?;
            }
        }
        Ok(())
    }

    fn banner(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "Personal Mental Health Chatbot")?;
        writeln!(
            self.out,
            "Safety note: this bot is supportive, not a replacement for professional care."
        )?;
        writeln!(
            self.out,
            "If you are in immediate danger, contact local emergency services."
        )?;
        writeln!(self.out, "Type 'exit' to end, /help for commands.")?;
        Ok(())
    }

    fn help(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "Commands:")?;
        writeln!(self.out, "  /history      raw chat history with scores")?;
        writeln!(self.out, "  /mood         daily average sentiment")?;
        writeln!(self.out, "  /user <name>  switch to another name")?;
        writeln!(self.out, "  exit          end the session")?;
        writeln!(
            self.out,
            "Other lines starting with / are not sent. Use // to send a message that starts with /."
        )?;
        Ok(())
    }

    async fn show_conversation(&mut self) -> Result<(), AppError> {
        let history = self.service.history(&self.user).await?;
        if history.is_empty() {
            writeln!(
                self.out,
                "No chat history yet. Start a conversation below."
            )?;
            return Ok(());
        }
        writeln!(self.out, "Conversation")?;
        for message in &history {
            let speaker = match message.role {
                Role::User => "You",
                Role::Bot => "Bot",
            };
            writeln!(self.out, "{}: {}", speaker, message.text)?;
        }
        Ok(())
    }

    async fn show_raw_history(&mut self) -> Result<(), AppError> {
        let history = self.service.history(&self.user).await?;
        if history.is_empty() {
            writeln!(self.out, "No history to show.")?;
            return Ok(());
        }
        writeln!(self.out, "Raw chat history")?;
        for message in &history {
            writeln!(self.out, "{}", format_raw(message))?;
        }
        Ok(())
    }

    async fn show_mood(&mut self) -> Result<(), AppError> {
        let trend = self.service.mood_trend(&self.user).await?;
        let Some(summary) = MoodSummary::from_trend(&trend) else {
            writeln!(self.out, "No mood history yet. Start chatting!")?;
            return Ok(());
        };
        writeln!(self.out, "Mood trend (daily average sentiment)")?;
        for day in &trend {
            writeln!(self.out, "{}", format_day(day))?;
        }
        writeln!(
            self.out,
            "Latest: {:+.3} ({}), change over {} day(s): {:+.3}",
            summary.latest, summary.bucket, summary.days, summary.change
        )?;
        Ok(())
    }
}

fn format_raw(message: &Message) -> String {
    let score = message
        .sentiment_score
        .map(|s| format!("{:+.4}", s))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}  {:<4}  {:>7}  {}",
        message.timestamp.to_rfc3339(),
        message.role.as_str(),
        score,
        message.text
    )
}

/// One trend line: date, average and a bar scaled from [-1, 1].
fn format_day(day: &DailyMood) -> String {
    let filled = (((day.average + 1.0) / 2.0) * BAR_WIDTH).round().clamp(0.0, BAR_WIDTH) as usize;
    let marker = if day.samples == 0 { " (carried)" } else { "" };
    format!(
        "{}  {:+.3}  {}{}",
        day.date,
        day.average,
        "#".repeat(filled),
        marker
    )
}
