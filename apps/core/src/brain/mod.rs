//! # Brain Module
//!
//! Rule-based message analysis for MoodBot. No model, no network: a lexicon
//! scorer, a crisis phrase detector, a topic tagger and canned reply pools.
//!
//! ## Components
//! - `normalize`: whitespace/case normalization shared by every matcher
//! - `sentiment`: `SentimentScorer` trait and the bundled lexicon scorer
//! - `valence`: word valence table used by the bundled scorer
//! - `crisis`: word-bounded crisis phrase detection
//! - `topics`: substring topic tagging
//! - `lexicon`: the fixed phrase tables
//! - `random`: injectable source for template selection
//! - `responder`: main orchestrator

pub mod crisis;
pub mod lexicon;
pub mod normalize;
pub mod random;
pub mod responder;
pub mod sentiment;
pub mod topics;
pub mod valence;

pub use lexicon::Lexicon;
pub use random::{ReplyRng, StdReplyRng};
pub use responder::{Bucket, Classification, CrisisTrigger, Responder};
pub use sentiment::{LexiconScorer, SentimentScorer};
