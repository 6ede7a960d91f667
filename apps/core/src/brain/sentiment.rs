//! Rule-based sentiment scoring.
//!
//! Sums word valences from a built-in lexicon, adjusted by boosters, negations,
//! a contrastive "but" and punctuation emphasis, then squashes the sum into a
//! compound score in [-1, 1]. Deterministic for a given input and lexicon.

use super::valence::VALENCE_LEXICON;
use std::collections::{HashMap, HashSet};

/// Anything that can turn normalized text into a compound score in [-1, 1].
pub trait SentimentScorer: Send + Sync {
    fn compound(&self, normalized: &str) -> f64;
}

/// Magnitude added by an intensifier, subtracted by a dampener.
const BOOSTER_INCREMENT: f64 = 0.293;
/// Multiplier applied to a valence preceded by a negation.
const NEGATION_SCALAR: f64 = -0.74;
/// Per "!" emphasis, up to `MAX_EXCLAMATIONS`.
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// Per "?" emphasis when there are two or three of them.
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;
/// Normalization constant approximating the maximum expected sum.
const ALPHA: f64 = 15.0;

/// Distance-to-scale of booster words preceding a sentiment word.
const BOOSTER_WINDOW: [(usize, f64); 3] = [(1, 1.0), (2, 0.95), (3, 0.9)];

const INTENSIFIERS: &[&str] = &[
    "absolutely", "amazingly", "completely", "considerably", "deeply", "especially", "entirely",
    "extremely", "fully", "greatly", "highly", "hugely", "incredibly", "intensely", "particularly",
    "really", "so", "substantially", "super", "thoroughly", "totally", "tremendously", "truly",
    "utterly", "very", "most", "more", "too",
];

const DAMPENERS: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "less", "little", "marginally", "occasionally",
    "partly", "scarcely", "slightly", "somewhat", "sorta",
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere", "cannot",
    "without", "cant", "dont", "doesnt", "didnt", "isnt", "arent", "wasnt", "werent", "wont",
    "wouldnt", "shouldnt", "couldnt", "havent", "hasnt", "hadnt", "aint",
];

/// Straight and typographic apostrophes, as typed on desktop and mobile keyboards.
const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Lexicon-and-rules scorer bundled with the crate.
pub struct LexiconScorer {
    valences: HashMap<&'static str, f64>,
    intensifiers: HashSet<&'static str>,
    dampeners: HashSet<&'static str>,
    negations: HashSet<&'static str>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            valences: VALENCE_LEXICON.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
            dampeners: DAMPENERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Splits on whitespace and strips surrounding punctuation; inner apostrophes stay.
    fn tokenize(text: &str) -> Vec<&str> {
        text.split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
            .collect()
    }

    fn booster(&self, word: &str) -> Option<f64> {
        if self.intensifiers.contains(word) {
            Some(BOOSTER_INCREMENT)
        } else if self.dampeners.contains(word) {
            Some(-BOOSTER_INCREMENT)
        } else {
            None
        }
    }

    fn is_negation(&self, word: &str) -> bool {
        let bare: String = word.chars().filter(|c| !APOSTROPHES.contains(c)).collect();
        self.negations.contains(bare.as_str())
            || APOSTROPHES
                .iter()
                .any(|a| word.ends_with(&format!("n{}t", a)))
    }

    fn valence_at(&self, tokens: &[&str], i: usize) -> f64 {
        let word = tokens[i];
        if self.booster(word).is_some() {
            return 0.0;
        }
        let Some(&base) = self.valences.get(word) else {
            return 0.0;
        };

        let mut valence = base;
        for (distance, scale) in BOOSTER_WINDOW {
            if i < distance {
                break;
            }
            if let Some(step) = self.booster(tokens[i - distance]) {
                let step = if base < 0.0 { -step } else { step };
                valence += step * scale;
            }
        }

        let negated = BOOSTER_WINDOW
            .iter()
            .any(|(distance, _)| i >= *distance && self.is_negation(tokens[i - distance]));
        if negated {
            valence *= NEGATION_SCALAR;
        }

        valence
    }

    fn punctuation_emphasis(text: &str) -> f64 {
        let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64;
        let questions = text.matches('?').count();
        let question_emphasis = match questions {
            0 | 1 => 0.0,
            2 | 3 => questions as f64 * QUESTION_INCREMENT,
            _ => MAX_QUESTION_EMPHASIS,
        };
        exclamations * EXCLAMATION_INCREMENT + question_emphasis
    }
}

impl SentimentScorer for LexiconScorer {
    fn compound(&self, normalized: &str) -> f64 {
        let tokens = Self::tokenize(normalized);
        let mut valences: Vec<f64> = (0..tokens.len()).map(|i| self.valence_at(&tokens, i)).collect();

        if let Some(pivot) = tokens.iter().position(|t| *t == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < pivot {
                    *v *= 0.5;
                } else if i > pivot {
                    *v *= 1.5;
                }
            }
        }

        let mut sum: f64 = valences.iter().sum();
        if sum == 0.0 {
            return 0.0;
        }

        let emphasis = Self::punctuation_emphasis(normalized);
        if sum > 0.0 {
            sum += emphasis;
        } else {
            sum -= emphasis;
        }

        (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}
