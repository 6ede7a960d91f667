//! Fixed phrase tables used by the responder.
//!
//! Everything here is plain immutable data. `Lexicon::default()` builds the
//! bundled tables once; tests may construct their own.

/// Phrases that trigger the crisis override when found as whole words.
pub const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "harm myself",
    "want to die",
    "i can't go on",
    "i cant go on",
];

/// Topic name and the substrings that tag it, in reporting order.
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("stress", &["stress", "stressed", "overwhelmed"]),
    ("anxiety", &["anxious", "anxiety", "panic", "worry"]),
    ("depressed", &["depress", "sad", "unhappy", "hopeless", "down"]),
    ("sleep", &["insomnia", "sleep", "tired", "sleeping"]),
    ("exam", &["exam", "test", "interview", "deadline"]),
];

pub const POSITIVE_RESPONSES: &[&str] = &[
    "That's wonderful to hear — keep that energy going! Anything you want to celebrate?",
    "Awesome! I'm glad things are going well. Want to share more?",
    "Great! Celebrating small wins is powerful — tell me one thing that went well today.",
];

pub const NEUTRAL_RESPONSES: &[&str] = &[
    "I see. Tell me a bit more about what's on your mind.",
    "Okay — would you like a breathing exercise or a quick mood check?",
    "I understand. Want to try a short grounding exercise together?",
];

pub const NEGATIVE_RESPONSES: &[&str] = &[
    "I'm sorry you're feeling this way. Would you like a simple breathing exercise or a coping tip?",
    "That sounds tough. I'm here for you — do you want a grounding exercise or a small distraction?",
    "I'm listening. If you want, we can try a 1-minute breathing exercise together.",
];

pub const COPING_TIPS: &[&str] = &[
    "Try the 4-4-4 breathing: inhale 4s, hold 4s, exhale 4s. Do this for 1-2 minutes.",
    "Take a short walk, even 5–10 minutes. Movement can help reset your mood.",
    "Write down 3 things you did well today — little wins matter.",
    "Listen to a calming song you like for 5 minutes or try a guided breathing app.",
];

pub const CRISIS_MESSAGE: &str = "I’m really sorry you’re feeling this way. If you are in immediate danger or think you might \
harm yourself, please contact your local emergency services right now. \
If you can, reach out to someone you trust or a mental health professional.";

/// A named topic and the substrings that reveal it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub name: String,
    pub keywords: Vec<String>,
}

/// All phrase tables the responder needs.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub crisis_phrases: Vec<String>,
    pub topics: Vec<Topic>,
    pub positive_responses: Vec<String>,
    pub neutral_responses: Vec<String>,
    pub negative_responses: Vec<String>,
    pub coping_tips: Vec<String>,
    pub crisis_message: String,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            crisis_phrases: owned(CRISIS_PHRASES),
            topics: TOPIC_KEYWORDS
                .iter()
                .map(|(name, keywords)| Topic {
                    name: name.to_string(),
                    keywords: owned(keywords),
                })
                .collect(),
            positive_responses: owned(POSITIVE_RESPONSES),
            neutral_responses: owned(NEUTRAL_RESPONSES),
            negative_responses: owned(NEGATIVE_RESPONSES),
            coping_tips: owned(COPING_TIPS),
            crisis_message: CRISIS_MESSAGE.to_string(),
        }
    }
}
