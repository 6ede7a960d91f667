use super::lexicon::Topic;

/// Tags text with every topic whose keywords occur as plain substrings.
pub struct TopicTagger {
    topics: Vec<Topic>,
}

impl TopicTagger {
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    /// Returns matched topic names in table order.
    pub fn tag(&self, normalized: &str) -> Vec<String> {
        self.topics
            .iter()
            .filter(|topic| topic.keywords.iter().any(|k| normalized.contains(k.as_str())))
            .map(|topic| topic.name.clone())
            .collect()
    }
}
