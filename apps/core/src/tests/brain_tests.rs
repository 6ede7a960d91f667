//! Brain Module Tests
//!
//! Crisis override, bucket boundaries, topic tagging and reply composition of
//! the responder, with the scorer and random source pinned by test doubles.

use super::support::{responder_with_score, FixedPick, FixedScorer};
use crate::brain::lexicon::{
    COPING_TIPS, CRISIS_MESSAGE, NEGATIVE_RESPONSES, NEUTRAL_RESPONSES, POSITIVE_RESPONSES,
};
use crate::brain::{Bucket, CrisisTrigger, Lexicon, LexiconScorer, Responder, StdReplyRng};
use std::sync::Arc;

fn bundled_responder() -> Responder {
    Responder::new(Arc::new(LexiconScorer::new()), Lexicon::default())
        .expect("Failed to build responder")
}

#[cfg(test)]
mod crisis_override_tests {
    use super::*;

    #[test]
    fn test_crisis_phrase_overrides_any_score() {
        for score in [0.95, 0.0, -0.3] {
            let responder = responder_with_score(score);
            let result = responder.classify("I want to end my life", &mut FixedPick(0));
            assert_eq!(result.reply, CRISIS_MESSAGE);
            assert_eq!(result.crisis, Some(CrisisTrigger::Phrase));
            assert!(result.is_crisis());
            assert_eq!(result.bucket, None);
            assert!(result.tags.is_empty());
            assert_eq!(result.score, score);
        }
    }

    #[test]
    fn test_crisis_phrase_survives_normalization() {
        let responder = responder_with_score(0.5);
        for text in ["I   CAN'T GO ON", "i cant\tgo on anymore", "Thinking about Suicide."] {
            let result = responder.classify(text, &mut FixedPick(0));
            assert_eq!(result.reply, CRISIS_MESSAGE, "Expected crisis for '{}'", text);
        }
    }

    #[test]
    fn test_typographic_apostrophe_still_triggers_crisis() {
        let responder = responder_with_score(0.2);
        let result = responder.classify("I can\u{2019}t go on", &mut FixedPick(0));
        assert_eq!(result.crisis, Some(CrisisTrigger::Phrase));
    }

    #[test]
    fn test_severe_score_triggers_override_without_phrase() {
        for score in [-0.85, -0.9, -1.0] {
            let responder = responder_with_score(score);
            let result = responder.classify("everything is exam stress", &mut FixedPick(0));
            assert_eq!(result.reply, CRISIS_MESSAGE);
            assert_eq!(result.crisis, Some(CrisisTrigger::SevereScore));
            assert!(result.tags.is_empty(), "crisis replies carry no tags");
        }
    }

    #[test]
    fn test_just_above_severe_threshold_is_plain_negative() {
        let responder = responder_with_score(-0.8499);
        let result = responder.classify("rough day", &mut FixedPick(0));
        assert!(!result.is_crisis());
        assert_eq!(result.bucket, Some(Bucket::Negative));
    }

    #[test]
    fn test_bundled_scorer_can_reach_severe_threshold() {
        let responder = bundled_responder();
        let result = responder.classify(
            "Worst day ever, I hate everything and feel awful, horrible and miserable",
            &mut FixedPick(0),
        );
        assert!(result.score <= -0.85, "score was {}", result.score);
        assert_eq!(result.crisis, Some(CrisisTrigger::SevereScore));
    }
}

#[cfg(test)]
mod bucket_tests {
    use super::*;

    fn bucket_for(score: f64) -> Option<Bucket> {
        responder_with_score(score)
            .classify("just a message", &mut FixedPick(0))
            .bucket
    }

    #[test]
    fn test_bucket_boundaries_through_responder() {
        assert_eq!(bucket_for(0.05), Some(Bucket::Positive));
        assert_eq!(bucket_for(0.0499), Some(Bucket::Neutral));
        assert_eq!(bucket_for(-0.05), Some(Bucket::Negative));
        assert_eq!(bucket_for(-0.0499), Some(Bucket::Neutral));
    }

    #[test]
    fn test_positive_reply_has_no_suffix_even_with_tags() {
        let responder = responder_with_score(0.6);
        let result = responder.classify("The exam went great", &mut FixedPick(0));
        assert_eq!(result.tags, vec!["exam"]);
        assert_eq!(result.reply, POSITIVE_RESPONSES[0]);
    }
}

#[cfg(test)]
mod reply_tests {
    use super::*;

    #[test]
    fn test_stressed_exam_example_with_negative_score() {
        let responder = responder_with_score(-0.2);
        let result = responder.classify(
            "I feel so stressed about my exam tomorrow",
            &mut FixedPick(1),
        );
        assert_eq!(result.tags, vec!["stress", "exam"]);
        assert_eq!(result.bucket, Some(Bucket::Negative));
        assert_eq!(
            result.reply,
            format!("{} Tip: {}", NEGATIVE_RESPONSES[1], COPING_TIPS[1])
        );
        assert!(!result.reply.contains("I noticed you're talking about"));
    }

    #[test]
    fn test_stressed_exam_example_with_bundled_scorer() {
        let responder = bundled_responder();
        let result = responder.classify(
            "I feel so stressed about my exam tomorrow",
            &mut FixedPick(0),
        );
        assert_eq!(result.bucket, Some(Bucket::Negative));
        assert_eq!(result.tags, vec!["stress", "exam"]);
        assert!(result.reply.starts_with(NEGATIVE_RESPONSES[0]));
        assert!(result.reply.contains(" Tip: "));
    }

    #[test]
    fn test_distress_words_get_a_coping_tip_from_bundled_scorer() {
        let responder = bundled_responder();
        for text in [
            "I feel suicidal",
            "I feel heartbroken",
            "my exam was a disaster",
        ] {
            let result = responder.classify(text, &mut FixedPick(0));
            assert_eq!(result.bucket, Some(Bucket::Negative), "bucket for '{}'", text);
            assert!(result.reply.contains(" Tip: "), "reply for '{}'", text);
        }
    }

    #[test]
    fn test_neutral_with_tags_lists_them_in_table_order() {
        let responder = responder_with_score(0.0);
        let result = responder.classify(
            "Can't sleep before the interview, so much stress",
            &mut FixedPick(2),
        );
        assert_eq!(result.tags, vec!["stress", "sleep", "exam"]);
        assert_eq!(
            result.reply,
            format!(
                "{} I noticed you're talking about stress, sleep, exam. Want tips related to that?",
                NEUTRAL_RESPONSES[2]
            )
        );
    }

    #[test]
    fn test_neutral_without_tags_is_template_only() {
        let responder = responder_with_score(0.01);
        let result = responder.classify("The bus was on time", &mut FixedPick(1));
        assert!(result.tags.is_empty());
        assert_eq!(result.reply, NEUTRAL_RESPONSES[1]);
    }

    #[test]
    fn test_empty_input_is_neutral_with_zero_score() {
        let responder = bundled_responder();
        let result = responder.classify("", &mut FixedPick(0));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.bucket, Some(Bucket::Neutral));
        assert!(result.tags.is_empty());
        assert!(!result.is_crisis());
        assert_eq!(result.reply, NEUTRAL_RESPONSES[0]);
    }

    #[test]
    fn test_replies_always_come_from_the_bucket_pool() {
        let responder = responder_with_score(-0.3);
        let mut rng = StdReplyRng::seeded(11);
        for _ in 0..30 {
            let result = responder.classify("meh", &mut rng);
            let (template, tip) = result
                .reply
                .split_once(" Tip: ")
                .expect("negative replies carry a tip");
            assert!(NEGATIVE_RESPONSES.contains(&template));
            assert!(COPING_TIPS.contains(&tip));
        }
    }

    #[test]
    fn test_custom_lexicon_is_honoured() {
        let mut lexicon = Lexicon::default();
        lexicon.positive_responses = vec!["Nice one.".to_string()];
        lexicon.crisis_phrases = vec!["give up".to_string()];
        let responder = Responder::new(Arc::new(FixedScorer(0.5)), lexicon)
            .expect("Failed to build responder");

        assert_eq!(responder.classify("good stuff", &mut FixedPick(3)).reply, "Nice one.");
        assert!(responder.classify("I give up", &mut FixedPick(0)).is_crisis());
        assert!(!responder.classify("I want to die", &mut FixedPick(0)).is_crisis());
    }
}
