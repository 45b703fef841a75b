//! Mood check-in: classify a one-word feeling and pick a reply.

use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: [&str; 5] = ["good", "happy", "great", "fantastic", "awesome"];
const NEUTRAL_WORDS: [&str; 3] = ["neutral", "okay", "fine"];
const NEGATIVE_WORDS: [&str; 5] = ["sad", "down", "bad", "unhappy", "frustrated"];

const POSITIVE_REPLIES: [&str; 3] = [
    "That's fantastic to hear! What’s been the highlight of your day?",
    "I’m so happy for you! What are some things you’re grateful for right now?",
    "Great to hear you’re feeling good! Is there something special you’ve done today to boost your mood?",
];

const NEUTRAL_REPLIES: [&str; 2] = [
    "Thanks for sharing that. Neutral days can be a great opportunity to reflect and recharge.",
    "Sometimes neutral days can feel like a pause. What’s one small thing you can do to bring a bit of joy?",
];

const NEGATIVE_REPLIES: [&str; 1] = [
    "I'm sorry to hear that you're feeling sad. It's important to acknowledge these feelings.\nHere are some activities that might help: Consider journaling or exploring mindfulness techniques.",
];

const FALLBACK_REPLIES: [&str; 1] =
    ["That's an interesting feeling. Can you tell me more about it?"];

/// Classification of a reported feeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodClass {
    Positive,
    Neutral,
    Negative,
    Unrecognized,
}

impl MoodClass {
    /// Classifies a feeling after trimming and lowercasing it.
    ///
    /// Matching is exact: punctuation or extra words fall through to
    /// `Unrecognized`.
    pub fn classify(feeling: &str) -> Self {
        let normalized = feeling.trim().to_lowercase();
        let word = normalized.as_str();
        if POSITIVE_WORDS.contains(&word) {
            MoodClass::Positive
        } else if NEUTRAL_WORDS.contains(&word) {
            MoodClass::Neutral
        } else if NEGATIVE_WORDS.contains(&word) {
            MoodClass::Negative
        } else {
            MoodClass::Unrecognized
        }
    }

    /// Candidate replies for this class; one is chosen uniformly.
    pub fn replies(&self) -> &'static [&'static str] {
        match self {
            MoodClass::Positive => &POSITIVE_REPLIES,
            MoodClass::Neutral => &NEUTRAL_REPLIES,
            MoodClass::Negative => &NEGATIVE_REPLIES,
            MoodClass::Unrecognized => &FALLBACK_REPLIES,
        }
    }
}

/// Reply produced for a mood check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodReflection {
    pub mood: MoodClass,
    pub response: &'static str,
}
