//! Keyword lexicons used by the safety gate and the mood scorer.
//!
//! Matching is plain substring containment on the lower-cased text: no
//! tokenizing, stemming or negation handling. A phrase counts once per text no
//! matter how often it occurs.

const SAFETY_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "want to die",
    "hurt myself",
    "kill others",
    "hurt people",
    "destroy everything",
    "violence",
];

const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "good",
    "great",
    "amazing",
    "wonderful",
    "excited",
    "joy",
    "love",
    "grateful",
    "blessed",
    "accomplished",
    "proud",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "bad",
    "terrible",
    "awful",
    "depressed",
    "angry",
    "frustrated",
    "worried",
    "anxious",
    "stressed",
    "disappointed",
    "tired",
];

/// Something that can recognise a class of text. Swap in a stronger
/// implementation without touching the scoring or gating code.
pub trait TextClassifier {
    /// Number of distinct indicators found in `text`.
    fn count_matches(&self, text: &str) -> usize;

    fn matches(&self, text: &str) -> bool {
        self.count_matches(text) > 0
    }
}

#[derive(Debug, Clone)]
pub struct KeywordList {
    phrases: Vec<String>,
}

impl KeywordList {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|phrase| phrase.as_ref().trim().to_lowercase())
            .filter(|phrase| !phrase.is_empty())
            .collect();
        Self { phrases }
    }

    /// Self-harm, harm-to-others and violence phrases.
    pub fn safety() -> Self {
        Self::new(SAFETY_PHRASES)
    }

    pub fn positive() -> Self {
        Self::new(POSITIVE_WORDS)
    }

    pub fn negative() -> Self {
        Self::new(NEGATIVE_WORDS)
    }
}

impl TextClassifier for KeywordList {
    fn count_matches(&self, text: &str) -> usize {
        let lowered = text.to_lowercase();
        self.phrases
            .iter()
            .filter(|phrase| lowered.contains(phrase.as_str()))
            .count()
    }

    fn matches(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.phrases
            .iter()
            .any(|phrase| lowered.contains(phrase.as_str()))
    }
}
