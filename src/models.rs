use std::collections::BTreeMap;
use std::fmt;

use chrono::{Local, NaiveDate};

/// Every stored entry, keyed by calendar date. Iteration is ascending by date.
pub type EntryCollection = BTreeMap<NaiveDate, String>;

/// Mood score per date for the dates inside the trend window that have an entry.
pub type MoodTrend = BTreeMap<NaiveDate, u8>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub date: NaiveDate,
    pub text: String,
}

impl Entry {
    pub fn new(date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            date,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflectionResult {
    /// Fixed supportive message; the text provider was never called.
    SafetyConcern(String),
    Reflection(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodLabel {
    Positive,
    Neutral,
    Negative,
    Concerning,
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoodLabel::Positive => write!(f, "positive"),
            MoodLabel::Neutral => write!(f, "neutral"),
            MoodLabel::Negative => write!(f, "negative"),
            MoodLabel::Concerning => write!(f, "concerning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStats {
    pub word_count: usize,
    pub char_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodPoint {
    pub date: NaiveDate,
    pub score: u8,
    pub label: MoodLabel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub total_entries: usize,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub today_stats: Option<EntryStats>,
    pub mood: Option<Vec<MoodPoint>>,
}

/// The current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
