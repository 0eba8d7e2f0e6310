use chrono::{Duration, NaiveDate};

use crate::lexicon::{KeywordList, TextClassifier};
use crate::models::{EntryCollection, MoodLabel, MoodPoint, MoodTrend};
use crate::safety::SafetyGate;

pub const MIN_ENTRIES_FOR_TREND: usize = 3;
pub const TREND_WINDOW_DAYS: i64 = 7;
pub const NEUTRAL_SCORE: u8 = 5;
pub const MAX_SCORE: u8 = 10;

/// Lexical mood heuristic: one point per positive word, minus one per negative
/// word, centred on [`NEUTRAL_SCORE`] and clamped to `0..=MAX_SCORE`.
#[derive(Debug, Clone)]
pub struct MoodScorer<P = KeywordList, N = KeywordList> {
    positive: P,
    negative: N,
}

impl Default for MoodScorer {
    fn default() -> Self {
        Self::new(KeywordList::positive(), KeywordList::negative())
    }
}

impl<P: TextClassifier, N: TextClassifier> MoodScorer<P, N> {
    pub fn new(positive: P, negative: N) -> Self {
        Self { positive, negative }
    }

    pub fn score(&self, text: &str) -> u8 {
        let positive = self.positive.count_matches(text) as i64;
        let negative = self.negative.count_matches(text) as i64;
        let raw = positive - negative + i64::from(NEUTRAL_SCORE);
        raw.clamp(0, i64::from(MAX_SCORE)) as u8
    }

    /// Scores the entries written in the last [`TREND_WINDOW_DAYS`] days,
    /// `today` included. Days without an entry are left out rather than scored.
    ///
    /// Returns `None` when the journal holds fewer than
    /// [`MIN_ENTRIES_FOR_TREND`] entries or none of them fall in the window.
    pub fn analyze_trends(
        &self,
        entries: &EntryCollection,
        today: NaiveDate,
    ) -> Option<MoodTrend> {
        if entries.len() < MIN_ENTRIES_FOR_TREND {
            return None;
        }

        let trend: MoodTrend = window_dates(today)
            .filter_map(|date| entries.get(&date).map(|text| (date, self.score(text))))
            .collect();

        if trend.is_empty() {
            None
        } else {
            Some(trend)
        }
    }
}

/// `today` and the preceding days of the trend window, newest first.
pub fn window_dates(today: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..TREND_WINDOW_DAYS).map(move |offset| today - Duration::days(offset))
}

pub fn analyze_mood_trends(entries: &EntryCollection, today: NaiveDate) -> Option<MoodTrend> {
    MoodScorer::default().analyze_trends(entries, today)
}

impl MoodLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s > NEUTRAL_SCORE => MoodLabel::Positive,
            s if s == NEUTRAL_SCORE => MoodLabel::Neutral,
            _ => MoodLabel::Negative,
        }
    }
}

/// Attaches a label to every scored date. Entries the safety gate flags are
/// labelled concerning whatever their score.
pub fn label_trend<C: TextClassifier>(
    trend: &MoodTrend,
    entries: &EntryCollection,
    safety: &SafetyGate<C>,
) -> Vec<MoodPoint> {
    trend
        .iter()
        .map(|(date, score)| {
            let flagged = entries
                .get(date)
                .is_some_and(|text| safety.is_concerning(text));
            let label = if flagged {
                MoodLabel::Concerning
            } else {
                MoodLabel::from_score(*score)
            };
            MoodPoint {
                date: *date,
                score: *score,
                label,
            }
        })
        .collect()
}
