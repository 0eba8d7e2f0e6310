use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::{JournalError, JournalResult};
use crate::models::{Dashboard, Entry, EntryCollection, EntryStats, MoodPoint};
use crate::mood::{self, MAX_SCORE};
use crate::safety::SafetyGate;
use crate::streak;

pub fn entry_stats(text: &str) -> EntryStats {
    EntryStats {
        word_count: text.split_whitespace().count(),
        char_count: text.chars().count(),
    }
}

pub fn mood_points(entries: &EntryCollection, today: NaiveDate) -> Option<Vec<MoodPoint>> {
    let trend = mood::analyze_mood_trends(entries, today)?;
    Some(mood::label_trend(&trend, entries, &SafetyGate::default()))
}

pub fn build_dashboard(entries: &EntryCollection, today: NaiveDate) -> Dashboard {
    Dashboard {
        today,
        total_entries: entries.len(),
        current_streak: streak::current_streak(entries.keys(), today),
        longest_streak: streak::longest_streak(entries.keys()),
        today_stats: entries.get(&today).map(|text| entry_stats(text)),
        mood: mood_points(entries, today),
    }
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Your Journey ({})", dashboard.today);
    let _ = writeln!(output);

    if dashboard.total_entries == 0 {
        let _ = writeln!(
            output,
            "Start your journaling journey by writing your first entry."
        );
        return output;
    }

    let _ = writeln!(output, "- Total entries: {}", dashboard.total_entries);
    let _ = writeln!(output, "- Current streak: {} days", dashboard.current_streak);
    let _ = writeln!(output, "- Longest streak: {} days", dashboard.longest_streak);

    match dashboard.today_stats {
        Some(stats) => {
            let _ = writeln!(
                output,
                "- You've written today ({} words)",
                stats.word_count
            );
        }
        None => {
            let _ = writeln!(output, "- Haven't written today yet");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Mood Trend");
    output.push_str(&render_trend(dashboard.mood.as_deref()));

    output
}

pub fn render_trend(points: Option<&[MoodPoint]>) -> String {
    let mut output = String::new();

    let Some(points) = points else {
        let _ = writeln!(
            output,
            "Not enough recent entries for a mood trend (need 3 entries, one within the last week)."
        );
        return output;
    };

    for point in points {
        let filled = usize::from(point.score);
        let empty = usize::from(MAX_SCORE) - filled;
        let _ = writeln!(
            output,
            "{} {:>2}/{} {}{} {}",
            point.date,
            point.score,
            MAX_SCORE,
            "#".repeat(filled),
            ".".repeat(empty),
            point.label
        );
    }

    output
}

pub fn render_history(entries: &[Entry]) -> String {
    let mut output = String::new();

    if entries.is_empty() {
        let _ = writeln!(output, "No entries found.");
        return output;
    }

    for entry in entries {
        let stats = entry_stats(&entry.text);
        let _ = writeln!(output, "## {} - {} words", entry.date, stats.word_count);
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", entry.text.trim_end());
        let _ = writeln!(output);
    }

    output
}

/// Markdown rendering of the whole journal, oldest entry first.
pub fn render_export(entries: &EntryCollection) -> String {
    let mut output = String::from("# My Journal Entries\n\n");
    for (date, text) in entries {
        let _ = write!(output, "## {date}\n\n{text}\n\n---\n\n");
    }
    output
}

/// Writes `journal_export_<YYYYMMDD>.txt` into `dir`. Nothing is written for
/// an empty journal.
pub fn export_entries(
    entries: &EntryCollection,
    dir: &Path,
    today: NaiveDate,
) -> JournalResult<Option<PathBuf>> {
    if entries.is_empty() {
        return Ok(None);
    }

    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir).map_err(|source| JournalError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let path = dir.join(format!("journal_export_{}.txt", today.format("%Y%m%d")));
    fs::write(&path, render_export(entries)).map_err(|source| JournalError::Io {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), entries = entries.len(), "journal exported");
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MoodLabel;
    use chrono::Duration;
    use tempfile::tempdir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn sample_entries() -> EntryCollection {
        [
            (0, "A great day with friends"),
            (1, "Felt tired and worried"),
            (2, "Quiet"),
            (9, "Long ago"),
        ]
        .into_iter()
        .map(|(offset, text)| (today() - Duration::days(offset), text.to_string()))
        .collect()
    }

    #[test]
    fn stats_count_words_and_characters() {
        let stats = entry_stats("  héllo   wide\nworld ");
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.char_count, 21);
    }

    #[test]
    fn dashboard_combines_streak_mood_and_today() {
        let dashboard = build_dashboard(&sample_entries(), today());

        assert_eq!(dashboard.total_entries, 4);
        assert_eq!(dashboard.current_streak, 3);
        assert_eq!(dashboard.longest_streak, 3);
        assert_eq!(dashboard.today_stats.map(|s| s.word_count), Some(5));

        let mood = dashboard.mood.unwrap();
        assert_eq!(mood.len(), 3);
        assert_eq!(mood[0].label, MoodLabel::Neutral);
        assert_eq!(mood[1].label, MoodLabel::Negative);
        assert_eq!(mood[2].label, MoodLabel::Positive);
    }

    #[test]
    fn dashboard_text_mentions_key_figures() {
        let text = render_dashboard(&build_dashboard(&sample_entries(), today()));
        assert!(text.contains("Total entries: 4"));
        assert!(text.contains("Current streak: 3 days"));
        assert!(text.contains("You've written today (5 words)"));
        assert!(text.contains("2026-06-15  6/10 ######.... positive"));
    }

    #[test]
    fn empty_dashboard_invites_first_entry() {
        let text = render_dashboard(&build_dashboard(&EntryCollection::new(), today()));
        assert!(text.contains("first entry"));
        assert!(!text.contains("Mood Trend"));
    }

    #[test]
    fn trend_without_data_says_so() {
        assert!(render_trend(None).contains("Not enough recent entries"));
    }

    #[test]
    fn history_lists_entries_with_word_counts() {
        let entries = vec![Entry::new(today(), "one two three")];
        let text = render_history(&entries);
        assert!(text.starts_with("## 2026-06-15 - 3 words"));
        assert!(render_history(&[]).contains("No entries found."));
    }

    #[test]
    fn export_writes_markdown_oldest_first() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("exports");
        let path = export_entries(&sample_entries(), &out_dir, today())
            .unwrap()
            .unwrap();

        assert_eq!(path, out_dir.join("journal_export_20260615.txt"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# My Journal Entries\n\n## 2026-06-06\n\nLong ago\n\n---\n\n"));
        assert!(content.ends_with("## 2026-06-15\n\nA great day with friends\n\n---\n\n"));
    }

    #[test]
    fn export_skips_empty_journal() {
        let dir = tempdir().unwrap();
        let result = export_entries(&EntryCollection::new(), dir.path(), today()).unwrap();
        assert_eq!(result, None);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
