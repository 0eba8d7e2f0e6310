use std::fmt;
use std::str::FromStr;

use crate::error::JournalError;
use crate::models::{Entry, EntryCollection};

/// How many entries the history view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Count(usize),
    All,
}

impl FromStr for Limit {
    type Err = JournalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            return Ok(Limit::All);
        }
        match value.parse::<usize>() {
            Ok(count) if count > 0 => Ok(Limit::Count(count)),
            _ => Err(JournalError::InvalidLimit(value.to_string())),
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Count(count) => write!(f, "{count}"),
            Limit::All => write!(f, "All"),
        }
    }
}

/// Case-insensitive substring search over entry text. An empty term keeps
/// everything.
pub fn filter(entries: &EntryCollection, term: &str) -> EntryCollection {
    if term.is_empty() {
        return entries.clone();
    }

    let needle = term.to_lowercase();
    entries
        .iter()
        .filter(|(_, text)| text.to_lowercase().contains(&needle))
        .map(|(date, text)| (*date, text.clone()))
        .collect()
}

/// Newest entries first, truncated unless `limit` is [`Limit::All`].
pub fn limit(entries: &EntryCollection, limit: Limit) -> Vec<Entry> {
    let newest_first = entries
        .iter()
        .rev()
        .map(|(date, text)| Entry::new(*date, text.clone()));

    match limit {
        Limit::Count(count) => newest_first.take(count).collect(),
        Limit::All => newest_first.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn ten_entries() -> EntryCollection {
        let start = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        (0..10)
            .map(|offset| {
                (
                    start + Duration::days(offset),
                    format!("Day {offset}: walked the Dog"),
                )
            })
            .collect()
    }

    #[test]
    fn empty_term_returns_everything() {
        let entries = ten_entries();
        assert_eq!(filter(&entries, ""), entries);
    }

    #[test]
    fn search_is_case_insensitive() {
        let entries = ten_entries();
        assert_eq!(filter(&entries, "DOG").len(), 10);
        assert_eq!(filter(&entries, "day 3:").len(), 1);
        assert!(filter(&entries, "XYZ").is_empty());
    }

    #[test]
    fn limit_returns_most_recent_first() {
        let entries = ten_entries();
        let recent = limit(&entries, Limit::Count(5));
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].date, NaiveDate::from_ymd_opt(2026, 4, 10).unwrap());
        assert_eq!(recent[4].date, NaiveDate::from_ymd_opt(2026, 4, 6).unwrap());

        assert_eq!(limit(&entries, Limit::All).len(), 10);
        assert_eq!(limit(&entries, Limit::Count(20)).len(), 10);
    }

    #[test]
    fn parses_limit_arguments() {
        assert_eq!("All".parse::<Limit>().unwrap(), Limit::All);
        assert_eq!("10".parse::<Limit>().unwrap(), Limit::Count(10));
        assert!(matches!(
            "0".parse::<Limit>(),
            Err(JournalError::InvalidLimit(_))
        ));
        assert!("many".parse::<Limit>().is_err());
        assert_eq!(Limit::All.to_string(), "All");
    }
}
