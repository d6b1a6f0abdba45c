//! Mood journal
//!
//! Append-only log of timestamped free-text moods. History is replayed in
//! store order, which is chronological because nothing is ever rewritten.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::models::MoodEntry;
use crate::store::RecordStore;
use crate::Result;

/// Outcome of reading the journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodHistory {
    /// The journal has never been written
    NoHistory,
    /// Raw journal lines in file order; may be empty
    Entries(Vec<String>),
}

impl MoodHistory {
    /// Journal lines, empty for `NoHistory`
    pub fn lines(&self) -> &[String] {
        match self {
            MoodHistory::NoHistory => &[],
            MoodHistory::Entries(lines) => lines,
        }
    }

    pub fn len(&self) -> usize {
        self.lines().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    /// Lines that decode as mood entries, skipping anything malformed
    pub fn entries(&self) -> Vec<MoodEntry> {
        self.lines()
            .iter()
            .filter_map(|line| MoodEntry::parse(line))
            .collect()
    }

    /// Totals over the entries that parse. Moods are grouped by their
    /// trimmed, lower-cased text.
    pub fn stats(&self) -> MoodStats {
        let mut stats = MoodStats::default();
        for entry in self.entries() {
            let mood = entry.text.trim().to_lowercase();
            *stats.counts.entry(mood).or_insert(0) += 1;
            stats.total += 1;
        }
        stats
    }
}

/// Summary of the journal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodStats {
    /// Number of well-formed entries
    pub total: usize,
    /// Entries per normalized mood
    pub counts: BTreeMap<String, usize>,
}

impl MoodStats {
    /// Moods by descending count, alphabetical among equals
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(mood, count)| (mood.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        ranked
    }

    /// The most logged mood, if any
    pub fn most_common(&self) -> Option<(&str, usize)> {
        self.ranked().into_iter().next()
    }
}

/// Mood journal over a line-oriented store
#[derive(Debug)]
pub struct MoodJournal<S> {
    store: S,
}

impl<S: RecordStore> MoodJournal<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append a mood stamped with the current local time
    pub fn log_mood(&self, text: &str) -> Result<MoodEntry> {
        self.log_mood_at(text, Local::now())
    }

    /// Append a mood with an explicit timestamp
    pub fn log_mood_at(&self, text: &str, timestamp: DateTime<Local>) -> Result<MoodEntry> {
        let entry = MoodEntry::at(timestamp, text);
        self.store.append(&entry.to_record())?;
        info!(chars = text.chars().count(), "mood logged");
        Ok(entry)
    }

    /// Read the whole journal
    pub fn history(&self) -> Result<MoodHistory> {
        let history = match self.store.load_all()? {
            None => MoodHistory::NoHistory,
            Some(lines) => MoodHistory::Entries(lines),
        };
        debug!(entries = history.len(), "mood history read");
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TIMESTAMP_FORMAT;
    use crate::store::{FileStore, MemoryStore};
    use chrono::{NaiveDateTime, TimeZone};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_log_and_read_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let journal = MoodJournal::new(FileStore::new(temp_dir.path().join("moods.txt")));

        for mood in ["ok", "tired", "great"] {
            journal.log_mood(mood).unwrap();
        }

        let history = journal.history().unwrap();
        let lines = history.lines();
        assert_eq!(lines.len(), 3);
        for (line, mood) in lines.iter().zip(["ok", "tired", "great"]) {
            let (stamp, text) = line.split_once(" - ").unwrap();
            assert_eq!(text, mood);
            assert!(NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
        }
    }

    #[test]
    fn test_missing_journal_is_no_history() {
        let journal = MoodJournal::new(MemoryStore::new());
        assert_eq!(journal.history().unwrap(), MoodHistory::NoHistory);
    }

    #[test]
    fn test_empty_journal_is_zero_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("moods.txt");
        fs::write(&path, "").unwrap();

        let journal = MoodJournal::new(FileStore::new(path));
        let history = journal.history().unwrap();
        assert_eq!(history, MoodHistory::Entries(Vec::new()));
        assert!(history.is_empty());
    }

    #[test]
    fn test_log_mood_at_writes_exact_line() {
        let backing = MemoryStore::new();
        let journal = MoodJournal::new(backing.clone());
        let when = Local.with_ymd_and_hms(2024, 1, 2, 21, 30, 15).unwrap();

        let entry = journal.log_mood_at("calm - mostly", when).unwrap();
        assert_eq!(entry.text, "calm - mostly");
        assert_eq!(
            backing.records().unwrap(),
            vec!["2024-01-02 21:30:15 - calm - mostly".to_string()]
        );
    }

    #[test]
    fn test_entries_skip_foreign_lines() {
        let journal = MoodJournal::new(MemoryStore::with_records([
            "2024-01-02 21:30:15 - fine",
            "scribbled by hand",
        ]));
        let history = journal.history().unwrap();
        assert_eq!(history.len(), 2);

        let entries = history.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "fine");
    }

    #[test]
    fn test_stats_group_moods_and_pick_most_common() {
        let journal = MoodJournal::new(MemoryStore::with_records([
            "2024-01-02 08:00:00 - Tired",
            "2024-01-02 12:00:00 - ok",
            "2024-01-02 21:30:15 - tired ",
            "not an entry",
            "2024-01-03 09:00:00 - calm",
        ]));
        let stats = journal.history().unwrap().stats();

        assert_eq!(stats.total, 4);
        assert_eq!(stats.counts.get("tired"), Some(&2));
        assert_eq!(stats.ranked(), vec![("tired", 2), ("calm", 1), ("ok", 1)]);
        assert_eq!(stats.most_common(), Some(("tired", 2)));
    }

    #[test]
    fn test_stats_of_missing_journal_are_empty() {
        let stats = MoodHistory::NoHistory.stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.most_common(), None);
    }
}
