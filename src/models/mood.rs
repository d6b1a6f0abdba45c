//! Mood journal entry
//!
//! Stored as `<timestamp> - <mood text>`, one entry per line.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Timestamp layout used in the journal
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator between timestamp and mood text
pub const SEPARATOR: &str = " - ";

/// Stand-in written for line breaks inside mood text
const NEWLINE_MARK: &str = "␤";

/// A single timestamped mood entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodEntry {
    /// When the entry was logged (local time, second precision)
    pub timestamp: DateTime<Local>,
    /// Free-text mood as entered
    pub text: String,
}

impl MoodEntry {
    /// Create an entry with an explicit timestamp
    pub fn at(timestamp: DateTime<Local>, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            text: text.into(),
        }
    }

    /// Encode as a store record. Line breaks in the text are replaced so an
    /// entry never spans more than one line.
    pub fn to_record(&self) -> String {
        let text = self
            .text
            .replace("\r\n", NEWLINE_MARK)
            .replace(['\n', '\r'], NEWLINE_MARK);
        format!(
            "{}{}{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            SEPARATOR,
            text
        )
    }

    /// Decode a store record. Splits on the first separator, so mood text
    /// containing `" - "` survives intact. Returns `None` for lines that do
    /// not start with a valid timestamp.
    pub fn parse(record: &str) -> Option<Self> {
        let (stamp, text) = record.split_once(SEPARATOR)?;
        let naive = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;
        let timestamp = Local.from_local_datetime(&naive).earliest()?;
        Some(Self::at(timestamp, text))
    }
}
