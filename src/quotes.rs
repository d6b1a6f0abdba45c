//! Motivational quote source
//!
//! Quotes come either from a compiled-in list or from a line-delimited file
//! that is re-read on every request. A single generator lives as long as the
//! provider and is seeded once from OS entropy. Users can append their own
//! quotes to the file.

use std::path::{Path, PathBuf};

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::{AppConfig, QuoteSourceKind};
use crate::store::{FileStore, RecordStore};
use crate::{Result, SereneError};

/// Compiled-in quotes
pub const BUILTIN_QUOTES: [&str; 4] = [
    "Keep going, you are doing great!",
    "Every day is a second chance.",
    "You are stronger than you think.",
    "Believe in yourself.",
];

/// Returned when the quotes file is missing or has no usable lines
pub const FALLBACK_QUOTE: &str = "You're doing great! Keep going!";

/// Where quotes are drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteSource {
    /// The fixed compiled-in list
    Builtin,
    /// One quote per non-blank line of the given file
    File(PathBuf),
}

/// Random quote picker
#[derive(Debug)]
pub struct QuoteProvider {
    source: QuoteSource,
    rng: SmallRng,
}

impl QuoteProvider {
    /// Create a provider seeded from OS entropy
    pub fn new(source: QuoteSource) -> Self {
        Self::with_rng(source, SmallRng::from_entropy())
    }

    /// Create a provider with a caller-supplied generator
    pub fn with_rng(source: QuoteSource, rng: SmallRng) -> Self {
        Self { source, rng }
    }

    /// Build the provider the configuration asks for
    pub fn from_config(config: &AppConfig) -> Self {
        let source = match config.quotes.source {
            QuoteSourceKind::Builtin => QuoteSource::Builtin,
            QuoteSourceKind::File => QuoteSource::File(config.quotes_path()),
        };
        Self::new(source)
    }

    /// Pick a quote uniformly at random. Never returns an empty string.
    pub fn random_quote(&mut self) -> String {
        match &self.source {
            QuoteSource::Builtin => BUILTIN_QUOTES
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(FALLBACK_QUOTE)
                .to_string(),
            QuoteSource::File(path) => {
                let quotes = load_quotes(path);
                quotes
                    .choose(&mut self.rng)
                    .cloned()
                    .unwrap_or_else(|| FALLBACK_QUOTE.to_string())
            }
        }
    }

    /// Append a user-written quote to the quotes file. The built-in list is
    /// fixed, so this fails with `InvalidInput` unless quotes come from a
    /// file.
    pub fn add_quote(&self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SereneError::InvalidInput("a quote cannot be empty".into()));
        }

        match &self.source {
            QuoteSource::Builtin => Err(SereneError::InvalidInput(
                "built-in quotes cannot be changed, set quotes.source = \"file\" to add your own"
                    .into(),
            )),
            QuoteSource::File(path) => {
                FileStore::new(path).append(text)?;
                info!(path = %path.display(), "quote added");
                Ok(())
            }
        }
    }
}

/// Non-blank lines of the quotes file; empty when it cannot be read
fn load_quotes(path: &Path) -> Vec<String> {
    match FileStore::new(path).load_all() {
        Ok(Some(lines)) => lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect(),
        Ok(None) => {
            debug!(path = %path.display(), "no quotes file, using fallback");
            Vec::new()
        }
        Err(e) => {
            warn!(error = %e, "failed to read quotes file");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn seeded(source: QuoteSource) -> QuoteProvider {
        QuoteProvider::with_rng(source, SmallRng::seed_from_u64(7))
    }

    #[test]
    fn test_builtin_returns_configured_quote() {
        let mut provider = seeded(QuoteSource::Builtin);
        for _ in 0..50 {
            let quote = provider.random_quote();
            assert!(BUILTIN_QUOTES.contains(&quote.as_str()));
        }
    }

    #[test]
    fn test_builtin_eventually_covers_all_quotes() {
        let mut provider = seeded(QuoteSource::Builtin);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(provider.random_quote());
        }
        assert_eq!(seen.len(), BUILTIN_QUOTES.len());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let mut provider = seeded(QuoteSource::File(temp_dir.path().join("quotes.txt")));
        assert_eq!(provider.random_quote(), FALLBACK_QUOTE);
    }

    #[test]
    fn test_blank_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quotes.txt");
        fs::write(&path, "\n   \n\n").unwrap();

        let mut provider = seeded(QuoteSource::File(path));
        assert_eq!(provider.random_quote(), FALLBACK_QUOTE);
    }

    #[test]
    fn test_file_quotes_skip_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quotes.txt");
        fs::write(&path, "One step at a time.\n\nBreathe.\n").unwrap();

        let mut provider = seeded(QuoteSource::File(path));
        for _ in 0..30 {
            let quote = provider.random_quote();
            assert!(quote == "One step at a time." || quote == "Breathe.");
        }
    }

    #[test]
    fn test_file_is_reloaded_on_every_call() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quotes.txt");
        let mut provider = seeded(QuoteSource::File(path.clone()));
        assert_eq!(provider.random_quote(), FALLBACK_QUOTE);

        fs::write(&path, "Fresh quote.\n").unwrap();
        assert_eq!(provider.random_quote(), "Fresh quote.");
    }

    #[test]
    fn test_added_quote_is_drawn() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("quotes.txt");
        let mut provider = seeded(QuoteSource::File(path.clone()));

        provider.add_quote("  Rest is productive too.  ").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Rest is productive too.\n");
        assert_eq!(provider.random_quote(), "Rest is productive too.");
    }

    #[test]
    fn test_add_quote_rejects_blank_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quotes.txt");
        let provider = seeded(QuoteSource::File(path.clone()));

        let err = provider.add_quote("   ").unwrap_err();
        assert!(matches!(err, SereneError::InvalidInput(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_add_quote_to_builtin_is_rejected() {
        let mut provider = seeded(QuoteSource::Builtin);
        let err = provider.add_quote("Mine.").unwrap_err();
        assert!(matches!(err, SereneError::InvalidInput(_)));
        assert!(BUILTIN_QUOTES.contains(&provider.random_quote().as_str()));
    }

    #[test]
    fn test_latin1_quote_file_is_still_used() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quotes.txt");
        fs::write(&path, b"Caf\xE9 breaks are fine.\n".as_slice()).unwrap();

        let mut provider = seeded(QuoteSource::File(path));
        assert_eq!(provider.random_quote(), "Caf\u{FFFD} breaks are fine.");
    }
}
