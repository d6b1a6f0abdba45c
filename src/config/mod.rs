//! Configuration management module
//!
//! Handles loading, saving, and validation of the store locations, quote
//! source and breathing session settings.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Result, SereneError, APP_NAME, CONFIG_FILE, MOODS_FILE, QUOTES_FILE, USERS_FILE};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the users, moods and quotes files
    pub data_dir: PathBuf,
    /// Credential store file name, relative to `data_dir`
    pub users_file: String,
    /// Mood journal file name, relative to `data_dir`
    pub moods_file: String,
    /// Whether console output is coloured
    pub color: bool,
    /// Quote source selection
    pub quotes: QuoteConfig,
    /// Guided breathing parameters
    pub breathing: BreathingConfig,
}

/// Which quote variant this deployment uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSourceKind {
    /// Compiled-in list of quotes
    Builtin,
    /// External line-delimited quotes file
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    pub source: QuoteSourceKind,
    /// Quotes file name, relative to `data_dir`
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreathingConfig {
    /// Number of in/hold/out cycles
    pub cycles: u32,
    /// Length of each phase, in humantime notation ("4s", "1500ms")
    pub phase_duration: String,
    /// Draw a progress bar while waiting out a phase
    pub show_progress: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            users_file: USERS_FILE.to_string(),
            moods_file: MOODS_FILE.to_string(),
            color: true,
            quotes: QuoteConfig::default(),
            breathing: BreathingConfig::default(),
        }
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            source: QuoteSourceKind::File,
            file: QUOTES_FILE.to_string(),
        }
    }
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            cycles: 3,
            phase_duration: "4s".to_string(),
            show_progress: true,
        }
    }
}

/// `$DATA_HOME/serene`, or the working directory when there is no data dir
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

const MAX_CYCLES: u32 = 20;
const MAX_PHASE_DURATION: Duration = Duration::from_secs(60);

impl AppConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration rooted at `data_dir`, everything else default
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self::default().with_data_dir(data_dir)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("users_file", &self.users_file),
            ("moods_file", &self.moods_file),
            ("quotes.file", &self.quotes.file),
        ] {
            if value.trim().is_empty() {
                return Err(SereneError::Config(format!("{} must not be empty", name)));
            }
        }

        if self.breathing.cycles == 0 || self.breathing.cycles > MAX_CYCLES {
            return Err(SereneError::Config(format!(
                "Breathing cycles must be between 1 and {}",
                MAX_CYCLES
            )));
        }

        let phase = self.phase_duration()?;
        if phase > MAX_PHASE_DURATION {
            return Err(SereneError::Config(format!(
                "Phase duration too long: {}s (max: {}s)",
                phase.as_secs(),
                MAX_PHASE_DURATION.as_secs()
            )));
        }

        Ok(())
    }

    /// Parsed breathing phase length
    pub fn phase_duration(&self) -> Result<Duration> {
        humantime::parse_duration(&self.breathing.phase_duration).map_err(|e| {
            SereneError::Config(format!(
                "Invalid phase duration '{}': {}",
                self.breathing.phase_duration, e
            ))
        })
    }

    /// Full path of the credential store
    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.users_file)
    }

    /// Full path of the mood journal
    pub fn moods_path(&self) -> PathBuf {
        self.data_dir.join(&self.moods_file)
    }

    /// Full path of the quotes file
    pub fn quotes_path(&self) -> PathBuf {
        self.data_dir.join(&self.quotes.file)
    }

    /// Set the data directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the quote variant
    pub fn with_quote_source(mut self, source: QuoteSourceKind) -> Self {
        self.quotes.source = source;
        self
    }

    /// Set the breathing cycle count
    pub fn with_cycles(mut self, cycles: u32) -> Self {
        self.breathing.cycles = cycles;
        self
    }

    /// Set the breathing phase length
    pub fn with_phase_duration(mut self, duration: Duration) -> Self {
        self.breathing.phase_duration = humantime::format_duration(duration).to_string();
        self
    }

    /// Enable or disable coloured output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Enable or disable the breathing progress bar
    pub fn with_progress(mut self, show: bool) -> Self {
        self.breathing.show_progress = show;
        self
    }

    /// Load configuration from the standard config file location. On first
    /// run the defaults are written there so they can be edited.
    pub fn load() -> Result<Self> {
        Self::load_or_init(&Self::config_file_path()?)
    }

    /// Load from `path`, writing the defaults to it when it does not exist.
    /// Failing to write the defaults is logged, not returned.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }

        let config = Self::default();
        match config.save_to(path) {
            Ok(()) => debug!(path = %path.display(), "wrote default configuration"),
            Err(e) => warn!(error = %e, "could not write default configuration"),
        }
        Ok(config)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            SereneError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            SereneError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SereneError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| {
            SereneError::Config(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path.
    /// Uses $CONFIG_HOME/serene/serene.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            SereneError::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();
        assert_eq!(config.breathing.cycles, 3);
        assert_eq!(config.phase_duration().unwrap(), Duration::from_secs(4));
        assert_eq!(config.quotes.source, QuoteSourceKind::File);
    }

    #[test]
    fn test_paths_join_data_dir() {
        let config = AppConfig::in_dir("/tmp/serene-data");
        assert_eq!(config.users_path(), PathBuf::from("/tmp/serene-data/users.txt"));
        assert_eq!(config.moods_path(), PathBuf::from("/tmp/serene-data/moods.txt"));
        assert_eq!(config.quotes_path(), PathBuf::from("/tmp/serene-data/quotes.txt"));
    }

    #[test]
    fn test_toml_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("conf").join("serene.toml");
        let config = AppConfig::in_dir(temp_dir.path())
            .with_quote_source(QuoteSourceKind::Builtin)
            .with_cycles(5)
            .with_phase_duration(Duration::from_millis(1500))
            .with_color(false);

        config.save_to(&path).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.phase_duration().unwrap(), Duration::from_millis(1500));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("serene.toml");
        fs::write(&path, "color = false\n\n[quotes]\nsource = \"builtin\"\n").unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert!(!loaded.color);
        assert_eq!(loaded.quotes.source, QuoteSourceKind::Builtin);
        assert_eq!(loaded.quotes.file, QUOTES_FILE);
        assert_eq!(loaded.breathing.cycles, 3);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = AppConfig::load_from(&temp_dir.path().join("nope.toml")).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn test_first_load_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("conf").join("serene.toml");

        let first = AppConfig::load_or_init(&path).unwrap();
        assert_eq!(first, AppConfig::default());
        assert!(path.exists());

        fs::write(&path, "color = false\n").unwrap();
        let second = AppConfig::load_or_init(&path).unwrap();
        assert!(!second.color);
    }

    #[test]
    fn test_unwritable_config_location_still_loads_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        let loaded = AppConfig::load_or_init(&blocker.join("serene.toml")).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(AppConfig::default().with_cycles(0).validate().is_err());
        assert!(AppConfig::default().with_cycles(21).validate().is_err());

        let mut config = AppConfig::default();
        config.breathing.phase_duration = "soon".to_string();
        assert!(matches!(config.validate(), Err(SereneError::Config(_))));

        let config = AppConfig::default().with_phase_duration(Duration::from_secs(120));
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.moods_file = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("serene.toml");
        fs::write(&path, "[breathing\ncycles = ").unwrap();

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(SereneError::Config(_))
        ));
    }

    #[test]
    fn test_config_file_path() {
        let path = AppConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("serene"));
        assert!(path.to_string_lossy().ends_with("serene.toml"));
    }
}
