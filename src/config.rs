use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JournalConfig {
    /// Journal read by `summarize` when no path argument is given.
    #[serde(default = "default_journal_path")]
    pub default_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    #[serde(default = "default_questions_per_round")]
    pub questions_per_round: u32,
    /// Fixed seed for reproducible sessions; unset means seed from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_journal_path() -> String {
    "data/trades.csv".to_string()
}

fn default_questions_per_round() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            default_path: default_journal_path(),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_per_round: default_questions_per_round(),
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn config_path() -> PathBuf {
    std::env::var("CANDLE_COACH_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config/default.toml"))
}

impl Config {
    /// Load config from disk; a missing file falls back to defaults so the
    /// tool runs with zero setup.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_from_path(&config_path())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.quiz.questions_per_round == 0 {
            bail!("quiz.questions_per_round must be > 0");
        }
        if self.journal.default_path.trim().is_empty() {
            bail!("journal.default_path must not be empty");
        }
        Ok(())
    }
}
