//! User configuration loaded from `config.toml`.
//!
//! Every key is optional; anything absent takes the default the quiz was
//! designed around (three options, 2.5 s before the next question). Config
//! problems never stop startup: `main` logs the error and uses defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clockquiz_core::generator::DEFAULT_OPTION_COUNT;
use clockquiz_core::session::DEFAULT_ADVANCE_DELAY;
use clockquiz_core::{Hour, HourNames, QuizSettings};
use serde::Deserialize;
use thiserror::Error;

/// Everything that can go wrong reading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("hour_names key {key:?} is not an hour between 1 and 12")]
    InvalidHourKey { key: String },
}

/// Parsed `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Built-in theme name: `"catppuccin-mocha"` or `"dark"`.
    pub theme: String,
    /// Options offered per question, including the correct one.
    pub option_count: usize,
    /// Milliseconds the success banner stays before the next question.
    pub advance_delay_ms: u64,
    /// Fixed RNG seed for a reproducible question sequence.
    pub seed: Option<u64>,
    /// Where tracing output goes. No file, no logging.
    pub log_file: Option<PathBuf>,
    /// Overrides for individual hour names, keyed by `"1"` … `"12"`.
    pub hour_names: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "catppuccin-mocha".to_owned(),
            option_count: DEFAULT_OPTION_COUNT,
            advance_delay_ms: DEFAULT_ADVANCE_DELAY.as_millis() as u64,
            seed: None,
            log_file: None,
            hour_names: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn quiz_settings(&self) -> QuizSettings {
        QuizSettings {
            option_count: self.option_count,
            advance_delay: Duration::from_millis(self.advance_delay_ms),
        }
    }

    /// The English table with any `[hour_names]` overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHourKey`] if a key is not `1`–`12`.
    pub fn resolve_hour_names(&self) -> Result<HourNames, ConfigError> {
        let english = HourNames::english();
        let mut table: BTreeMap<u8, String> = Hour::all()
            .map(|h| (h.value(), english.name(h.value()).to_owned()))
            .collect();

        for (key, name) in &self.hour_names {
            let hour = key
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(Hour::new)
                .ok_or_else(|| ConfigError::InvalidHourKey { key: key.clone() })?;
            table.insert(hour.value(), name.clone());
        }
        Ok(HourNames::from_pairs(table))
    }
}

/// Returns the path to the clockquiz config file.
///
/// Prefers `$XDG_CONFIG_HOME/clockquiz/config.toml`; falls back to
/// `~/.config/clockquiz/config.toml` when the env var is absent.
pub fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from(".config"));
    base.join("clockquiz").join("config.toml")
}

/// Reads and validates the config at `path`.
///
/// A missing file is not an error and yields `Config::default()`.
///
/// # Errors
///
/// Returns [`ConfigError`] for unreadable files, malformed TOML, or invalid
/// `[hour_names]` keys.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Io { path: path.to_owned(), source });
        }
    };
    let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })?;
    config.resolve_hour_names()?;
    Ok(config)
}
