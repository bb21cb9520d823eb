//! Runtime configuration from environment variables.

use crate::logic::DEFAULT_DEBOUNCE;
use crate::sync::{BACKUP_KEY, DOCUMENT_FILE};
use std::path::PathBuf;
use std::time::Duration;

/// Server settings. Every field has a default so the app runs with no environment at all.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// `HOST`, default `0.0.0.0`.
    pub host: String,
    /// `PORT`, default 8080.
    pub port: u16,
    /// `BOARD_DOCUMENT_PATH`, default `badminton-board.json`. The shared board lives here.
    pub document_path: PathBuf,
    /// `BOARD_BACKUP_PATH`, default `badminton-backup.json`.
    pub backup_path: PathBuf,
    /// `BOARD_DEBOUNCE_MS`, default 300 (the debouncer clamps to 300..=500).
    pub debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            document_path: PathBuf::from(DOCUMENT_FILE),
            backup_path: PathBuf::from(BACKUP_KEY),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            document_path: lookup("BOARD_DOCUMENT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.document_path),
            backup_path: lookup("BOARD_BACKUP_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.backup_path),
            debounce: lookup("BOARD_DEBOUNCE_MS")
                .and_then(|ms| ms.trim().parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.debounce),
        }
    }
}
