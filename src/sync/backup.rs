//! Local backup of the roster, kept as JSON text under one fixed key.

use crate::models::Roster;
use crate::sync::document::{BackupStore, SyncError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Default backup key (file name).
pub const BACKUP_KEY: &str = "badminton-backup.json";

/// Backup written to a single file.
#[derive(Clone, Debug)]
pub struct FileBackup {
    path: PathBuf,
}

impl FileBackup {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BackupStore for FileBackup {
    fn save(&self, players: &Roster) -> Result<(), SyncError> {
        let text = serde_json::to_string(players).map_err(|e| SyncError::Backup(e.to_string()))?;
        std::fs::write(&self.path, text).map_err(|e| SyncError::Backup(e.to_string()))
    }

    fn load(&self) -> Result<Option<Roster>, SyncError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SyncError::Backup(e.to_string())),
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| SyncError::Backup(e.to_string()))
    }
}

/// Backup held in memory; clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackup {
    text: Arc<Mutex<Option<String>>>,
}

impl MemoryBackup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored text, if any.
    pub fn text(&self) -> Option<String> {
        self.text
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl BackupStore for MemoryBackup {
    fn save(&self, players: &Roster) -> Result<(), SyncError> {
        let text = serde_json::to_string(players).map_err(|e| SyncError::Backup(e.to_string()))?;
        *self.text.lock().unwrap_or_else(PoisonError::into_inner) = Some(text);
        Ok(())
    }

    fn load(&self) -> Result<Option<Roster>, SyncError> {
        self.text()
            .map(|text| serde_json::from_str(&text).map_err(|e| SyncError::Backup(e.to_string())))
            .transpose()
    }
}
