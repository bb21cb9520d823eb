//! Synchronisation with the shared board document.

mod backup;
mod coordinator;
mod document;
mod hub;

pub use backup::{FileBackup, MemoryBackup, BACKUP_KEY};
pub use coordinator::{ConnectionState, SyncCoordinator};
pub use document::{
    BackupStore, RemoteDocument, RemoteEvent, RemoteStore, RemoteSubscription, SyncError,
};
pub use hub::{SharedDocument, WatchSubscription, DOCUMENT_FILE};
