//! In-process shared document, backed by a tokio watch channel and optionally a JSON file.

use crate::models::Roster;
use crate::sync::document::{RemoteDocument, RemoteEvent, RemoteStore, RemoteSubscription, SyncError};
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// Default file name of the stored shared document.
pub const DOCUMENT_FILE: &str = "badminton-board.json";

struct Hub {
    tx: watch::Sender<Option<RemoteDocument>>,
    store_path: Option<PathBuf>,
    reachable: bool,
    writes: u64,
}

/// One shared board document. Clones talk to the same document, so every client of the
/// process holds a clone. Last writer wins.
#[derive(Clone)]
pub struct SharedDocument {
    inner: Arc<Mutex<Hub>>,
}

impl Default for SharedDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedDocument {
    /// A memory-only document that has never been written.
    pub fn new() -> Self {
        Self::with_contents(None, None)
    }

    /// Document stored as JSON at `path`. Whatever an earlier run wrote there is loaded;
    /// a missing file means the document has never been written. Every write goes to the
    /// file before subscribers are notified.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SyncError> {
        let path = path.into();
        let document = read_document(&path)?;
        match &document {
            Some(_) => log::info!("Loaded shared document from {}", path.display()),
            None => log::info!("No shared document at {} yet", path.display()),
        }
        Ok(Self::with_contents(document, Some(path)))
    }

    fn with_contents(document: Option<RemoteDocument>, store_path: Option<PathBuf>) -> Self {
        let (tx, _rx) = watch::channel(document);
        Self {
            inner: Arc::new(Mutex::new(Hub {
                tx,
                store_path,
                reachable: true,
                writes: 0,
            })),
        }
    }


    fn hub(&self) -> MutexGuard<'_, Hub> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current contents.
    pub fn document(&self) -> Option<RemoteDocument> {
        self.hub().tx.borrow().clone()
    }

    /// Successful writes so far.
    pub fn write_count(&self) -> u64 {
        self.hub().writes
    }

    pub fn is_reachable(&self) -> bool {
        self.hub().reachable
    }

    /// Drop the connection: live subscriptions fail, writes and new subscriptions are refused.
    pub fn disconnect(&self) {
        let mut hub = self.hub();
        let current = hub.tx.borrow().clone();
        let (tx, _rx) = watch::channel(current);
        // Replacing the sender closes every existing receiver.
        hub.tx = tx;
        hub.reachable = false;
        log::warn!("Shared document disconnected");
    }

    /// Accept traffic again. Clients must subscribe anew.
    pub fn reconnect(&self) {
        self.hub().reachable = true;
        log::info!("Shared document reachable");
    }
}

impl RemoteStore for SharedDocument {
    type Subscription = WatchSubscription;

    fn write(&self, players: &Roster) -> Result<(), SyncError> {
        let mut hub = self.hub();
        if !hub.reachable {
            return Err(SyncError::TransportFailure(
                "shared document unreachable".to_string(),
            ));
        }
        let document = RemoteDocument::new(players.clone(), Utc::now());
        if let Some(path) = &hub.store_path {
            write_document(path, &document)?;
        }
        hub.tx.send_replace(Some(document));
        hub.writes += 1;
        Ok(())
    }

    fn subscribe(&self) -> Result<WatchSubscription, SyncError> {
        let hub = self.hub();
        if !hub.reachable {
            return Err(SyncError::TransportFailure(
                "shared document unreachable".to_string(),
            ));
        }
        let mut rx = hub.tx.subscribe();
        rx.mark_changed();
        Ok(WatchSubscription { rx, closed: false })
    }
}

fn read_document(path: &Path) -> Result<Option<RemoteDocument>, SyncError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(SyncError::TransportFailure(e.to_string())),
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| SyncError::TransportFailure(e.to_string()))
}

fn write_document(path: &Path, document: &RemoteDocument) -> Result<(), SyncError> {
    let text = serde_json::to_string_pretty(document)
        .map_err(|e| SyncError::TransportFailure(e.to_string()))?;
    std::fs::write(path, text).map_err(|e| SyncError::TransportFailure(e.to_string()))
}

/// Listener on a [`SharedDocument`].
pub struct WatchSubscription {
    rx: watch::Receiver<Option<RemoteDocument>>,
    closed: bool,
}

impl RemoteSubscription for WatchSubscription {
    fn next_event(&mut self) -> Option<RemoteEvent> {
        if self.closed {
            return None;
        }
        match self.rx.has_changed() {
            Ok(true) => Some(RemoteEvent::Snapshot(self.rx.borrow_and_update().clone())),
            Ok(false) => None,
            Err(_) => {
                self.closed = true;
                Some(RemoteEvent::Failed(SyncError::SubscriptionClosed))
            }
        }
    }

    fn cancel(self) {
        drop(self.rx);
    }
}
