//! Shared document record and the transport seams the coordinator talks through.

use crate::models::Roster;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The single shared record: the whole roster plus the store-assigned write time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteDocument {
    #[serde(default)]
    pub players: Roster,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RemoteDocument {
    pub fn new(players: Roster, updated_at: DateTime<Utc>) -> Self {
        Self {
            players,
            updated_at: Some(updated_at),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SyncError {
    #[error("remote write failed: {0}")]
    TransportFailure(String),
    #[error("subscription to the shared document was closed")]
    SubscriptionClosed,
    #[error("local backup failed: {0}")]
    Backup(String),
}

/// A notification delivered by a live subscription.
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteEvent {
    /// Current document contents; `None` if it has never been written.
    Snapshot(Option<RemoteDocument>),
    /// The subscription broke and will deliver nothing more.
    Failed(SyncError),
}

/// Whole-document store shared by every client.
pub trait RemoteStore {
    type Subscription: RemoteSubscription;

    /// Overwrite the document with `players`. The store stamps `updatedAt`.
    fn write(&self, players: &Roster) -> Result<(), SyncError>;

    /// Start listening. The first event delivers the current contents.
    fn subscribe(&self) -> Result<Self::Subscription, SyncError>;
}

pub trait RemoteSubscription {
    /// Next pending notification, `None` once caught up.
    fn next_event(&mut self) -> Option<RemoteEvent>;

    /// Stop listening.
    fn cancel(self);
}

/// Local-only copy of the roster used while disconnected.
pub trait BackupStore {
    fn save(&self, players: &Roster) -> Result<(), SyncError>;
    fn load(&self) -> Result<Option<Roster>, SyncError>;
}
