//! Keeps the local roster and the shared document in step.

use crate::models::Roster;
use crate::sync::document::{BackupStore, RemoteEvent, RemoteStore, RemoteSubscription};
use serde::Serialize;

/// Whether the shared document is currently reachable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    #[default]
    Offline,
    Online,
}

/// Publishes local changes and hands back remote ones.
///
/// Conflict policy is last writer wins on the whole document: every remote notification
/// replaces the local roster, every publish overwrites the remote one.
pub struct SyncCoordinator<R: RemoteStore, B: BackupStore> {
    remote: R,
    backup: B,
    state: ConnectionState,
    subscription: Option<R::Subscription>,
    // Set by connect, cleared by shutdown.
    wants_subscription: bool,
    publishes: u64,
}

impl<R: RemoteStore, B: BackupStore> SyncCoordinator<R, B> {
    /// Starts offline and unsubscribed.
    pub fn new(remote: R, backup: B) -> Self {
        Self {
            remote,
            backup,
            state: ConnectionState::Offline,
            subscription: None,
            wants_subscription: false,
            publishes: 0,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn backup(&self) -> &B {
        &self.backup
    }

    /// Number of publish calls (successful or not).
    pub fn publish_count(&self) -> u64 {
        self.publishes
    }

    /// Subscribe to the shared document if not already subscribed.
    ///
    /// Returns the roster to show when subscribing fails (backup or default). On success
    /// the initial contents arrive through [`poll`](Self::poll).
    pub fn connect(&mut self) -> Option<Roster> {
        self.wants_subscription = true;
        if self.subscription.is_some() {
            return None;
        }
        match self.remote.subscribe() {
            Ok(subscription) => {
                log::info!("Subscribed to shared board document");
                self.subscription = Some(subscription);
                None
            }
            Err(e) => {
                log::warn!("Could not subscribe to shared board document: {}", e);
                Some(self.fall_back_offline())
            }
        }
    }

    /// Subscribe again after the subscription broke. Unlike [`connect`](Self::connect) a
    /// failure leaves local state alone. Does nothing before `connect` or after `shutdown`.
    /// Returns true if a subscription is live.
    pub fn resume(&mut self) -> bool {
        if self.subscription.is_some() {
            return true;
        }
        if !self.wants_subscription {
            return false;
        }
        match self.remote.subscribe() {
            Ok(subscription) => {
                log::info!("Resubscribed to shared board document");
                self.subscription = Some(subscription);
                true
            }
            Err(e) => {
                log::debug!("Shared board document still unreachable: {}", e);
                false
            }
        }
    }

    /// Drain pending notifications. Returns the roster that must replace local state, if
    /// anything arrived.
    pub fn poll(&mut self) -> Option<Roster> {
        let mut latest = None;
        while let Some(event) = self.subscription.as_mut().and_then(|s| s.next_event()) {
            match event {
                RemoteEvent::Snapshot(Some(document)) => {
                    self.state = ConnectionState::Online;
                    log::info!("Received board update from shared document");
                    latest = Some(document.players);
                }
                RemoteEvent::Snapshot(None) => {
                    self.state = ConnectionState::Online;
                    log::info!("Shared document missing, seeding default board");
                    if let Err(e) = self.remote.write(&Roster::default()) {
                        log::warn!("Seeding shared document failed: {}", e);
                        latest = Some(self.fall_back_offline());
                    }
                }
                RemoteEvent::Failed(e) => {
                    log::warn!("Board subscription error: {}", e);
                    if let Some(subscription) = self.subscription.take() {
                        subscription.cancel();
                    }
                    latest = Some(self.fall_back_offline());
                }
            }
        }
        latest
    }

    /// Write the whole roster to the shared document. On failure the roster goes to the
    /// local backup and the coordinator is offline until the next remote notification.
    pub fn publish(&mut self, roster: &Roster) {
        self.publishes += 1;
        match self.remote.write(roster) {
            Ok(()) => log::info!("Board synced to shared document"),
            Err(e) => {
                log::warn!("Board sync failed: {}", e);
                if let Err(e) = self.backup.save(roster) {
                    log::warn!("Could not write local backup: {}", e);
                }
                self.state = ConnectionState::Offline;
            }
        }
    }

    /// Cancel the subscription. Call before the client goes away.
    pub fn shutdown(&mut self) {
        self.wants_subscription = false;
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
            log::info!("Unsubscribed from shared board document");
        }
        self.state = ConnectionState::Offline;
    }

    fn fall_back_offline(&mut self) -> Roster {
        self.state = ConnectionState::Offline;
        match self.backup.load() {
            Ok(Some(roster)) => {
                log::info!("Loaded board from local backup");
                roster
            }
            Ok(None) => Roster::default(),
            Err(e) => {
                log::warn!("Local backup unreadable: {}", e);
                Roster::default()
            }
        }
    }
}
