//! The live board: local roster, input debouncing and sync, behind one set of operations.

use crate::logic::{self, Debouncer, MoveOutcome};
use crate::models::{BoardError, PlayerSlot, Roster, ZoneId, ZoneSummary};
use crate::sync::{BackupStore, ConnectionState, RemoteStore, SyncCoordinator};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Everything the presentation layer needs for a full redraw.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BoardView {
    pub players: Vec<PlayerSlot>,
    pub zones: Vec<ZoneSummary>,
    pub total_players: usize,
    pub connection: ConnectionState,
}

/// One client's view of the shared board.
///
/// Every operation first applies pending remote updates, then mutates the roster, then
/// publishes exactly once if anything changed.
pub struct Board<R: RemoteStore, B: BackupStore> {
    roster: Roster,
    debouncer: Debouncer,
    sync: SyncCoordinator<R, B>,
}

impl<R: RemoteStore, B: BackupStore> Board<R, B> {
    pub fn new(remote: R, backup: B, debounce: Duration) -> Self {
        Self {
            roster: Roster::default(),
            debouncer: Debouncer::new(debounce),
            sync: SyncCoordinator::new(remote, backup),
        }
    }

    /// Subscribe to the shared document and load what it holds (or the offline fallback).
    /// Returns true if the local roster was replaced.
    pub fn connect(&mut self) -> bool {
        if let Some(roster) = self.sync.connect() {
            self.roster = roster;
            return true;
        }
        self.refresh()
    }

    /// Apply pending remote notifications. Returns true if the local roster was replaced.
    /// A subscription lost to an error is re-established first when the store is back.
    pub fn refresh(&mut self) -> bool {
        self.sync.resume();
        match self.sync.poll() {
            Some(roster) => {
                self.roster = roster;
                true
            }
            None => false,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn snapshot(&self) -> Vec<PlayerSlot> {
        self.roster.snapshot()
    }

    pub fn zone_summaries(&self) -> Vec<ZoneSummary> {
        self.roster.zone_summaries()
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.sync.state()
    }

    pub fn sync(&self) -> &SyncCoordinator<R, B> {
        &self.sync
    }

    pub fn view(&self) -> BoardView {
        BoardView {
            players: self.snapshot(),
            zones: self.zone_summaries(),
            total_players: self.roster.len(),
            connection: self.connection_state(),
        }
    }

    /// Tap shortcut. A repeat tap on the same player inside the debounce window is skipped.
    /// A tap that fails does not count as a repeat source.
    pub fn tap(&mut self, player: &str, now: Instant) -> Result<MoveOutcome, BoardError> {
        self.refresh();
        if !self.debouncer.admit(player, now) {
            log::debug!("Ignoring repeated tap on {}", player);
            return Ok(MoveOutcome::Unchanged);
        }
        match logic::tap_player(&mut self.roster, player) {
            Ok(outcome) => {
                self.publish_if_moved(&outcome);
                Ok(outcome)
            }
            Err(e) => {
                self.debouncer.forget(player);
                Err(e)
            }
        }
    }

    /// Drag `player` from `from` to `to`. A stale `from` is dropped silently.
    pub fn move_player(
        &mut self,
        player: &str,
        from: ZoneId,
        to: ZoneId,
    ) -> Result<MoveOutcome, BoardError> {
        self.refresh();
        match logic::move_player_to_zone(&mut self.roster, player, from, to) {
            Ok(outcome) => {
                self.publish_if_moved(&outcome);
                Ok(outcome)
            }
            Err(e @ BoardError::StaleMoveIgnored { .. }) => {
                log::debug!("Dropping stale move: {}", e);
                Ok(MoveOutcome::Unchanged)
            }
            Err(e) => Err(e),
        }
    }

    /// Match-end cascade on `court_id`, published once.
    pub fn end_match(&mut self, court_id: &str) {
        self.refresh();
        let on_court = court_id
            .parse::<ZoneId>()
            .ok()
            .filter(|zone| zone.is_court())
            .map(|zone| self.roster.count(zone))
            .unwrap_or_default();
        self.roster = logic::end_match(&self.roster, court_id);
        log::info!(
            "{} match ended, {} player(s) back to rest",
            court_id,
            on_court
        );
        self.publish();
    }

    pub fn add_player(&mut self, name: &str) -> Result<String, BoardError> {
        self.refresh();
        let name = logic::add_player(&mut self.roster, name)?;
        log::info!("Added player {}", name);
        self.publish();
        Ok(name)
    }

    /// Delete players in one change. Returns the names that were on the board.
    pub fn remove_players<S: AsRef<str>>(&mut self, names: &[S]) -> Vec<String> {
        self.refresh();
        let removed = logic::remove_players(&mut self.roster, names);
        if !removed.is_empty() {
            log::info!("{} player(s) removed", removed.len());
            self.publish();
        }
        removed
    }

    /// Everybody back to the starting board, for every viewer.
    pub fn reset(&mut self) {
        self.refresh();
        logic::reset(&mut self.roster);
        self.debouncer.clear();
        log::info!("Board reset");
        self.publish();
    }

    /// Cancel the live subscription.
    pub fn shutdown(&mut self) {
        self.sync.shutdown();
    }

    fn publish_if_moved(&mut self, outcome: &MoveOutcome) {
        if let MoveOutcome::Moved { player, from, to } = outcome {
            log::info!("{} moved from {} to {}", player, from, to);
            self.publish();
        }
    }

    fn publish(&mut self) {
        self.sync.publish(&self.roster);
    }
}
