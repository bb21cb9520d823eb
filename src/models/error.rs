//! Errors raised by board operations.

use crate::models::zone::ZoneId;
use thiserror::Error;

/// Errors that can occur while moving players around the board.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum BoardError {
    /// Target zone already holds its maximum number of players.
    #[error("Zone {zone} is full")]
    ZoneFull { zone: ZoneId },
    /// Tap shortcut found every court at capacity.
    #[error("All courts are full, please wait")]
    NoCourtAvailable,
    /// Name is neither a season member nor on the board.
    #[error("Player not found: {0}")]
    UnknownPlayer(String),
    /// Caller's view of the player's zone is out of date (usually a remote update just landed).
    #[error("{player} is in {actual}, not {expected}")]
    StaleMoveIgnored {
        player: String,
        expected: ZoneId,
        actual: ZoneId,
    },
    /// A player with this name is already on the board (case-insensitive).
    #[error("A player named {0} already exists")]
    DuplicatePlayerName(String),
    #[error("Player name must not be empty")]
    EmptyPlayerName,
    #[error("Unknown zone: {0}")]
    UnknownZone(String),
}

impl BoardError {
    /// Capacity failures are shown to the user as a notice rather than a hard error.
    pub fn is_capacity(&self) -> bool {
        matches!(self, BoardError::ZoneFull { .. } | BoardError::NoCourtAvailable)
    }
}
