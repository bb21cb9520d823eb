//! Single-player moves: drag between zones and the tap shortcut.

use crate::models::{BoardError, Roster, ZoneId};
use serde::Serialize;

/// Result of a move request that did not fail.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The roster changed; the board must be published.
    Moved {
        player: String,
        from: ZoneId,
        to: ZoneId,
    },
    /// Nothing to do (tap on a waiting player, duplicate tap, stale drag, same zone).
    Unchanged,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Move `player` from `from` to `to`.
///
/// `from` is the caller's belief about where the player is. If the roster disagrees the
/// move is refused with `StaleMoveIgnored` and nothing changes. A full target zone gives
/// `ZoneFull`.
pub fn move_player_to_zone(
    roster: &mut Roster,
    player: &str,
    from: ZoneId,
    to: ZoneId,
) -> Result<MoveOutcome, BoardError> {
    let actual = roster.get(player)?;
    if actual != from {
        return Err(BoardError::StaleMoveIgnored {
            player: player.to_string(),
            expected: from,
            actual,
        });
    }
    if from == to {
        return Ok(MoveOutcome::Unchanged);
    }
    if !roster.has_room(to) {
        return Err(BoardError::ZoneFull { zone: to });
    }
    roster.set(player, to);
    Ok(MoveOutcome::Moved {
        player: player.to_string(),
        from,
        to,
    })
}

/// First court (court1, court2, court3) with a free spot.
pub fn find_available_court(roster: &Roster) -> Option<ZoneId> {
    ZoneId::COURTS.into_iter().find(|court| roster.has_room(*court))
}

/// Where a tap on `player` would send them: rest goes to the first open court, any court
/// goes back to rest, waiting queues are drag-only (`None`).
pub fn tap_target(roster: &Roster, player: &str) -> Result<Option<ZoneId>, BoardError> {
    let zone = roster.get(player)?;
    if zone == ZoneId::Rest {
        find_available_court(roster)
            .map(Some)
            .ok_or(BoardError::NoCourtAvailable)
    } else if zone.is_court() {
        Ok(Some(ZoneId::Rest))
    } else {
        Ok(None)
    }
}

/// Apply the tap shortcut to `player`.
pub fn tap_player(roster: &mut Roster, player: &str) -> Result<MoveOutcome, BoardError> {
    let from = roster.get(player)?;
    match tap_target(roster, player)? {
        Some(to) => move_player_to_zone(roster, player, from, to),
        None => Ok(MoveOutcome::Unchanged),
    }
}
