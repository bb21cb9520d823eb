//! Adding, deleting and resetting players.

use crate::models::{BoardError, Roster, ZoneId};

/// Add an ad-hoc player to the back of the rest area. Returns the trimmed name.
pub fn add_player(roster: &mut Roster, name: &str) -> Result<String, BoardError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BoardError::EmptyPlayerName);
    }
    if let Some(existing) = roster.find_name_ignore_case(name) {
        return Err(BoardError::DuplicatePlayerName(existing.to_string()));
    }
    roster.set(name, ZoneId::Rest);
    Ok(name.to_string())
}

/// Delete the named players. Unknown names are skipped; season members come back in rest.
/// Returns the names that were on the board.
pub fn remove_players<S: AsRef<str>>(roster: &mut Roster, names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| roster.remove(name))
        .map(str::to_string)
        .collect()
}

/// Back to the starting board: every season member resting, nobody else.
pub fn reset(roster: &mut Roster) {
    *roster = Roster::default();
}
