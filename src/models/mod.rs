//! Data structures for the roster board: zones, players, roster state.

mod error;
mod player;
mod roster;
mod zone;

pub use error::BoardError;
pub use player::{fixed_members, is_fixed_member, MemberEntry, PlayerSlot, FIXED_MEMBERS};
pub use roster::{Roster, ZoneSummary};
pub use zone::{ParseZoneError, ZoneId, ZoneLoad, MAX_PLAYERS_PER_COURT, MAX_PLAYERS_PER_WAIT};
