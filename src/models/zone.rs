//! Zone registry: the fixed set of areas a player can stand in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Players per court (doubles) and per waiting queue.
pub const MAX_PLAYERS_PER_COURT: usize = 4;
pub const MAX_PLAYERS_PER_WAIT: usize = 4;

/// One of the areas on the board.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneId {
    #[default]
    Rest,
    Court1,
    Court2,
    Court3,
    Wait1,
    Wait2,
    Wait3,
}

/// Whether a zone is close to its capacity (drives the counter colour in the UI).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneLoad {
    Open,
    NearlyFull,
    Full,
}

impl ZoneId {
    /// Every zone, in display order.
    pub const ALL: [ZoneId; 7] = [
        ZoneId::Rest,
        ZoneId::Court1,
        ZoneId::Court2,
        ZoneId::Court3,
        ZoneId::Wait1,
        ZoneId::Wait2,
        ZoneId::Wait3,
    ];

    /// Courts in the order the tap shortcut tries them.
    pub const COURTS: [ZoneId; 3] = [ZoneId::Court1, ZoneId::Court2, ZoneId::Court3];

    /// Waiting queues, front of the line first.
    pub const WAITS: [ZoneId; 3] = [ZoneId::Wait1, ZoneId::Wait2, ZoneId::Wait3];

    /// Identifier used in the shared document (`rest`, `court1`, `wait2`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            ZoneId::Rest => "rest",
            ZoneId::Court1 => "court1",
            ZoneId::Court2 => "court2",
            ZoneId::Court3 => "court3",
            ZoneId::Wait1 => "wait1",
            ZoneId::Wait2 => "wait2",
            ZoneId::Wait3 => "wait3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ZoneId::Rest => "Rest area",
            ZoneId::Court1 => "Court 1",
            ZoneId::Court2 => "Court 2",
            ZoneId::Court3 => "Court 3",
            ZoneId::Wait1 => "Waiting 1",
            ZoneId::Wait2 => "Waiting 2",
            ZoneId::Wait3 => "Waiting 3",
        }
    }

    /// Maximum occupants, `None` for the unbounded rest area.
    pub fn capacity(self) -> Option<usize> {
        match self {
            ZoneId::Rest => None,
            ZoneId::Court1 | ZoneId::Court2 | ZoneId::Court3 => Some(MAX_PLAYERS_PER_COURT),
            ZoneId::Wait1 | ZoneId::Wait2 | ZoneId::Wait3 => Some(MAX_PLAYERS_PER_WAIT),
        }
    }

    pub fn is_court(self) -> bool {
        Self::COURTS.contains(&self)
    }

    pub fn is_wait(self) -> bool {
        Self::WAITS.contains(&self)
    }

    /// Position in the waiting line (`wait1` = 0), `None` for non-wait zones.
    pub fn wait_rank(self) -> Option<usize> {
        Self::WAITS.iter().position(|w| *w == self)
    }

    /// Classify an occupant count against this zone's capacity.
    pub fn load(self, count: usize) -> ZoneLoad {
        match self.capacity() {
            Some(max) if count >= max => ZoneLoad::Full,
            Some(max) if count + 1 >= max => ZoneLoad::NearlyFull,
            _ => ZoneLoad::Open,
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised zone identifier.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseZoneError(pub String);

impl fmt::Display for ParseZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown zone: {}", self.0)
    }
}

impl std::error::Error for ParseZoneError {}

impl FromStr for ZoneId {
    type Err = ParseZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZoneId::ALL
            .into_iter()
            .find(|z| z.as_str() == s)
            .ok_or_else(|| ParseZoneError(s.to_string()))
    }
}
