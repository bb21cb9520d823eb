//! Roster: which zone every player is standing in.

use crate::models::error::BoardError;
use crate::models::player::{is_fixed_member, PlayerSlot, FIXED_MEMBERS};
use crate::models::zone::{ZoneId, ZoneLoad};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
struct RosterEntry {
    name: String,
    zone: ZoneId,
}

/// Mapping from player name to zone.
///
/// Entries are kept in board order: a player who changes zone goes to the back of the
/// new zone, so filtering by zone yields that zone's queue order. Every season member
/// always has an entry (defaulting to `rest`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

/// Occupancy of one zone (for the per-zone counters).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ZoneSummary {
    pub zone: ZoneId,
    pub label: &'static str,
    pub count: usize,
    pub capacity: Option<usize>,
    pub load: ZoneLoad,
}

impl Default for Roster {
    /// All season members in the rest area, nobody else.
    fn default() -> Self {
        Self {
            entries: FIXED_MEMBERS
                .iter()
                .map(|name| RosterEntry {
                    name: (*name).to_string(),
                    zone: ZoneId::Rest,
                })
                .collect(),
        }
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from recorded positions (document order). A repeated name keeps its first
    /// position and its last zone. Season members without a position land in `rest`.
    pub fn from_placements<I, S>(placements: I) -> Self
    where
        I: IntoIterator<Item = (S, ZoneId)>,
        S: Into<String>,
    {
        let mut entries: Vec<RosterEntry> = Vec::new();
        for (name, zone) in placements {
            let name = name.into();
            match entries.iter_mut().find(|e| e.name == name) {
                Some(existing) => existing.zone = zone,
                None => entries.push(RosterEntry { name, zone }),
            }
        }
        let mut roster = Self { entries };
        roster.ensure_fixed_members();
        roster
    }

    /// Build from per-zone queues; each list is that zone's order front to back.
    pub fn from_zone_lists<I>(lists: I) -> Self
    where
        I: IntoIterator<Item = (ZoneId, Vec<String>)>,
    {
        Self::from_placements(
            lists
                .into_iter()
                .flat_map(|(zone, names)| names.into_iter().map(move |name| (name, zone))),
        )
    }

    fn ensure_fixed_members(&mut self) {
        for name in FIXED_MEMBERS {
            if !self.contains(name) {
                self.entries.push(RosterEntry {
                    name: name.to_string(),
                    zone: ZoneId::Rest,
                });
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Current zone of a player. Season members are always found.
    pub fn get(&self, name: &str) -> Result<ZoneId, BoardError> {
        match self.entries.iter().find(|e| e.name == name) {
            Some(entry) => Ok(entry.zone),
            None if is_fixed_member(name) => Ok(ZoneId::Rest),
            None => Err(BoardError::UnknownPlayer(name.to_string())),
        }
    }

    /// Put a player in a zone without any capacity check, appending them to the back of
    /// the zone. Setting the zone a player is already in keeps their place.
    pub fn set(&mut self, name: &str, zone: ZoneId) {
        if let Some(idx) = self.entries.iter().position(|e| e.name == name) {
            if self.entries[idx].zone == zone {
                return;
            }
            self.entries.remove(idx);
        }
        self.entries.push(RosterEntry {
            name: name.to_string(),
            zone,
        });
    }

    /// Delete a player's entry. A season member comes straight back in `rest`.
    /// Returns false if the name was not on the board.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        let removed = self.entries.len() != before;
        self.ensure_fixed_members();
        removed
    }

    /// Render-ready projection: season members in declaration order, then everybody else
    /// in board order.
    pub fn snapshot(&self) -> Vec<PlayerSlot> {
        let fixed = FIXED_MEMBERS.iter().map(|name| PlayerSlot {
            name: (*name).to_string(),
            zone: self.get(name).unwrap_or_default(),
            is_fixed: true,
        });
        let ad_hoc = self
            .entries
            .iter()
            .filter(|e| !is_fixed_member(&e.name))
            .map(|e| PlayerSlot {
                name: e.name.clone(),
                zone: e.zone,
                is_fixed: false,
            });
        fixed.chain(ad_hoc).collect()
    }

    /// Names in a zone, front of the queue first.
    pub fn occupants(&self, zone: ZoneId) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.zone == zone)
            .map(|e| e.name.as_str())
            .collect()
    }

    pub fn count(&self, zone: ZoneId) -> usize {
        self.entries.iter().filter(|e| e.zone == zone).count()
    }

    /// True if one more player fits in `zone`.
    pub fn has_room(&self, zone: ZoneId) -> bool {
        zone.capacity().map_or(true, |max| self.count(zone) < max)
    }

    /// (name, zone) pairs in board order.
    pub fn placements(&self) -> impl Iterator<Item = (&str, ZoneId)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.zone))
    }

    /// Total number of players on the board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Existing name equal to `name` ignoring ASCII case.
    pub fn find_name_ignore_case(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .map(|e| e.name.as_str())
            .find(|existing| existing.eq_ignore_ascii_case(name))
    }

    pub fn zone_summaries(&self) -> Vec<ZoneSummary> {
        ZoneId::ALL
            .into_iter()
            .map(|zone| {
                let count = self.count(zone);
                ZoneSummary {
                    zone,
                    label: zone.label(),
                    count,
                    capacity: zone.capacity(),
                    load: zone.load(count),
                }
            })
            .collect()
    }
}

/// Serialized as `{ "name": "zone", ... }` in board order.
impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|e| (&e.name, e.zone.as_str())))
    }
}

struct RosterVisitor;

impl<'de> Visitor<'de> for RosterVisitor {
    type Value = Roster;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of player name to zone id")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut placements: Vec<(String, ZoneId)> = Vec::new();
        while let Some((name, zone)) = map.next_entry::<String, String>()? {
            // Unrecognised zones fall back to the rest area.
            let zone = zone.parse().unwrap_or(ZoneId::Rest);
            placements.push((name, zone));
        }
        Ok(Roster::from_placements(placements))
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RosterVisitor)
    }
}
