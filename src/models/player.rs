//! Player and the fixed season-member list.

use crate::models::zone::ZoneId;
use serde::{Deserialize, Serialize};

/// Season members. They are always on the board, in this order.
pub const FIXED_MEMBERS: [&str; 10] = [
    "SHIU", "學長", "聖勛", "小馬", "Pota", "信華", "P+", "41", "維尼", "宥蓁",
];

/// True if `name` is one of the season members.
pub fn is_fixed_member(name: &str) -> bool {
    FIXED_MEMBERS.contains(&name)
}

/// One player in the render-ready projection. The display name is the identity key.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerSlot {
    pub name: String,
    pub zone: ZoneId,
    pub is_fixed: bool,
}

/// Entry of the member list modal (1-based position).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MemberEntry {
    pub number: usize,
    pub name: &'static str,
}

/// The season members with their list position.
pub fn fixed_members() -> Vec<MemberEntry> {
    FIXED_MEMBERS
        .iter()
        .enumerate()
        .map(|(i, name)| MemberEntry {
            number: i + 1,
            name: *name,
        })
        .collect()
}
