//! Badminton roster board: library with zone models, move logic and shared-board sync.

pub mod board;
pub mod config;
pub mod logic;
pub mod models;
pub mod sync;

pub use board::{Board, BoardView};
pub use config::Config;
pub use logic::{
    add_player, end_match, find_available_court, move_player_to_zone, remove_players, reset,
    tap_player, tap_target, Debouncer, MoveOutcome,
};
pub use models::{
    fixed_members, is_fixed_member, BoardError, MemberEntry, PlayerSlot, Roster, ZoneId,
    ZoneLoad, ZoneSummary, FIXED_MEMBERS,
};
pub use sync::{
    BackupStore, ConnectionState, FileBackup, MemoryBackup, RemoteDocument, RemoteStore,
    SharedDocument, SyncCoordinator, SyncError,
};
