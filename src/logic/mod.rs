//! Board business logic: moves, tap shortcut, match-end cascade, player lifecycle.

mod assignment;
mod cascade;
mod debounce;
mod lifecycle;

pub use assignment::{
    find_available_court, move_player_to_zone, tap_player, tap_target, MoveOutcome,
};
pub use cascade::end_match;
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE, MAX_DEBOUNCE, MIN_DEBOUNCE};
pub use lifecycle::{add_player, remove_players, reset};
