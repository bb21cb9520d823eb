//! Collapse repeated activations of the same player into one move.

use std::collections::HashMap;
use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
pub const MIN_DEBOUNCE: Duration = Duration::from_millis(300);
pub const MAX_DEBOUNCE: Duration = Duration::from_millis(500);

/// Remembers when each player was last activated.
#[derive(Clone, Debug)]
pub struct Debouncer {
    window: Duration,
    last_seen: HashMap<String, Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    /// Window is clamped to 300..=500ms.
    pub fn new(window: Duration) -> Self {
        Self {
            window: window.clamp(MIN_DEBOUNCE, MAX_DEBOUNCE),
            last_seen: HashMap::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// True if an activation of `player` at `now` should be acted on; false if it repeats
    /// an accepted activation inside the window. Rejected activations do not extend it.
    pub fn admit(&mut self, player: &str, now: Instant) -> bool {
        let window = self.window;
        self.last_seen
            .retain(|_, seen| now.saturating_duration_since(*seen) < window);
        if self.last_seen.contains_key(player) {
            return false;
        }
        self.last_seen.insert(player.to_string(), now);
        true
    }

    /// Drop the record for `player`, so an activation that came to nothing does not hold
    /// back the next one.
    pub fn forget(&mut self, player: &str) {
        self.last_seen.remove(player);
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}
