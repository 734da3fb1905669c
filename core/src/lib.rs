#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use card::*;
pub use deck::*;
pub use engine::*;
pub use error::*;
pub use schedule::*;
pub use types::*;
pub use view::*;

mod card;
mod deck;
mod engine;
mod error;
mod schedule;
mod types;
mod view;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Length of the opening window where every card is shown.
    pub peek_secs: u8,
    /// Time both faces of a pair stay visible before they are compared.
    pub match_delay_ms: u32,
    /// Score awarded per matched pair.
    pub match_reward: Score,
}

impl GameConfig {
    pub const MAX_PEEK_SECS: u8 = 60;
    pub const MAX_MATCH_DELAY_MS: u32 = 10_000;

    pub const fn new_unchecked(peek_secs: u8, match_delay_ms: u32, match_reward: Score) -> Self {
        Self {
            peek_secs,
            match_delay_ms,
            match_reward,
        }
    }

    pub fn new(peek_secs: u8, match_delay_ms: u32, match_reward: Score) -> Self {
        let peek_secs = peek_secs.min(Self::MAX_PEEK_SECS);
        let match_delay_ms = match_delay_ms.min(Self::MAX_MATCH_DELAY_MS);
        let match_reward = match_reward.max(1);
        Self::new_unchecked(peek_secs, match_delay_ms, match_reward)
    }

    pub const fn peek_ms(&self) -> u32 {
        self.peek_secs as u32 * TICK_MS
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(5, 1000, 20)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StartOutcome {
    NoChange,
    Peeking,
    Playing,
}

impl StartOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlipOutcome {
    NoChange,
    Flipped,
    PairPending,
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TimerOutcome {
    Stale,
    NoChange,
    CountdownTicked,
    PeekEnded,
    Matched,
    Mismatched,
    Won,
}

impl TimerOutcome {
    pub const fn has_update(self) -> bool {
        use TimerOutcome::*;
        match self {
            Stale => false,
            NoChange => false,
            CountdownTicked => true,
            PeekEnded => true,
            Matched => true,
            Mismatched => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_classic_rules() {
        let config = GameConfig::default();
        assert_eq!(config.peek_secs, 5);
        assert_eq!(config.peek_ms(), 5000);
        assert_eq!(config.match_delay_ms, 1000);
        assert_eq!(config.match_reward, 20);
    }

    #[test]
    fn config_new_clamps_out_of_range_values() {
        let config = GameConfig::new(200, 60_000, 0);
        assert_eq!(config.peek_secs, GameConfig::MAX_PEEK_SECS);
        assert_eq!(config.match_delay_ms, GameConfig::MAX_MATCH_DELAY_MS);
        assert_eq!(config.match_reward, 1);
    }

    #[test]
    fn stale_and_unchanged_timers_do_not_update() {
        assert!(!TimerOutcome::Stale.has_update());
        assert!(!TimerOutcome::NoChange.has_update());
        assert!(TimerOutcome::Mismatched.has_update());
        assert!(!FlipOutcome::NoChange.has_update());
        assert!(StartOutcome::Peeking.has_update());
    }
}
