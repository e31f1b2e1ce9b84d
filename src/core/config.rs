//! Duel configuration.
//!
//! `MatchConfig` carries every tunable the engine reads: deck size, opening
//! hand, turn cap, scheduler delays and the RNG seed. Delays are measured on
//! the scheduler's virtual clock, never by sleeping.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::{SetupError, SetupResult};

/// Cards sampled into each deck.
pub const DEFAULT_DECK_SIZE: usize = 60;

/// Largest deck a seat may build.
pub const MAX_DECK_SIZE: usize = 10_000;

/// Cards dealt to each seat before the first turn.
pub const DEFAULT_OPENING_HAND: usize = 7;

/// Maximum plays per turn.
pub const DEFAULT_PLAY_CAP: u8 = 2;

/// Duel configuration.
///
/// ## Example
///
/// ```
/// use duel_ccg::core::MatchConfig;
/// use std::time::Duration;
///
/// let config = MatchConfig::default()
///     .with_seed(7)
///     .with_deck_size(30)
///     .with_deliberation_delay(Duration::from_millis(250));
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.play_cap, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Cards sampled (with replacement) from the pool into each deck.
    pub deck_size: usize,

    /// Cards each seat draws during setup.
    pub opening_hand: usize,

    /// Plays allowed per turn; reaching it ends the turn.
    pub play_cap: u8,

    /// Delay between a turn ending and the next seat's activation.
    pub handoff_delay: Duration,

    /// Delay before each play of the decision procedure.
    pub deliberation_delay: Duration,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            deck_size: DEFAULT_DECK_SIZE,
            opening_hand: DEFAULT_OPENING_HAND,
            play_cap: DEFAULT_PLAY_CAP,
            handoff_delay: Duration::from_millis(500),
            deliberation_delay: Duration::from_millis(1000),
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Set a deterministic seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the deck size.
    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand(mut self, size: usize) -> Self {
        self.opening_hand = size;
        self
    }

    /// Set the per-turn play cap.
    #[must_use]
    pub fn with_play_cap(mut self, cap: u8) -> Self {
        self.play_cap = cap;
        self
    }

    /// Set the turn handoff delay.
    #[must_use]
    pub fn with_handoff_delay(mut self, delay: Duration) -> Self {
        self.handoff_delay = delay;
        self
    }

    /// Set the decision procedure's delay between plays.
    #[must_use]
    pub fn with_deliberation_delay(mut self, delay: Duration) -> Self {
        self.deliberation_delay = delay;
        self
    }

    /// Check the configuration before any deck is built.
    pub fn validate(&self) -> SetupResult<()> {
        if self.deck_size == 0 {
            return Err(SetupError::ZeroDeckSize);
        }
        if self.deck_size > MAX_DECK_SIZE {
            return Err(SetupError::DeckTooLarge {
                size: self.deck_size,
                max: MAX_DECK_SIZE,
            });
        }
        if self.opening_hand > self.deck_size {
            return Err(SetupError::OpeningHandTooLarge {
                hand: self.opening_hand,
                deck: self.deck_size,
            });
        }
        if self.play_cap == 0 {
            return Err(SetupError::ZeroPlayCap);
        }
        Ok(())
    }
}
