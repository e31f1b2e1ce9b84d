//! Per-seat turn state.

use serde::{Deserialize, Serialize};

/// Where a seat is in its turn cycle.
///
/// `Waiting → ActiveDrawing → ActivePlaying → TurnEnding → Waiting`.
/// `ActiveDrawing` and `TurnEnding` are transient: they only exist while
/// `start_turn` / the end-of-turn path runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    #[default]
    Waiting,
    ActiveDrawing,
    ActivePlaying,
    TurnEnding,
}

impl TurnPhase {
    /// True in the phases where the seat holds the turn.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, TurnPhase::ActiveDrawing | TurnPhase::ActivePlaying)
    }
}

/// Turn flag and play counter of one seat.
///
/// `cards_played` only resets when a new turn starts, so after a capped
/// turn it still reads the cap while the seat is waiting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnState {
    /// Whether this seat may draw and play right now.
    pub is_my_turn: bool,

    /// Successful plays in the current (or most recent) turn.
    pub cards_played: u8,

    /// Position in the turn cycle.
    pub phase: TurnPhase,

    /// Number of the current (or most recent) turn this seat held. 0 before its first turn.
    pub turn: u32,
}

impl TurnState {
    /// A seat that has not had a turn yet.
    #[must_use]
    pub fn waiting() -> Self {
        Self::default()
    }

    /// True when another play fits under `cap` this turn.
    #[must_use]
    pub fn can_play(&self, cap: u8) -> bool {
        self.is_my_turn && self.cards_played < cap
    }

    /// True when the play count has reached `cap`.
    #[must_use]
    pub fn cap_reached(&self, cap: u8) -> bool {
        self.cards_played >= cap
    }
}
