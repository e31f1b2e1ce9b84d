//! Game events emitted by the engine.
//!
//! Events are the outbound surface consumed by rendering and by the turn
//! coordinator:
//! - `Drew`: a card moved from deck to hand
//! - `CardPlayed`: a card moved from hand to play area
//! - `TurnStarted`: a seat was activated
//! - `TurnEnded`: a seat finished its turn
//!
//! Each event carries enough context that a consumer never needs to read
//! back into engine state to render it.

use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::ids::InstanceId;
use crate::core::seat::Seat;

/// Event discriminant, for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Drew,
    CardPlayed,
    TurnStarted,
    TurnEnded,
}

/// Why a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnEndReason {
    /// The play cap was reached.
    CapReached,
    /// The seat passed before reaching the cap.
    Passed,
}

/// Something that happened in the duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card was drawn.
    Drew {
        seat: Seat,
        card: InstanceId,
        hand_size: usize,
        deck_size: usize,
    },

    /// A card was played. `position` is its index in the play area.
    CardPlayed {
        seat: Seat,
        card: CardInstance,
        position: usize,
    },

    /// A seat's turn began.
    TurnStarted { seat: Seat, turn: u32 },

    /// A seat's turn finished.
    TurnEnded {
        seat: Seat,
        turn: u32,
        cards_played: u8,
        reason: TurnEndReason,
    },
}

impl GameEvent {
    /// The seat the event is about.
    #[must_use]
    pub fn seat(&self) -> Seat {
        match self {
            GameEvent::Drew { seat, .. }
            | GameEvent::CardPlayed { seat, .. }
            | GameEvent::TurnStarted { seat, .. }
            | GameEvent::TurnEnded { seat, .. } => *seat,
        }
    }

    /// The event discriminant.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::Drew { .. } => EventKind::Drew,
            GameEvent::CardPlayed { .. } => EventKind::CardPlayed,
            GameEvent::TurnStarted { .. } => EventKind::TurnStarted,
            GameEvent::TurnEnded { .. } => EventKind::TurnEnded,
        }
    }

    /// The instance involved, for draw and play events.
    #[must_use]
    pub fn card(&self) -> Option<InstanceId> {
        match self {
            GameEvent::Drew { card, .. } => Some(*card),
            GameEvent::CardPlayed { card, .. } => Some(card.id),
            GameEvent::TurnStarted { .. } | GameEvent::TurnEnded { .. } => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Drew { seat, card, hand_size, deck_size } => write!(
                f,
                "{} drew {} (hand {}, deck {})",
                seat, card, hand_size, deck_size
            ),
            GameEvent::CardPlayed { seat, card, position } => {
                write!(f, "{} played {} [{}] at {}", seat, card.name(), card.id, position)
            }
            GameEvent::TurnStarted { seat, turn } => write!(f, "turn {} started for {}", turn, seat),
            GameEvent::TurnEnded { seat, turn, cards_played, .. } => write!(
                f,
                "turn {} ended for {} after {} plays",
                turn, seat, cards_played
            ),
        }
    }
}
