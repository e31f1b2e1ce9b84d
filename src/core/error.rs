//! Error types.
//!
//! Two families:
//! - `PlayRejection`: a single draw/play/pass request was refused. State is
//!   untouched and the duel continues.
//! - `SetupError`: the duel (or a participant) could not be constructed.
//!
//! Running out of cards is not an error; see `DrawOutcome`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::InstanceId;
use super::seat::Seat;
use crate::cards::CardId;

/// Why an in-game action was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum PlayRejection {
    /// The acting seat is not the active one.
    #[error("{seat} tried to act outside its turn")]
    NotYourTurn { seat: Seat },

    /// The per-turn play cap is already reached.
    #[error("play cap of {cap} cards already reached this turn")]
    PlayCapExceeded { cap: u8 },

    /// The requested instance is not in the acting seat's hand.
    #[error("{card} is not in hand")]
    CardNotInHand { card: InstanceId },
}

/// Why a duel or participant could not be set up.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Decks are sampled from the pool; an empty pool cannot produce one.
    #[error("card pool is empty")]
    EmptyPool,

    /// Deck size must be positive.
    #[error("deck size must be greater than zero")]
    ZeroDeckSize,

    /// Deck size is bounded by `MAX_DECK_SIZE`.
    #[error("deck size {size} exceeds the maximum of {max}")]
    DeckTooLarge { size: usize, max: usize },

    /// Opening hands are dealt from the deck.
    #[error("opening hand of {hand} cards exceeds deck size {deck}")]
    OpeningHandTooLarge { hand: usize, deck: usize },

    /// A turn cap of zero would make every turn unfinishable.
    #[error("play cap must be greater than zero")]
    ZeroPlayCap,

    /// Card templates are identified by id; ids must be unique in a pool.
    #[error("card {id} registered twice")]
    DuplicateCard { id: CardId },

    /// The instance id space ran out.
    #[error("no card instance ids left")]
    InstanceIdsExhausted,
}

/// Result alias for setup paths.
pub type SetupResult<T> = Result<T, SetupError>;
