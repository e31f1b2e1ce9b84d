//! Deck, hand and play area of one seat.
//!
//! `CardCollections` owns the three sequences and enforces the
//! collection-level rules:
//! - the deck is built once, then only shrinks by drawing
//! - drawing takes the top of the deck (the last element) onto the hand
//! - hand removal is by `InstanceId`, never by template
//! - the play area is append-only
//!
//! Turn rules (whose turn, how many plays) are enforced one level up by
//! `Participant`.
//!
//! All three sequences are `im::Vector`s, so cloning the whole container is
//! O(1) and snapshots can be compared cheaply.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, CardPool};
use crate::core::config::MAX_DECK_SIZE;
use crate::core::error::{SetupError, SetupResult};
use crate::core::ids::{InstanceAllocator, InstanceId};
use crate::core::rng::GameRng;
use crate::core::seat::Seat;

/// Result of a draw attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// The top card moved to the hand.
    Drew(InstanceId),
    /// Nothing left to draw. Not an error; the hand simply does not grow.
    DeckEmpty,
}

impl DrawOutcome {
    /// The drawn instance, if any.
    #[must_use]
    pub fn card(self) -> Option<InstanceId> {
        match self {
            DrawOutcome::Drew(id) => Some(id),
            DrawOutcome::DeckEmpty => None,
        }
    }
}

/// One seat's deck, hand and play area.
///
/// ## Usage
///
/// ```
/// use duel_ccg::cards::CardPool;
/// use duel_ccg::core::{GameRng, InstanceAllocator, Seat};
/// use duel_ccg::zones::{CardCollections, DrawOutcome};
///
/// let pool = CardPool::starter();
/// let mut rng = GameRng::new(42);
/// let mut ids = InstanceAllocator::new();
///
/// let mut zones = CardCollections::initialize(Seat::Human, &pool, 10, &mut rng, &mut ids).unwrap();
/// zones.shuffle(&mut rng);
///
/// let top = zones.top_card().map(|c| c.id);
/// assert_eq!(zones.draw().card(), top);
/// assert_eq!(zones.deck_size(), 9);
/// assert_eq!(zones.hand_size(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCollections {
    owner: Seat,

    /// Index 0 is the bottom, the last index is the top.
    deck: Vector<CardInstance>,

    /// Hand in draw order.
    hand: Vector<CardInstance>,

    /// Played cards in play order.
    play_area: Vector<CardInstance>,

    /// Deck size right after initialization. The deck never exceeds it.
    initial_deck_size: usize,
}

impl CardCollections {
    /// Empty collections for a seat.
    #[must_use]
    pub fn empty(owner: Seat) -> Self {
        Self {
            owner,
            deck: Vector::new(),
            hand: Vector::new(),
            play_area: Vector::new(),
            initial_deck_size: 0,
        }
    }

    /// Build a deck of `size` instances, each sampled uniformly (with
    /// replacement) from `pool`.
    ///
    /// The deck is not shuffled; call `shuffle` afterwards.
    pub fn initialize(
        owner: Seat,
        pool: &CardPool,
        size: usize,
        rng: &mut GameRng,
        ids: &mut InstanceAllocator,
    ) -> SetupResult<Self> {
        if pool.is_empty() {
            return Err(SetupError::EmptyPool);
        }
        if size == 0 {
            return Err(SetupError::ZeroDeckSize);
        }
        if size > MAX_DECK_SIZE {
            return Err(SetupError::DeckTooLarge { size, max: MAX_DECK_SIZE });
        }

        let templates = pool.as_slice();
        let deck = (0..size)
            .map(|_| {
                let template = &templates[rng.gen_index(templates.len())];
                Ok(CardInstance::new(ids.alloc()?, owner, template))
            })
            .collect::<SetupResult<Vector<CardInstance>>>()?;

        log::trace!("{} deck built with {} cards from a pool of {}", owner, size, templates.len());

        Ok(Self {
            owner,
            deck,
            hand: Vector::new(),
            play_area: Vector::new(),
            initial_deck_size: size,
        })
    }

    /// Apply an unbiased random permutation to the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.fisher_yates(&mut self.deck);
    }

    /// Move the top card of the deck to the end of the hand.
    ///
    /// An empty deck is a silent no-op that reports `DeckEmpty`.
    pub fn draw(&mut self) -> DrawOutcome {
        match self.deck.pop_back() {
            Some(card) => {
                let id = card.id;
                self.hand.push_back(card);
                log::trace!("{} drew {} ({} left in deck)", self.owner, id, self.deck.len());
                DrawOutcome::Drew(id)
            }
            None => DrawOutcome::DeckEmpty,
        }
    }

    /// Hand slot holding `card`, if present.
    #[must_use]
    pub fn hand_position(&self, card: InstanceId) -> Option<usize> {
        self.hand.iter().position(|c| c.id == card)
    }

    /// Check whether `card` is in hand.
    #[must_use]
    pub fn in_hand(&self, card: InstanceId) -> bool {
        self.hand_position(card).is_some()
    }

    /// Move `card` from the hand to the end of the play area.
    ///
    /// Returns the play-area position it landed at, or `None` (with no
    /// change) when the instance is not in hand.
    pub fn play_from_hand(&mut self, card: InstanceId) -> Option<usize> {
        let slot = self.hand_position(card)?;
        let instance = self.hand.remove(slot);
        self.play_area.push_back(instance);
        Some(self.play_area.len() - 1)
    }

    /// The seat owning these collections.
    #[must_use]
    pub fn owner(&self) -> Seat {
        self.owner
    }

    /// Deck, bottom first.
    #[must_use]
    pub fn deck(&self) -> &Vector<CardInstance> {
        &self.deck
    }

    /// Hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &Vector<CardInstance> {
        &self.hand
    }

    /// Play area, in play order.
    #[must_use]
    pub fn play_area(&self) -> &Vector<CardInstance> {
        &self.play_area
    }

    /// Next card `draw` would take.
    #[must_use]
    pub fn top_card(&self) -> Option<&CardInstance> {
        self.deck.back()
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn play_area_size(&self) -> usize {
        self.play_area.len()
    }

    /// Deck size at initialization.
    #[must_use]
    pub fn initial_deck_size(&self) -> usize {
        self.initial_deck_size
    }

    /// Cards across deck, hand and play area. Constant after initialization.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.play_area.len()
    }
}
