//! One side of the duel: collections plus turn validation.
//!
//! A `Participant` accepts draw/play/pass requests and checks them against
//! its own turn state. Everything it does is reported as `GameEvent`s in an
//! outbox that the duel drains after each call; the participant never talks
//! to the coordinator or to the other seat directly.

use serde::{Deserialize, Serialize};

use super::turn::{TurnPhase, TurnState};
use crate::cards::{CardInstance, CardPool};
use crate::core::config::MatchConfig;
use crate::core::error::{PlayRejection, SetupResult};
use crate::core::ids::{InstanceAllocator, InstanceId};
use crate::core::rng::GameRng;
use crate::core::seat::Seat;
use crate::events::{GameEvent, TurnEndReason};
use crate::zones::{CardCollections, DrawOutcome};

/// Result of an accepted play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// Index of the card in the play area.
    pub position: usize,
    /// Plays this turn, including this one.
    pub cards_played: u8,
    /// Whether this play hit the cap and ended the turn.
    pub turn_ended: bool,
}

/// A seat with its deck, hand, play area and turn state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    seat: Seat,
    zones: CardCollections,
    turn: TurnState,
    play_cap: u8,
    outbox: Vec<GameEvent>,
}

impl Participant {
    /// Build a participant with a freshly sampled and shuffled deck.
    ///
    /// The deck uses the seat's own stream of `rng`, so the two seats'
    /// decks are independent.
    pub fn new(
        seat: Seat,
        pool: &CardPool,
        config: &MatchConfig,
        rng: &GameRng,
        ids: &mut InstanceAllocator,
    ) -> SetupResult<Self> {
        config.validate()?;

        let mut deck_rng = rng.for_context(&format!("deck/{}", seat.label()));
        let mut zones = CardCollections::initialize(seat, pool, config.deck_size, &mut deck_rng, ids)?;
        zones.shuffle(&mut deck_rng);

        Ok(Self {
            seat,
            zones,
            turn: TurnState::waiting(),
            play_cap: config.play_cap,
            outbox: Vec::new(),
        })
    }

    /// Setup-time draws, outside any turn.
    ///
    /// Used for opening hands. Emits a `Drew` event per card actually drawn.
    pub fn deal(&mut self, count: usize) {
        for _ in 0..count {
            self.draw_unchecked();
        }
    }

    /// Hand the seat its first turn without the turn-start draw.
    ///
    /// The starting seat is dealt its opening hand instead of drawing.
    pub fn begin_first_turn(&mut self, turn: u32) {
        self.turn = TurnState {
            is_my_turn: true,
            cards_played: 0,
            phase: TurnPhase::ActivePlaying,
            turn,
        };
        log::debug!("{} opens the duel on turn {}", self.seat, turn);
        self.outbox.push(GameEvent::TurnStarted { seat: self.seat, turn });
    }

    /// Start a turn: take the turn flag, reset the play count, draw one card.
    pub fn start_turn(&mut self, turn: u32) -> DrawOutcome {
        self.turn = TurnState {
            is_my_turn: true,
            cards_played: 0,
            phase: TurnPhase::ActiveDrawing,
            turn,
        };
        log::debug!("turn {} started for {}", turn, self.seat);
        self.outbox.push(GameEvent::TurnStarted { seat: self.seat, turn });

        let outcome = self.draw_unchecked();
        self.turn.phase = TurnPhase::ActivePlaying;
        outcome
    }

    /// Draw on request. Only allowed during the seat's turn.
    ///
    /// An empty deck is not an error.
    pub fn draw(&mut self) -> Result<DrawOutcome, PlayRejection> {
        if !self.turn.is_my_turn {
            return Err(PlayRejection::NotYourTurn { seat: self.seat });
        }
        Ok(self.draw_unchecked())
    }

    /// Play one hand instance.
    ///
    /// Rejections leave every piece of state untouched. Reaching the cap
    /// ends the turn.
    pub fn play_card(&mut self, card: InstanceId) -> Result<PlayOutcome, PlayRejection> {
        if !self.turn.is_my_turn {
            return Err(PlayRejection::NotYourTurn { seat: self.seat });
        }
        if self.turn.cap_reached(self.play_cap) {
            return Err(PlayRejection::PlayCapExceeded { cap: self.play_cap });
        }
        let position = self
            .zones
            .play_from_hand(card)
            .ok_or(PlayRejection::CardNotInHand { card })?;

        self.turn.cards_played += 1;
        let played = self.zones.play_area()[position].clone();
        log::trace!("{} played {} ({}/{})", self.seat, played.name(), self.turn.cards_played, self.play_cap);
        self.outbox.push(GameEvent::CardPlayed {
            seat: self.seat,
            card: played,
            position,
        });

        let turn_ended = self.turn.cap_reached(self.play_cap);
        if turn_ended {
            self.end_turn(TurnEndReason::CapReached);
        }

        Ok(PlayOutcome {
            position,
            cards_played: self.turn.cards_played,
            turn_ended,
        })
    }

    /// End the turn before reaching the cap.
    pub fn pass(&mut self) -> Result<(), PlayRejection> {
        if !self.turn.is_my_turn {
            return Err(PlayRejection::NotYourTurn { seat: self.seat });
        }
        self.end_turn(TurnEndReason::Passed);
        Ok(())
    }

    /// Take all events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.outbox)
    }

    fn draw_unchecked(&mut self) -> DrawOutcome {
        let outcome = self.zones.draw();
        if let DrawOutcome::Drew(card) = outcome {
            self.outbox.push(GameEvent::Drew {
                seat: self.seat,
                card,
                hand_size: self.zones.hand_size(),
                deck_size: self.zones.deck_size(),
            });
        }
        outcome
    }

    fn end_turn(&mut self, reason: TurnEndReason) {
        self.turn.phase = TurnPhase::TurnEnding;
        self.turn.is_my_turn = false;
        log::debug!(
            "turn {} ended for {} after {} plays ({:?})",
            self.turn.turn,
            self.seat,
            self.turn.cards_played,
            reason
        );
        self.outbox.push(GameEvent::TurnEnded {
            seat: self.seat,
            turn: self.turn.turn,
            cards_played: self.turn.cards_played,
            reason,
        });
        self.turn.phase = TurnPhase::Waiting;
    }

    // === Accessors ===

    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    #[must_use]
    pub fn is_automated(&self) -> bool {
        self.seat == Seat::Automated
    }

    /// Deck, hand and play area.
    #[must_use]
    pub fn zones(&self) -> &CardCollections {
        &self.zones
    }

    /// Current hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &im::Vector<CardInstance> {
        self.zones.hand()
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.turn.is_my_turn
    }

    #[must_use]
    pub fn cards_played_this_turn(&self) -> u8 {
        self.turn.cards_played
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase
    }

    #[must_use]
    pub fn play_cap(&self) -> u8 {
        self.play_cap
    }

    /// True when a play would currently be accepted (given a card in hand).
    #[must_use]
    pub fn can_play(&self) -> bool {
        self.turn.can_play(self.play_cap)
    }

    /// Events waiting to be drained.
    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.outbox
    }
}
