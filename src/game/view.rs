//! Public snapshot of the table.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::seat::{Seat, SeatMap};
use crate::participant::Participant;

/// What anyone at the table can see about one seat.
///
/// Hand contents are hidden; only the count is exposed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub hand_size: usize,
    pub deck_size: usize,
    pub play_area: Vector<CardInstance>,
    pub is_my_turn: bool,
    pub cards_played: u8,
}

impl SeatView {
    #[must_use]
    pub fn of(participant: &Participant) -> Self {
        let zones = participant.zones();
        Self {
            hand_size: zones.hand_size(),
            deck_size: zones.deck_size(),
            play_area: zones.play_area().clone(),
            is_my_turn: participant.is_my_turn(),
            cards_played: participant.cards_played_this_turn(),
        }
    }
}

/// Snapshot of the whole table for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub active: Seat,
    pub turn: u32,
    pub now: Duration,
    pub seats: SeatMap<SeatView>,
}

impl TableView {
    #[must_use]
    pub fn capture(active: Seat, turn: u32, now: Duration, participants: &SeatMap<Participant>) -> Self {
        Self {
            active,
            turn,
            now,
            seats: participants.map(|_, p| SeatView::of(p)),
        }
    }

    #[must_use]
    pub fn seat(&self, seat: Seat) -> &SeatView {
        &self.seats[seat]
    }
}

impl std::fmt::Display for TableView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "turn {} ({})", self.turn, self.active)?;
        for (seat, view) in self.seats.iter() {
            write!(
                f,
                " | {}: hand {} deck {} board {}",
                seat,
                view.hand_size,
                view.deck_size,
                view.play_area.len()
            )?;
        }
        Ok(())
    }
}
