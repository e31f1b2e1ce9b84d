//! Turn alternation between the two seats.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::seat::Seat;
use crate::schedule::{Scheduler, Task};

/// Tracks whose turn it is and schedules the handoff when a turn ends.
///
/// `active` flips as soon as the handoff is scheduled; the new seat only
/// receives its turn when the `Activate` task fires. While a handoff is in
/// flight, further turn-end notices are ignored, so at most one activation
/// is ever pending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCoordinator {
    active: Seat,
    turn: u32,
    pending: Option<Seat>,
}

impl TurnCoordinator {
    /// Start with `first` holding turn 1.
    #[must_use]
    pub fn new(first: Seat) -> Self {
        Self {
            active: first,
            turn: 1,
            pending: None,
        }
    }

    /// Seat that holds, or is about to receive, the turn.
    #[must_use]
    pub fn active(&self) -> Seat {
        self.active
    }

    /// Number of the current turn (1-based).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// True between a turn end and the next activation.
    #[must_use]
    pub fn in_handoff(&self) -> bool {
        self.pending.is_some()
    }

    /// React to `seat` ending its turn.
    ///
    /// Returns the seat that will be activated, or `None` when the notice
    /// is stale (wrong seat, or a handoff is already pending).
    pub fn on_turn_ended(&mut self, seat: Seat, scheduler: &mut Scheduler, delay: Duration) -> Option<Seat> {
        if seat != self.active || self.pending.is_some() {
            log::warn!("ignoring turn end from {} (active {}, pending {:?})", seat, self.active, self.pending);
            return None;
        }
        Some(self.switch_turn(scheduler, delay))
    }

    /// Flip the active seat and schedule its activation after `delay`.
    pub fn switch_turn(&mut self, scheduler: &mut Scheduler, delay: Duration) -> Seat {
        let next = self.active.other();
        self.active = next;
        self.pending = Some(next);
        let due = scheduler.schedule(delay, Task::Activate(next));
        log::debug!("handoff to {} scheduled at {:?}", next, due);
        next
    }

    /// Consume the pending handoff for `seat`. Returns the new turn number.
    pub fn activate(&mut self, seat: Seat) -> Option<u32> {
        if self.pending != Some(seat) {
            log::warn!("stale activation for {} (pending {:?})", seat, self.pending);
            return None;
        }
        self.pending = None;
        self.turn += 1;
        Some(self.turn)
    }
}
