//! Deferred work on a single-threaded cooperative scheduler.
//!
//! The engine only ever suspends at two points: the coordinator's handoff
//! delay and the decision procedure's delay between plays. Both are modeled
//! as `Task`s on a `Scheduler` driven by the duel, so there is exactly one
//! transition in flight at any time and no locking.

mod scheduler;

pub use scheduler::{ScheduledTask, Scheduler};

use serde::{Deserialize, Serialize};

use crate::core::Seat;

/// Work the duel performs when a scheduled delay elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Task {
    /// Start the given seat's turn (coordinator handoff).
    Activate(Seat),
    /// Run one step of the decision procedure for `seat`, valid only
    /// during the turn numbered `turn`.
    Deliberate { seat: Seat, turn: u32 },
}

impl Task {
    /// The seat this task acts on.
    #[must_use]
    pub fn seat(self) -> Seat {
        match self {
            Task::Activate(seat) | Task::Deliberate { seat, .. } => seat,
        }
    }
}
