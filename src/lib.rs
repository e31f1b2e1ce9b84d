//! # duel-ccg
//!
//! A two-seat, turn-based collectible card game engine: one human seat
//! driven by external requests, one automated seat driven by a decision
//! procedure.
//!
//! ## Design Principles
//!
//! 1. **Instances, not templates**: Every card in play is a `CardInstance`
//!    with its own `InstanceId`. Two copies of "Flyffy" are different cards.
//!
//! 2. **Events out, requests in**: The engine never renders. It accepts
//!    draw/play/pass requests and reports what happened as `GameEvent`s.
//!
//! 3. **Deterministic**: All randomness flows from one seeded `GameRng`,
//!    and all delays run on a virtual clock. Same seed, same duel.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Deck, hand and play area are
//!   `im::Vector`s, so snapshots are O(1) clones.
//!
//! - **Cooperative Scheduling**: Turn handoffs and bot deliberation are
//!   tasks on a single-threaded scheduler; exactly one transition is ever
//!   in flight.
//!
//! ## Modules
//!
//! - `core`: Seats, instance IDs, RNG, configuration, actions, errors
//! - `cards`: Card templates, costs, instances and the card pool
//! - `zones`: Deck/hand/play-area collections
//! - `events`: Game events and observers
//! - `schedule`: Virtual-clock task scheduler
//! - `participant`: Per-seat turn logic
//! - `ai`: Automated decision procedure
//! - `game`: Turn coordinator and the duel driver

pub mod core;
pub mod cards;
pub mod zones;
pub mod events;
pub mod schedule;
pub mod participant;
pub mod ai;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Seat, SeatMap,
    InstanceId, InstanceAllocator,
    GameRng,
    MatchConfig,
    Action, ActionRecord,
    PlayRejection, SetupError, SetupResult,
};

pub use crate::cards::{Card, CardId, CardInstance, CardKind, CardPool, CardType, LessonCost, LessonType, Rarity};

pub use crate::zones::{CardCollections, DrawOutcome};

pub use crate::events::{EventKind, EventLog, GameEvent, Observer, TurnEndReason};

pub use crate::schedule::{Scheduler, Task};

pub use crate::participant::{Participant, PlayOutcome, TurnPhase, TurnState};

pub use crate::ai::{DecisionPolicy, DecisionProcedure, DecisionStep, OldestFirst, UniformRandom};

pub use crate::game::{Duel, SeatView, TableView, TurnCoordinator};
