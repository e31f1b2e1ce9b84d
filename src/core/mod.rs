//! Core engine types: seats, instance ids, RNG, configuration, actions, errors.
//!
//! These are the building blocks every other module depends on. Nothing
//! here knows about card contents or turn sequencing.

pub mod seat;
pub mod ids;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use seat::{Seat, SeatMap};
pub use ids::{InstanceAllocator, InstanceId};
pub use rng::GameRng;
pub use config::MatchConfig;
pub use action::{Action, ActionRecord};
pub use error::{PlayRejection, SetupError, SetupResult};
