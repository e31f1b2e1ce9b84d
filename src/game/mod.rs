//! Match orchestration.
//!
//! ## Key Types
//!
//! - `Duel`: Owns both participants and drives the match
//! - `TurnCoordinator`: Alternates the turn after each turn end
//! - `TableView`: Public snapshot for rendering

mod coordinator;
mod duel;
mod view;

pub use coordinator::TurnCoordinator;
pub use duel::Duel;
pub use view::{SeatView, TableView};
