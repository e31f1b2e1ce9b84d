//! Card locations for one seat.
//!
//! ## Key Types
//!
//! - `CardCollections`: Deck (draw-only), hand, play area (append-only)
//! - `DrawOutcome`: Whether a draw moved a card or found the deck empty

pub mod collections;

pub use collections::{CardCollections, DrawOutcome};
