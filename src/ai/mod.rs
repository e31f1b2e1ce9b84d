//! Automated opponent.
//!
//! ## Key Types
//!
//! - `DecisionPolicy`: Picks the next hand card (`UniformRandom`, `OldestFirst`)
//! - `DecisionProcedure`: Plays one card per step until the turn is over
//! - `DecisionStep`: What a step did and whether another should follow

mod policy;
mod procedure;

pub use policy::{DecisionPolicy, OldestFirst, UniformRandom};
pub use procedure::{DecisionProcedure, DecisionStep};
