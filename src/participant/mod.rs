//! Participants: one per seat.
//!
//! A participant owns its `CardCollections` and a `TurnState`, and validates
//! every draw/play/pass against them. Rejections come back as
//! `PlayRejection`s and change nothing.
//!
//! ## Turn cycle
//!
//! - `Waiting → ActiveDrawing`: activation; flag set, count reset, one draw
//! - `ActiveDrawing → ActivePlaying`: immediately after the draw
//! - `ActivePlaying → TurnEnding`: the cap is reached, or the seat passes
//! - `TurnEnding → Waiting`: flag cleared, `TurnEnded` emitted

mod actor;
mod turn;

pub use actor::{Participant, PlayOutcome};
pub use turn::{TurnPhase, TurnState};
