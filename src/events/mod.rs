//! Event system.
//!
//! The engine reports everything observable through `GameEvent`s:
//! draws, plays, turn starts and turn ends. The rendering collaborator and
//! the turn coordinator are both consumers; neither reaches into participant
//! state to learn what happened.
//!
//! ## Key Types
//!
//! - `GameEvent`: One observable occurrence
//! - `EventKind`: Event discriminant for filtering
//! - `Observer`: Subscription interface
//! - `EventLog`: Observer that records everything (tests, replays)

pub mod event;
pub mod observer;

pub use event::{EventKind, GameEvent, TurnEndReason};
pub use observer::{EventLog, Observer};
