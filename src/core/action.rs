//! Action representation.
//!
//! The inbound surface of the engine is three verbs:
//! - `Draw`: take the top card of the own deck (human request)
//! - `Play(card)`: move one hand instance to the play area
//! - `Pass`: end the turn voluntarily
//!
//! Every accepted action is appended to the duel's history as an
//! `ActionRecord`.

use serde::{Deserialize, Serialize};

use super::ids::InstanceId;
use super::seat::Seat;

/// A request a seat can make on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw the top card of the own deck.
    Draw,
    /// Play the given hand instance.
    Play(InstanceId),
    /// End the turn without reaching the cap.
    Pass,
}

impl Action {
    /// The instance this action points at, if any.
    #[must_use]
    pub fn card(&self) -> Option<InstanceId> {
        match self {
            Action::Play(id) => Some(*id),
            Action::Draw | Action::Pass => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Draw => write!(f, "Draw"),
            Action::Play(id) => write!(f, "Play({})", id.raw()),
            Action::Pass => write!(f, "Pass"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub seat: Seat,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Sequence number across the whole duel (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(seat: Seat, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            seat,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_card() {
        assert_eq!(Action::Play(InstanceId(3)).card(), Some(InstanceId(3)));
        assert_eq!(Action::Draw.card(), None);
        assert_eq!(Action::Pass.card(), None);
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Play(InstanceId(12)).to_string(), "Play(12)");
        assert_eq!(Action::Pass.to_string(), "Pass");
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Seat::Automated, Action::Play(InstanceId(5)), 2, 9);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
