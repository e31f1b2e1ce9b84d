//! Card instances - per-game copies of a template.
//!
//! Each instance owns its own clone of the `Card` template, so nothing held
//! in one deck, hand or play area aliases another. Identity is the
//! `InstanceId`; two instances of the same template are still different
//! cards for hand lookups.

use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId, CardType};
use crate::core::ids::InstanceId;
use crate::core::seat::Seat;

/// A card instance in a duel.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id for this copy.
    pub id: InstanceId,

    /// Seat whose deck this instance was built into.
    pub owner: Seat,

    /// Cloned template data.
    pub card: Card,
}

impl CardInstance {
    /// Create an instance by cloning `template`.
    #[must_use]
    pub fn new(id: InstanceId, owner: Seat, template: &Card) -> Self {
        Self {
            id,
            owner,
            card: template.clone(),
        }
    }

    /// Template id of the underlying card.
    #[must_use]
    pub fn card_id(&self) -> &CardId {
        &self.card.id
    }

    /// Display name of the underlying card.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.card.name
    }

    /// Variant discriminant of the underlying card.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.card.card_type()
    }

    /// True when both instances come from the same template.
    #[must_use]
    pub fn same_template(&self, other: &CardInstance) -> bool {
        self.card.id == other.card.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{LessonCard, LessonType, Rarity};

    fn lesson() -> Card {
        Card::new("lesson_001", "Charms Lesson", Rarity::Common, LessonCard::new(LessonType::Charms))
    }

    #[test]
    fn test_instance_new() {
        let template = lesson();
        let instance = CardInstance::new(InstanceId(10), Seat::Human, &template);

        assert_eq!(instance.id, InstanceId(10));
        assert_eq!(instance.owner, Seat::Human);
        assert_eq!(instance.card_id().as_str(), "lesson_001");
        assert_eq!(instance.name(), "Charms Lesson");
        assert_eq!(instance.card_type(), CardType::Lesson);
    }

    #[test]
    fn test_same_template_different_identity() {
        let template = lesson();
        let a = CardInstance::new(InstanceId(1), Seat::Human, &template);
        let b = CardInstance::new(InstanceId(2), Seat::Human, &template);

        assert!(a.same_template(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_instance_does_not_alias_template() {
        let mut template = lesson();
        let instance = CardInstance::new(InstanceId(1), Seat::Automated, &template);

        template.name = "Renamed".to_string();
        assert_eq!(instance.name(), "Charms Lesson");
    }

    #[test]
    fn test_instance_serialization() {
        let instance = CardInstance::new(InstanceId(3), Seat::Automated, &lesson());
        let json = serde_json::to_string(&instance).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(instance, deserialized);
    }
}
