//! Card pool: the static template table decks are sampled from.
//!
//! Templates keep their registration order (sampling indexes into it) and
//! are also indexed by `CardId` for lookup.

use rustc_hash::FxHashMap;

use super::cost::{LessonCost, LessonType};
use super::definition::{Card, CardId, CardType, CreatureCard, LessonCard, Rarity, SpellCard};
use crate::core::error::{SetupError, SetupResult};

/// Ordered registry of card templates.
///
/// ## Example
///
/// ```
/// use duel_ccg::cards::{Card, CardPool, LessonCard, LessonType, Rarity};
///
/// let mut pool = CardPool::new();
/// pool.register(Card::new(
///     "lesson_002",
///     "Potions Lesson",
///     Rarity::Common,
///     LessonCard::new(LessonType::Potions),
/// ))
/// .unwrap();
///
/// assert_eq!(pool.len(), 1);
/// assert_eq!(pool.get_by_id("lesson_002").unwrap().name, "Potions Lesson");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    cards: Vec<Card>,
    by_id: FxHashMap<CardId, usize>,
}

impl CardPool {
    /// Create a new empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from templates, rejecting duplicate ids.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> SetupResult<Self> {
        let mut pool = Self::new();
        for card in cards {
            pool.register(card)?;
        }
        Ok(pool)
    }

    /// The shipped example pool: one lesson, one spell, one creature.
    #[must_use]
    pub fn starter() -> Self {
        let cards = vec![
            Card::new(
                "lesson_001",
                "Charms Lesson",
                Rarity::Common,
                LessonCard::new(LessonType::Charms),
            )
            .with_image("assets/cards/charms_lesson.jpg"),
            Card::new(
                "spell_001",
                "Expelliarmus",
                Rarity::Uncommon,
                SpellCard::new("Disarm target character or creature").with_damage(20),
            )
            .with_cost(LessonCost::new().with(LessonType::Charms, 2))
            .with_image("assets/cards/expelliarmus.jpg"),
            Card::new(
                "creature_001",
                "Flyffy",
                Rarity::Rare,
                CreatureCard::new(12, 21).with_ability("Flying"),
            )
            .with_cost(LessonCost::new().with(LessonType::Creatures, 10))
            .with_image("assets/cards/fluffy.jpg"),
        ];

        let mut pool = Self::new();
        for card in cards {
            let id = card.id.clone();
            pool.by_id.insert(id, pool.cards.len());
            pool.cards.push(card);
        }
        pool
    }

    /// Register a template.
    ///
    /// Fails if a template with the same id is already present.
    pub fn register(&mut self, card: Card) -> SetupResult<()> {
        if self.by_id.contains_key(&card.id) {
            return Err(SetupError::DuplicateCard { id: card.id });
        }
        self.by_id.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Template at a registration index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Template by id.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Card> {
        self.by_id.get(&CardId::new(id)).map(|&i| &self.cards[i])
    }

    /// Check if a template id is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Templates in registration order.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Find templates of one variant.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.card_type() == card_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_pool() {
        let pool = CardPool::starter();
        assert_eq!(pool.len(), 3);

        let spell = pool.get_by_id("spell_001").unwrap();
        assert_eq!(spell.name, "Expelliarmus");
        assert_eq!(spell.rarity, Rarity::Uncommon);
        assert_eq!(spell.cost.get(LessonType::Charms), 2);

        let creature = pool.get_by_id("creature_001").unwrap();
        assert_eq!(creature.cost.get(LessonType::Creatures), 10);

        assert_eq!(pool.find_by_type(CardType::Lesson).count(), 1);
    }

    #[test]
    fn test_costs_serialize_as_maps() {
        let pool = CardPool::starter();
        let spell = serde_json::to_value(pool.get_by_id("spell_001").unwrap()).unwrap();
        assert_eq!(spell["cost"], serde_json::json!({ "charms": 2 }));

        let lesson = serde_json::to_value(pool.get_by_id("lesson_001").unwrap()).unwrap();
        assert_eq!(lesson["cost"], serde_json::json!({}));
    }

    #[test]
    fn test_registration_order() {
        let pool = CardPool::starter();
        let ids: Vec<_> = pool.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["lesson_001", "spell_001", "creature_001"]);
        assert_eq!(pool.get(1).map(|c| c.name.as_str()), Some("Expelliarmus"));
        assert!(pool.get(3).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut pool = CardPool::starter();
        let dup = Card::new("spell_001", "Other", Rarity::Common, SpellCard::new("x"));

        assert_eq!(
            pool.register(dup),
            Err(SetupError::DuplicateCard { id: CardId::new("spell_001") })
        );
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_from_cards() {
        let pool = CardPool::from_cards(CardPool::starter().iter().cloned()).unwrap();
        assert_eq!(pool.len(), 3);
        assert!(pool.contains(&CardId::new("lesson_001")));

        let empty = CardPool::from_cards(Vec::new()).unwrap();
        assert!(empty.is_empty());
    }
}
