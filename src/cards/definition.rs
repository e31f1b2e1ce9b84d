//! Card templates - static card data.
//!
//! A `Card` is an immutable template: identity, display name, rarity, cost,
//! and a `CardKind` carrying the variant-specific payload. Two cards with the
//! same `CardId` are the same template.
//!
//! Per-game copies of a template live in `CardInstance`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cost::{LessonCost, LessonType};

/// Template identifier (e.g. `"spell_001"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rarity tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
}

/// House a character belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum House {
    Gryffindor,
    Slytherin,
    Ravenclaw,
    Hufflepuff,
}

/// What an item may be equipped to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipTarget {
    Character,
    Creature,
    #[default]
    None,
}

/// Ability tags ("Flying", ...). Almost always zero to two entries.
pub type Abilities = SmallVec<[String; 2]>;

/// Discriminant of `CardKind`, for filtering and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Lesson,
    Spell,
    Creature,
    Character,
    Item,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardType::Lesson => "lesson",
            CardType::Spell => "spell",
            CardType::Creature => "creature",
            CardType::Character => "character",
            CardType::Item => "item",
        };
        f.write_str(name)
    }
}

/// Lesson payload: the resource it produces.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessonCard {
    pub lesson_type: LessonType,
    #[serde(default = "default_provides")]
    pub provides: u32,
}

fn default_provides() -> u32 {
    1
}

impl LessonCard {
    /// A lesson producing one unit of `lesson_type`.
    #[must_use]
    pub fn new(lesson_type: LessonType) -> Self {
        Self {
            lesson_type,
            provides: default_provides(),
        }
    }

    #[must_use]
    pub fn providing(mut self, amount: u32) -> Self {
        self.provides = amount;
        self
    }
}

/// Spell payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpellCard {
    pub effect: String,
    #[serde(default)]
    pub damage: Option<u32>,
    #[serde(default)]
    pub healing: Option<u32>,
}

impl SpellCard {
    #[must_use]
    pub fn new(effect: impl Into<String>) -> Self {
        Self {
            effect: effect.into(),
            damage: None,
            healing: None,
        }
    }

    #[must_use]
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = Some(damage);
        self
    }

    #[must_use]
    pub fn with_healing(mut self, healing: u32) -> Self {
        self.healing = Some(healing);
        self
    }
}

/// Creature payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureCard {
    pub power: u32,
    pub health: u32,
    #[serde(default)]
    pub abilities: Abilities,
}

impl CreatureCard {
    #[must_use]
    pub fn new(power: u32, health: u32) -> Self {
        Self {
            power,
            health,
            abilities: Abilities::new(),
        }
    }

    #[must_use]
    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.abilities.push(ability.into());
        self
    }
}

/// Character payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterCard {
    pub health: u32,
    #[serde(default)]
    pub abilities: Abilities,
    pub house: House,
}

impl CharacterCard {
    #[must_use]
    pub fn new(health: u32, house: House) -> Self {
        Self {
            health,
            abilities: Abilities::new(),
            house,
        }
    }

    #[must_use]
    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.abilities.push(ability.into());
        self
    }
}

/// Item payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemCard {
    pub effect: String,
    pub durability: u32,
    #[serde(default)]
    pub equip_target: EquipTarget,
}

impl ItemCard {
    #[must_use]
    pub fn new(effect: impl Into<String>, durability: u32) -> Self {
        Self {
            effect: effect.into(),
            durability,
            equip_target: EquipTarget::None,
        }
    }

    #[must_use]
    pub fn equips(mut self, target: EquipTarget) -> Self {
        self.equip_target = target;
        self
    }
}

/// Variant-specific card data.
///
/// The core never dispatches on the variant beyond reading its fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardKind {
    Lesson(LessonCard),
    Spell(SpellCard),
    Creature(CreatureCard),
    Character(CharacterCard),
    Item(ItemCard),
}

impl CardKind {
    /// The variant discriminant.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        match self {
            CardKind::Lesson(_) => CardType::Lesson,
            CardKind::Spell(_) => CardType::Spell,
            CardKind::Creature(_) => CardType::Creature,
            CardKind::Character(_) => CardType::Character,
            CardKind::Item(_) => CardType::Item,
        }
    }
}

impl From<LessonCard> for CardKind {
    fn from(card: LessonCard) -> Self {
        CardKind::Lesson(card)
    }
}

impl From<SpellCard> for CardKind {
    fn from(card: SpellCard) -> Self {
        CardKind::Spell(card)
    }
}

impl From<CreatureCard> for CardKind {
    fn from(card: CreatureCard) -> Self {
        CardKind::Creature(card)
    }
}

impl From<CharacterCard> for CardKind {
    fn from(card: CharacterCard) -> Self {
        CardKind::Character(card)
    }
}

impl From<ItemCard> for CardKind {
    fn from(card: ItemCard) -> Self {
        CardKind::Item(card)
    }
}

/// Immutable card template.
///
/// ## Example
///
/// ```
/// use duel_ccg::cards::{Card, CardType, LessonCost, LessonType, Rarity, SpellCard};
///
/// let expelliarmus = Card::new(
///     "spell_001",
///     "Expelliarmus",
///     Rarity::Uncommon,
///     SpellCard::new("Disarm target character or creature").with_damage(20),
/// )
/// .with_cost(LessonCost::new().with(LessonType::Charms, 2));
///
/// assert_eq!(expelliarmus.card_type(), CardType::Spell);
/// assert_eq!(expelliarmus.cost.get(LessonType::Charms), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Template identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Rarity tier.
    pub rarity: Rarity,

    /// Lesson resources required to play (not enforced by the core).
    #[serde(default)]
    pub cost: LessonCost,

    /// Artwork reference for the rendering collaborator. Opaque here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Variant payload.
    #[serde(flatten)]
    pub kind: CardKind,
}

impl Card {
    /// Create a template with an empty cost and no artwork.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rarity: Rarity,
        kind: impl Into<CardKind>,
    ) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            rarity,
            cost: LessonCost::new(),
            image_url: None,
            kind: kind.into(),
        }
    }

    /// Set the lesson cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: LessonCost) -> Self {
        self.cost = cost;
        self
    }

    /// Set the artwork reference (builder pattern).
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// The variant discriminant.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.kind.card_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new("lesson_001");
        assert_eq!(id.as_str(), "lesson_001");
        assert_eq!(format!("{}", id), "lesson_001");
    }

    #[test]
    fn test_lesson_defaults_to_one() {
        let lesson = LessonCard::new(LessonType::Charms);
        assert_eq!(lesson.provides, 1);
        assert_eq!(lesson.providing(3).provides, 3);
    }

    #[test]
    fn test_card_types() {
        let creature = Card::new(
            "creature_001",
            "Flyffy",
            Rarity::Rare,
            CreatureCard::new(12, 21).with_ability("Flying"),
        );
        assert_eq!(creature.card_type(), CardType::Creature);
        assert!(creature.cost.is_free());
        match &creature.kind {
            CardKind::Creature(c) => {
                assert_eq!(c.power, 12);
                assert_eq!(c.abilities.as_slice(), ["Flying".to_string()]);
            }
            other => panic!("unexpected kind {:?}", other),
        }

        let character = Card::new(
            "character_001",
            "Seeker",
            Rarity::Uncommon,
            CharacterCard::new(10, House::Ravenclaw),
        );
        assert_eq!(character.card_type(), CardType::Character);

        let item = Card::new(
            "item_001",
            "Broom",
            Rarity::Common,
            ItemCard::new("Grants flying", 3).equips(EquipTarget::Character),
        );
        assert_eq!(item.card_type(), CardType::Item);
        assert_eq!(CardType::Item.to_string(), "item");
    }

    #[test]
    fn test_spell_optional_fields() {
        let spell = SpellCard::new("Heal").with_healing(5);
        assert_eq!(spell.damage, None);
        assert_eq!(spell.healing, Some(5));
    }

    #[test]
    fn test_tagged_serialization() {
        let card = Card::new(
            "lesson_001",
            "Charms Lesson",
            Rarity::Common,
            LessonCard::new(LessonType::Charms),
        )
        .with_image("assets/cards/charms_lesson.jpg");

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["type"], "lesson");
        assert_eq!(json["lesson_type"], "charms");
        assert_eq!(json["rarity"], "common");

        let deserialized: Card = serde_json::from_value(json).unwrap();
        assert_eq!(card, deserialized);
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let json = r#"{
            "id": "lesson_002",
            "name": "Potions Lesson",
            "rarity": "common",
            "type": "lesson",
            "lesson_type": "potions"
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert!(card.cost.is_free());
        assert_eq!(card.image_url, None);
        assert_eq!(
            card.kind,
            CardKind::Lesson(LessonCard {
                lesson_type: LessonType::Potions,
                provides: 1
            })
        );
    }
}
