//! Card system: templates, costs, instances, and the template pool.
//!
//! ## Key Types
//!
//! - `Card`: Immutable template with a tagged `CardKind` payload
//! - `LessonCost`: Resource requirements (data only)
//! - `CardInstance`: One owned copy of a template inside a duel
//! - `CardPool`: Ordered template table decks are sampled from

pub mod cost;
pub mod definition;
pub mod instance;
pub mod pool;

pub use cost::{LessonCost, LessonType};
pub use definition::{
    Abilities, Card, CardId, CardKind, CardType, CharacterCard, CreatureCard, EquipTarget, House,
    ItemCard, LessonCard, Rarity, SpellCard,
};
pub use instance::CardInstance;
pub use pool::CardPool;
