//! Lesson resources and card costs.
//!
//! Lessons produce one of five resource categories. A card's cost is a
//! small mapping from category to required amount; most cards need one or
//! two categories, so the mapping lives inline in a `SmallVec`.
//!
//! Costs are data only. Play validation does not consult them.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

/// Resource category produced by lesson cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonType {
    Charms,
    Transfiguration,
    Potions,
    Quidditch,
    Creatures,
}

impl LessonType {
    /// All categories in declaration order.
    pub const ALL: [LessonType; 5] = [
        LessonType::Charms,
        LessonType::Transfiguration,
        LessonType::Potions,
        LessonType::Quidditch,
        LessonType::Creatures,
    ];
}

impl std::fmt::Display for LessonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LessonType::Charms => "charms",
            LessonType::Transfiguration => "transfiguration",
            LessonType::Potions => "potions",
            LessonType::Quidditch => "quidditch",
            LessonType::Creatures => "creatures",
        };
        f.write_str(name)
    }
}

/// Required lesson resources, by category. May be empty.
///
/// Serializes as a map from category to amount, e.g. `{"charms": 2}`.
///
/// ## Example
///
/// ```
/// use duel_ccg::cards::{LessonCost, LessonType};
///
/// let cost = LessonCost::new()
///     .with(LessonType::Charms, 2)
///     .with(LessonType::Potions, 1);
///
/// assert_eq!(cost.get(LessonType::Charms), 2);
/// assert_eq!(cost.get(LessonType::Quidditch), 0);
/// assert_eq!(cost.total(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LessonCost {
    entries: SmallVec<[(LessonType, u32); 2]>,
}

impl LessonCost {
    /// An empty (free) cost.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` of `lesson` (builder pattern). Repeated categories accumulate.
    #[must_use]
    pub fn with(mut self, lesson: LessonType, amount: u32) -> Self {
        self.add(lesson, amount);
        self
    }

    /// Add `amount` of `lesson`. Zero amounts are not stored.
    pub fn add(&mut self, lesson: LessonType, amount: u32) {
        if amount == 0 {
            return;
        }
        match self.entries.iter_mut().find(|(l, _)| *l == lesson) {
            Some((_, existing)) => *existing += amount,
            None => self.entries.push((lesson, amount)),
        }
    }

    /// Amount required of one category.
    #[must_use]
    pub fn get(&self, lesson: LessonType) -> u32 {
        self.entries
            .iter()
            .find(|(l, _)| *l == lesson)
            .map_or(0, |(_, amount)| *amount)
    }

    /// Sum over all categories.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, amount)| amount).sum()
    }

    /// True when nothing is required.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (category, amount) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (LessonType, u32)> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<(LessonType, u32)> for LessonCost {
    fn from_iter<I: IntoIterator<Item = (LessonType, u32)>>(iter: I) -> Self {
        let mut cost = Self::new();
        for (lesson, amount) in iter {
            cost.add(lesson, amount);
        }
        cost
    }
}

impl Serialize for LessonCost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (lesson, amount) in &self.entries {
            map.serialize_entry(lesson, amount)?;
        }
        map.end()
    }
}

struct LessonCostVisitor;

impl<'de> Visitor<'de> for LessonCostVisitor {
    type Value = LessonCost;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from lesson type to amount")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<LessonCost, A::Error> {
        let mut cost = LessonCost::new();
        while let Some((lesson, amount)) = access.next_entry::<LessonType, u32>()? {
            cost.add(lesson, amount);
        }
        Ok(cost)
    }
}

impl<'de> Deserialize<'de> for LessonCost {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LessonCostVisitor)
    }
}
