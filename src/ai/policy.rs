//! Card selection policies for the automated seat.
//!
//! A policy sees only its own hand. It gets no view of the opponent, the
//! board, or card costs.

use im::Vector;

use crate::cards::CardInstance;
use crate::core::ids::InstanceId;
use crate::core::rng::GameRng;

/// Chooses which hand instance to play next.
pub trait DecisionPolicy {
    /// Pick a card from `hand`, or `None` if the hand is empty.
    fn choose(&mut self, hand: &Vector<CardInstance>, rng: &mut GameRng) -> Option<InstanceId>;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Uniform random choice over hand slots.
///
/// Every slot is equally likely, regardless of card value or cost.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl DecisionPolicy for UniformRandom {
    fn choose(&mut self, hand: &Vector<CardInstance>, rng: &mut GameRng) -> Option<InstanceId> {
        if hand.is_empty() {
            return None;
        }
        hand.get(rng.gen_index(hand.len())).map(|c| c.id)
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}

/// Always plays the oldest card in hand. Deterministic; handy for replays.
#[derive(Clone, Copy, Debug, Default)]
pub struct OldestFirst;

impl DecisionPolicy for OldestFirst {
    fn choose(&mut self, hand: &Vector<CardInstance>, _rng: &mut GameRng) -> Option<InstanceId> {
        hand.front().map(|c| c.id)
    }

    fn name(&self) -> &'static str {
        "oldest-first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, LessonCard, LessonType, Rarity};
    use crate::core::seat::Seat;

    fn hand(n: u32) -> Vector<CardInstance> {
        let card = Card::new("lesson_001", "Charms Lesson", Rarity::Common, LessonCard::new(LessonType::Charms));
        (0..n)
            .map(|i| CardInstance::new(InstanceId(i), Seat::Automated, &card))
            .collect()
    }

    #[test]
    fn test_uniform_empty_hand() {
        let mut rng = GameRng::new(1);
        assert_eq!(UniformRandom.choose(&Vector::new(), &mut rng), None);
    }

    #[test]
    fn test_uniform_covers_every_slot() {
        let hand = hand(4);
        let mut rng = GameRng::new(42);
        let mut counts = [0usize; 4];

        for _ in 0..4000 {
            let id = UniformRandom.choose(&hand, &mut rng).unwrap();
            counts[id.raw() as usize] += 1;
        }

        // Expected 1000 each; allow a generous band.
        for count in counts {
            assert!((850..=1150).contains(&count), "slot count {} out of range", count);
        }
    }

    #[test]
    fn test_oldest_first() {
        let hand = hand(3);
        let mut rng = GameRng::new(0);
        assert_eq!(OldestFirst.choose(&hand, &mut rng), Some(InstanceId(0)));
        assert_eq!(OldestFirst.name(), "oldest-first");
    }
}
