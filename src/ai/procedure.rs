//! The automated seat's turn driver.
//!
//! One call to `step` makes at most one play. The duel schedules the next
//! step after the deliberation delay, so plays are always strictly
//! sequential and never share an instant.

use serde::{Deserialize, Serialize};

use super::policy::{DecisionPolicy, UniformRandom};
use crate::core::error::PlayRejection;
use crate::core::ids::InstanceId;
use crate::core::rng::GameRng;
use crate::participant::Participant;

/// What one decision step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionStep {
    /// Played a card. `turn_over` is set when the turn ended with it
    /// (cap reached, or the hand ran dry and the seat passed).
    Played { card: InstanceId, turn_over: bool },
    /// Nothing in hand was playable, so the seat passed without playing.
    Yielded,
    /// Not this seat's turn; nothing happened.
    Idle,
}

impl DecisionStep {
    /// True when another step should be scheduled.
    #[must_use]
    pub fn needs_followup(self) -> bool {
        matches!(self, DecisionStep::Played { turn_over: false, .. })
    }
}

/// Selects and plays cards for a participant during its own turn.
pub struct DecisionProcedure {
    policy: Box<dyn DecisionPolicy>,
    rng: GameRng,
}

impl DecisionProcedure {
    /// Uniform random selection, the default opponent.
    #[must_use]
    pub fn uniform(rng: GameRng) -> Self {
        Self::new(Box::new(UniformRandom), rng)
    }

    /// Use a custom policy.
    #[must_use]
    pub fn new(policy: Box<dyn DecisionPolicy>, rng: GameRng) -> Self {
        Self { policy, rng }
    }

    /// Name of the active policy.
    #[must_use]
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Make at most one play.
    ///
    /// If the policy picks a card that cannot be played, a uniform choice
    /// over the hand is used instead. With nothing playable the seat passes.
    pub fn step(&mut self, participant: &mut Participant) -> DecisionStep {
        if !participant.can_play() {
            return DecisionStep::Idle;
        }

        if let Some(card) = self.policy.choose(participant.hand(), &mut self.rng) {
            match self.play(participant, card) {
                Ok(step) => return step,
                Err(rejection) => log::warn!(
                    "{} policy '{}' chose an unplayable card: {}",
                    participant.seat(),
                    self.policy.name(),
                    rejection
                ),
            }
            if let Some(card) = UniformRandom.choose(participant.hand(), &mut self.rng) {
                if let Ok(step) = self.play(participant, card) {
                    return step;
                }
            }
        }

        log::debug!("{} has nothing to play, passing", participant.seat());
        match participant.pass() {
            Ok(()) => DecisionStep::Yielded,
            Err(_) => DecisionStep::Idle,
        }
    }

    fn play(&mut self, participant: &mut Participant, card: InstanceId) -> Result<DecisionStep, PlayRejection> {
        let outcome = participant.play_card(card)?;
        if outcome.turn_ended {
            return Ok(DecisionStep::Played { card, turn_over: true });
        }
        if participant.hand().is_empty() {
            log::debug!("{} emptied its hand, passing", participant.seat());
            let turn_over = participant.pass().is_ok();
            return Ok(DecisionStep::Played { card, turn_over });
        }
        Ok(DecisionStep::Played { card, turn_over: false })
    }

    /// Step until the turn is over, ignoring pacing.
    ///
    /// Useful for simulations and tests; a live duel paces each step
    /// through the scheduler instead.
    pub fn run_turn(&mut self, participant: &mut Participant) -> Vec<DecisionStep> {
        let mut steps = Vec::new();
        loop {
            let step = self.step(participant);
            if step != DecisionStep::Idle {
                steps.push(step);
            }
            if !step.needs_followup() {
                return steps;
            }
        }
    }
}

impl std::fmt::Debug for DecisionProcedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionProcedure")
            .field("policy", &self.policy.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::policy::OldestFirst;
    use crate::cards::CardPool;
    use crate::core::config::MatchConfig;
    use crate::core::ids::InstanceAllocator;
    use crate::core::seat::Seat;

    fn bot_with_hand(hand: usize) -> Participant {
        let config = MatchConfig::default().with_deck_size(10).with_opening_hand(0);
        let mut ids = InstanceAllocator::new();
        let mut p = Participant::new(Seat::Automated, &CardPool::starter(), &config, &GameRng::new(5), &mut ids).unwrap();
        p.deal(hand);
        p.begin_first_turn(1);
        p
    }

    #[test]
    fn test_plays_cap_from_three_cards() {
        let mut p = bot_with_hand(3);
        let mut procedure = DecisionProcedure::uniform(GameRng::new(9));

        let steps = procedure.run_turn(&mut p);

        assert_eq!(steps.len(), 2);
        assert!(matches!(steps[0], DecisionStep::Played { turn_over: false, .. }));
        assert!(matches!(steps[1], DecisionStep::Played { turn_over: true, .. }));
        assert_eq!(p.zones().play_area_size(), 2);
        assert_eq!(p.hand().len(), 1);
        assert!(!p.is_my_turn());

        let played: Vec<_> = p.zones().play_area().iter().map(|c| c.id).collect();
        assert_ne!(played[0], played[1]);
    }

    #[test]
    fn test_single_card_hand_plays_then_passes() {
        let mut p = bot_with_hand(1);
        let mut procedure = DecisionProcedure::uniform(GameRng::new(9));

        let steps = procedure.run_turn(&mut p);

        assert_eq!(steps.len(), 1);
        assert!(matches!(steps[0], DecisionStep::Played { turn_over: true, .. }));
        assert_eq!(p.zones().play_area_size(), 1);
        assert!(!p.is_my_turn());
    }

    #[test]
    fn test_empty_hand_yields() {
        let mut p = bot_with_hand(0);
        let mut procedure = DecisionProcedure::uniform(GameRng::new(9));

        assert_eq!(procedure.step(&mut p), DecisionStep::Yielded);
        assert!(!p.is_my_turn());
        assert_eq!(p.zones().play_area_size(), 0);
    }

    #[test]
    fn test_idle_outside_turn() {
        let config = MatchConfig::default().with_deck_size(10).with_opening_hand(0);
        let mut ids = InstanceAllocator::new();
        let mut p = Participant::new(Seat::Automated, &CardPool::starter(), &config, &GameRng::new(5), &mut ids).unwrap();
        p.deal(3);
        let before = p.clone();

        let mut procedure = DecisionProcedure::uniform(GameRng::new(9));
        assert_eq!(procedure.step(&mut p), DecisionStep::Idle);
        assert!(procedure.run_turn(&mut p).is_empty());
        assert_eq!(p, before);
    }

    /// Picks an id that is never in any hand.
    struct Phantom;

    impl DecisionPolicy for Phantom {
        fn choose(&mut self, _hand: &im::Vector<crate::cards::CardInstance>, _rng: &mut GameRng) -> Option<InstanceId> {
            Some(InstanceId(u32::MAX))
        }

        fn name(&self) -> &'static str {
            "phantom"
        }
    }

    #[test]
    fn test_unplayable_choice_falls_back_to_hand() {
        let mut p = bot_with_hand(3);
        let hand: Vec<_> = p.hand().iter().map(|c| c.id).collect();
        let mut procedure = DecisionProcedure::new(Box::new(Phantom), GameRng::new(2));

        let steps = procedure.run_turn(&mut p);

        assert_eq!(steps.len(), 2);
        assert!(matches!(steps[1], DecisionStep::Played { turn_over: true, .. }));
        assert!(p.zones().play_area().iter().all(|c| hand.contains(&c.id)));
        assert!(!p.is_my_turn());
    }

    #[test]
    fn test_unplayable_choice_on_empty_hand_passes() {
        let mut p = bot_with_hand(0);
        let mut procedure = DecisionProcedure::new(Box::new(Phantom), GameRng::new(2));

        assert_eq!(procedure.step(&mut p), DecisionStep::Yielded);
        assert!(!p.is_my_turn());
    }

    #[test]
    fn test_custom_policy() {
        let mut p = bot_with_hand(3);
        let oldest = p.hand()[0].id;
        let mut procedure = DecisionProcedure::new(Box::new(OldestFirst), GameRng::new(1));

        assert_eq!(procedure.policy_name(), "oldest-first");
        assert_eq!(procedure.step(&mut p), DecisionStep::Played { card: oldest, turn_over: false });
    }
}
