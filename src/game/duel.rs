//! A full match: two participants, the coordinator and the scheduler.

use std::time::Duration;

use im::Vector;

use super::coordinator::TurnCoordinator;
use super::view::TableView;
use crate::ai::{DecisionPolicy, DecisionProcedure, DecisionStep};
use crate::cards::CardPool;
use crate::core::action::{Action, ActionRecord};
use crate::core::config::MatchConfig;
use crate::core::error::{PlayRejection, SetupResult};
use crate::core::ids::{InstanceAllocator, InstanceId};
use crate::core::rng::GameRng;
use crate::core::seat::{Seat, SeatMap};
use crate::events::{EventLog, GameEvent, Observer, TurnEndReason};
use crate::participant::{Participant, PlayOutcome};
use crate::schedule::{Scheduler, Task};
use crate::zones::DrawOutcome;

/// Top-level match driver.
///
/// The human seat is driven through `request_*`; the automated seat is
/// driven by scheduled decision steps. Nothing runs on its own: callers
/// pump the virtual clock with `step`, `advance_by` or `run_until_idle`.
///
/// ## Example
///
/// ```
/// use duel_ccg::{CardPool, Duel, MatchConfig, Seat};
///
/// let mut duel = Duel::new(&CardPool::starter(), MatchConfig::default().with_seed(7)).unwrap();
/// assert_eq!(duel.active_seat(), Seat::Human);
///
/// let a = duel.human().hand()[0].id;
/// let b = duel.human().hand()[1].id;
/// duel.request_play(a).unwrap();
/// duel.request_play(b).unwrap();
///
/// // Handoff, the bot's two plays, and the handoff back.
/// duel.run_until_idle();
/// assert_eq!(duel.active_seat(), Seat::Human);
/// assert_eq!(duel.automated().zones().play_area_size(), 2);
/// ```
pub struct Duel {
    config: MatchConfig,
    rng: GameRng,
    participants: SeatMap<Participant>,
    coordinator: TurnCoordinator,
    scheduler: Scheduler,
    procedure: DecisionProcedure,
    observers: Vec<Box<dyn Observer>>,
    journal: EventLog,
    history: Vector<ActionRecord>,
    sequence: u32,
}

impl Duel {
    /// Build decks, deal opening hands and give the human seat turn 1.
    ///
    /// Opening hands are dealt one card at a time, human first.
    pub fn new(pool: &CardPool, config: MatchConfig) -> SetupResult<Self> {
        config.validate()?;

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut ids = InstanceAllocator::new();
        let participants = SeatMap::try_new(|seat| Participant::new(seat, pool, &config, &rng, &mut ids))?;
        let procedure = DecisionProcedure::uniform(rng.for_context("decision"));

        log::info!(
            "duel set up: seed {}, {} cards per deck, opening hand {}, cap {}",
            rng.seed(),
            config.deck_size,
            config.opening_hand,
            config.play_cap
        );

        let mut duel = Self {
            config,
            rng,
            participants,
            coordinator: TurnCoordinator::new(Seat::Human),
            scheduler: Scheduler::new(),
            procedure,
            observers: Vec::new(),
            journal: EventLog::new(),
            history: Vector::new(),
            sequence: 0,
        };

        for _ in 0..duel.config.opening_hand {
            for seat in Seat::ALL {
                duel.participants[seat].deal(1);
                duel.dispatch();
            }
        }
        duel.participants[Seat::Human].begin_first_turn(duel.coordinator.turn());
        duel.dispatch();

        Ok(duel)
    }

    /// Swap the automated seat's card selection.
    ///
    /// The policy draws from the same `"decision"` stream as the default.
    #[must_use]
    pub fn with_policy(mut self, policy: Box<dyn DecisionPolicy>) -> Self {
        self.procedure = DecisionProcedure::new(policy, self.rng.for_context("decision"));
        self
    }

    /// Register an observer for all future events.
    ///
    /// Setup events are already in the journal; they are not replayed.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Inbound requests (human seat) ===

    /// Draw the top card of the human deck.
    pub fn request_draw(&mut self) -> Result<DrawOutcome, PlayRejection> {
        let result = self.participants[Seat::Human].draw();
        self.settle(Seat::Human, Action::Draw, result)
    }

    /// Play a hand instance from the human seat.
    pub fn request_play(&mut self, card: InstanceId) -> Result<PlayOutcome, PlayRejection> {
        let result = self.participants[Seat::Human].play_card(card);
        self.settle(Seat::Human, Action::Play(card), result)
    }

    /// End the human turn early.
    pub fn request_pass(&mut self) -> Result<(), PlayRejection> {
        let result = self.participants[Seat::Human].pass();
        self.settle(Seat::Human, Action::Pass, result)
    }

    /// Apply an action on behalf of any seat.
    ///
    /// Replays and scripted tests use this; the automated seat is otherwise
    /// driven by its decision procedure.
    pub fn apply(&mut self, seat: Seat, action: Action) -> Result<(), PlayRejection> {
        let participant = &mut self.participants[seat];
        let result = match action {
            Action::Draw => participant.draw().map(drop),
            Action::Play(card) => participant.play_card(card).map(drop),
            Action::Pass => participant.pass(),
        };
        self.settle(seat, action, result)
    }

    fn settle<T>(&mut self, seat: Seat, action: Action, result: Result<T, PlayRejection>) -> Result<T, PlayRejection> {
        match &result {
            Ok(_) if action == Action::Draw => self.record(seat, action),
            Ok(_) => {}
            Err(rejection) => log::warn!("rejected {} from {}: {}", action, seat, rejection),
        }
        self.dispatch();
        result
    }

    // === Scheduler pump ===

    /// Fire the earliest scheduled task, advancing the clock to it.
    pub fn step(&mut self) -> Option<Task> {
        let scheduled = self.scheduler.pop_next()?;
        self.fire(scheduled.task);
        Some(scheduled.task)
    }

    /// Fire tasks until nothing is scheduled. Returns how many fired.
    ///
    /// The queue drains exactly when the human seat holds the turn, since
    /// only the human can end it.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while self.step().is_some() {
            fired += 1;
        }
        fired
    }

    /// Fire every task due within `window`, then move the clock to its end.
    pub fn advance_by(&mut self, window: Duration) -> usize {
        let deadline = self.scheduler.now() + window;
        let mut fired = 0;
        while let Some(scheduled) = self.scheduler.pop_due(deadline) {
            self.fire(scheduled.task);
            fired += 1;
        }
        self.scheduler.advance_to(deadline);
        fired
    }

    fn fire(&mut self, task: Task) {
        match task {
            Task::Activate(seat) => {
                let Some(turn) = self.coordinator.activate(seat) else {
                    return;
                };
                self.participants[seat].start_turn(turn);
                self.dispatch();
                if self.participants[seat].is_automated() {
                    self.scheduler
                        .schedule(self.config.deliberation_delay, Task::Deliberate { seat, turn });
                }
            }
            Task::Deliberate { seat, turn } => {
                // A deliberation only belongs to the turn that scheduled it.
                if turn != self.coordinator.turn() || !self.participants[seat].is_my_turn() {
                    log::debug!("dropping stale deliberation for {} from turn {}", seat, turn);
                    return;
                }
                let step = self.procedure.step(&mut self.participants[seat]);
                log::debug!("{} ({}) deliberated: {:?}", seat, self.procedure.policy_name(), step);
                self.dispatch();
                if step.needs_followup() {
                    self.scheduler
                        .schedule(self.config.deliberation_delay, Task::Deliberate { seat, turn });
                } else if step == DecisionStep::Idle {
                    log::warn!("deliberation for {} on turn {} made no progress", seat, turn);
                }
            }
        }
    }

    // === Event dispatch ===

    fn dispatch(&mut self) {
        for seat in Seat::ALL {
            for event in self.participants[seat].take_events() {
                self.publish(event);
            }
        }
    }

    fn publish(&mut self, event: GameEvent) {
        match &event {
            GameEvent::CardPlayed { seat, card, .. } => self.record(*seat, Action::Play(card.id)),
            GameEvent::TurnEnded { seat, reason: TurnEndReason::Passed, .. } => self.record(*seat, Action::Pass),
            _ => {}
        }

        for observer in &mut self.observers {
            observer.on_event(&event);
        }
        self.journal.on_event(&event);

        if let GameEvent::TurnEnded { seat, .. } = event {
            self.coordinator
                .on_turn_ended(seat, &mut self.scheduler, self.config.handoff_delay);
        }
    }

    fn record(&mut self, seat: Seat, action: Action) {
        let record = ActionRecord::new(seat, action, self.coordinator.turn(), self.sequence);
        self.sequence += 1;
        self.history.push_back(record);
    }

    // === Queries ===

    /// Actions `seat` could take right now.
    #[must_use]
    pub fn legal_actions(&self, seat: Seat) -> Vec<Action> {
        let participant = &self.participants[seat];
        if !participant.is_my_turn() {
            return Vec::new();
        }

        let mut actions = Vec::with_capacity(participant.hand().len() + 2);
        actions.push(Action::Draw);
        if participant.can_play() {
            actions.extend(participant.hand().iter().map(|c| Action::Play(c.id)));
        }
        actions.push(Action::Pass);
        actions
    }

    #[must_use]
    pub fn participant(&self, seat: Seat) -> &Participant {
        &self.participants[seat]
    }

    #[must_use]
    pub fn human(&self) -> &Participant {
        &self.participants[Seat::Human]
    }

    #[must_use]
    pub fn automated(&self) -> &Participant {
        &self.participants[Seat::Automated]
    }

    /// Seat that holds, or is about to receive, the turn.
    #[must_use]
    pub fn active_seat(&self) -> Seat {
        self.coordinator.active()
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.coordinator.turn()
    }

    /// True between a turn end and the next activation.
    #[must_use]
    pub fn in_handoff(&self) -> bool {
        self.coordinator.in_handoff()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Tasks waiting on the scheduler.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// Every event since setup, in emission order.
    #[must_use]
    pub fn journal(&self) -> &EventLog {
        &self.journal
    }

    /// Accepted actions, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Seed of the duel's root RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn view(&self) -> TableView {
        TableView::capture(
            self.coordinator.active(),
            self.coordinator.turn(),
            self.scheduler.now(),
            &self.participants,
        )
    }
}

impl std::fmt::Debug for Duel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Duel")
            .field("seed", &self.rng.seed())
            .field("active", &self.coordinator.active())
            .field("turn", &self.coordinator.turn())
            .field("now", &self.scheduler.now())
            .field("pending_tasks", &self.scheduler.len())
            .finish()
    }
}
