//! Virtual-clock task queue.
//!
//! Tasks are kept in a min-heap keyed by `(due, sequence)`. Popping a task
//! advances the clock to its due time. Tasks due at the same instant fire
//! in the order they were scheduled, and every scheduled task fires exactly
//! once; there is no cancellation.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Task;

/// A task waiting in the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Virtual time at which the task fires.
    pub due: Duration,
    /// Scheduling order, breaks ties between equal due times.
    pub sequence: u64,
    pub task: Task,
}

/// Deterministic cooperative scheduler.
///
/// ## Usage
///
/// ```
/// use duel_ccg::core::Seat;
/// use duel_ccg::schedule::{Scheduler, Task};
/// use std::time::Duration;
///
/// let mut scheduler = Scheduler::new();
/// scheduler.schedule(Duration::from_millis(500), Task::Activate(Seat::Automated));
/// scheduler.schedule(Duration::from_millis(100), Task::Deliberate { seat: Seat::Automated, turn: 2 });
///
/// let first = scheduler.pop_next().unwrap();
/// assert_eq!(first.task, Task::Deliberate { seat: Seat::Automated, turn: 2 });
/// assert_eq!(scheduler.now(), Duration::from_millis(100));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_sequence: u64,
    queue: BinaryHeap<Reverse<ScheduledTask>>,
}

impl Scheduler {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `task` to fire `delay` after now. Returns its due time.
    pub fn schedule(&mut self, delay: Duration, task: Task) -> Duration {
        let due = self.now + delay;
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(Reverse(ScheduledTask { due, sequence, task }));
        log::trace!("scheduled {:?} at {:?}", task, due);
        due
    }

    /// Remove the earliest task and advance the clock to its due time.
    pub fn pop_next(&mut self) -> Option<ScheduledTask> {
        let Reverse(next) = self.queue.pop()?;
        self.now = self.now.max(next.due);
        Some(next)
    }

    /// Like `pop_next`, but only if the earliest task is due at or before `deadline`.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<ScheduledTask> {
        match self.peek_due() {
            Some(due) if due <= deadline => self.pop_next(),
            _ => None,
        }
    }

    /// Move the clock forward to `time` without firing anything.
    ///
    /// The clock never moves backwards.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }

    /// Due time of the earliest task.
    #[must_use]
    pub fn peek_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(t)| t.due)
    }

    /// Check whether an identical task is waiting.
    #[must_use]
    pub fn is_pending(&self, task: Task) -> bool {
        self.queue.iter().any(|Reverse(t)| t.task == task)
    }

    /// Number of waiting tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
