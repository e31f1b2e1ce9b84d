//! Event subscription.
//!
//! Consumers implement `Observer` and subscribe to a `Duel`. Every event is
//! delivered to every observer in subscription order, after the engine state
//! it describes is already in place.

use std::cell::RefCell;
use std::rc::Rc;

use super::event::{EventKind, GameEvent};
use crate::core::seat::Seat;

/// Receives every event a duel emits.
pub trait Observer {
    fn on_event(&mut self, event: &GameEvent);
}

/// Shared observers: keep one handle, subscribe a clone.
impl<O: Observer> Observer for Rc<RefCell<O>> {
    fn on_event(&mut self, event: &GameEvent) {
        self.borrow_mut().on_event(event);
    }
}

/// Observer recording every event in order.
///
/// ## Example
///
/// ```
/// use duel_ccg::core::Seat;
/// use duel_ccg::events::{EventKind, EventLog, GameEvent, Observer};
///
/// let mut log = EventLog::new();
/// log.on_event(&GameEvent::TurnStarted { seat: Seat::Human, turn: 1 });
///
/// assert_eq!(log.count(EventKind::TurnStarted), 1);
/// assert_eq!(log.count(EventKind::TurnEnded), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of events of one kind.
    #[must_use]
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    /// Events of one kind about one seat.
    pub fn for_seat(&self, seat: Seat, kind: EventKind) -> impl Iterator<Item = &GameEvent> {
        self.events
            .iter()
            .filter(move |e| e.seat() == seat && e.kind() == kind)
    }

    /// Most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Observer for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
