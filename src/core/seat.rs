//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! A duel always has exactly two seats: the human-driven one and the
//! automated one. `Seat::other()` is the only way turns move between them.
//!
//! ## SeatMap
//!
//! Fixed two-slot storage indexed by `Seat`, used for anything the engine
//! keeps once per participant (collections, RNG streams, view data).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    /// Driven by external requests (the UI collaborator).
    Human,
    /// Driven by the decision procedure.
    Automated,
}

impl Seat {
    /// Both seats, human first.
    pub const ALL: [Seat; 2] = [Seat::Human, Seat::Automated];

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::Human => Seat::Automated,
            Seat::Automated => Seat::Human,
        }
    }

    /// Stable 0-based index (human = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Automated => 1,
        }
    }

    /// Short label used for RNG context streams and log lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Seat::Human => "human",
            Seat::Automated => "automated",
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => write!(f, "Human"),
            Seat::Automated => write!(f, "Automated"),
        }
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use duel_ccg::core::{Seat, SeatMap};
///
/// let mut hand_sizes: SeatMap<usize> = SeatMap::new(|_| 7);
/// hand_sizes[Seat::Automated] += 1;
///
/// assert_eq!(hand_sizes[Seat::Human], 7);
/// assert_eq!(hand_sizes[Seat::Automated], 8);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::Human), factory(Seat::Automated)],
        }
    }

    /// Create a map from fallible per-seat construction.
    ///
    /// The human seat is built first; the first error is returned.
    pub fn try_new<E>(mut factory: impl FnMut(Seat) -> Result<T, E>) -> Result<Self, E> {
        let human = factory(Seat::Human)?;
        let automated = factory(Seat::Automated)?;
        Ok(Self {
            data: [human, automated],
        })
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs, human first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Map every entry into a new `SeatMap`.
    pub fn map<U>(&self, mut f: impl FnMut(Seat, &T) -> U) -> SeatMap<U> {
        SeatMap::new(|seat| f(seat, self.get(seat)))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
