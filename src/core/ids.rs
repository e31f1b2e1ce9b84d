//! Card instance identification.
//!
//! Every card that lands in a deck is a distinct instance with its own
//! `InstanceId`, even when several instances share a template. Hand lookups
//! and plays go through the instance id, never through template equality.
//!
//! ## Usage
//!
//! ```
//! use duel_ccg::core::InstanceAllocator;
//!
//! let mut ids = InstanceAllocator::new();
//! let a = ids.alloc()?;
//! let b = ids.alloc()?;
//!
//! assert_ne!(a, b);
//! assert_eq!(ids.allocated(), 2);
//! # Ok::<(), duel_ccg::core::SetupError>(())
//! ```

use serde::{Deserialize, Serialize};

use super::error::{SetupError, SetupResult};

/// Unique identifier for one card instance within a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create an instance ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Monotonic instance id source shared by both seats of a duel.
///
/// Ids are never reused, so an id taken from one seat's deck can never
/// match a card in the other seat's hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceAllocator {
    next: u32,
}

impl InstanceAllocator {
    /// Create an allocator starting at `Instance(0)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next unused id.
    pub fn alloc(&mut self) -> SetupResult<InstanceId> {
        let id = InstanceId(self.next);
        self.next = self.next.checked_add(1).ok_or(SetupError::InstanceIdsExhausted)?;
        Ok(id)
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
