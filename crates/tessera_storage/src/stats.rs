//! Read-only world counters.
//!
//! Stats are plain data snapshots read on demand; presentation belongs to
//! the caller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of world-level counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldStats {
    /// Entity-pool counters.
    pub entities: EntityStats,
}

/// Entity-pool counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityStats {
    /// Live entities.
    pub used: usize,
    /// Slots ever allocated, sentinel excluded.
    pub total: usize,
    /// Recycled ids awaiting reuse.
    pub recycled: usize,
    /// Pool capacity reserved so far.
    pub capacity: usize,
}
