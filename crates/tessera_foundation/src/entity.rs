//! Entity handles with generational indices.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Entity handle with a generational index for stale reference detection.
///
/// The generation counter increments when an entity id is recycled after
/// destruction, so a handle issued before the recycle can never be confused
/// with one issued after.
///
/// # Layout
/// - `id`: 32-bit index into pool storage; id 0 is a reserved sentinel and
///   is never issued to callers
/// - `generation`: 32-bit generation counter (wraps on overflow)
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entity {
    /// Index into pool storage.
    pub id: u32,
    /// Generation counter for stale reference detection.
    pub generation: u32,
}

impl Entity {
    /// Creates a new entity handle with the given id and generation.
    #[must_use]
    pub const fn new(id: u32, generation: u32) -> Self {
        Self { id, generation }
    }

    /// Returns true if this handle carries the reserved sentinel id.
    ///
    /// The sentinel anchors the pool's free list and is never issued, so a
    /// sentinel handle can only come from manual construction.
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        self.id == 0
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}v{})", self.id, self.generation)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.id)
    }
}
