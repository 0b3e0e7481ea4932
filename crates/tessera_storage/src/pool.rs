//! Generational entity allocation with an in-array free list.
//!
//! The `EntityPool` issues entity handles and recycles destroyed ids. Each
//! slot records the generation for its id; recycled slots are threaded into
//! a LIFO free list through an explicit `next_free` field, so allocation and
//! recycling are O(1) and stale handles are detected without any scan.

// Allow usize/u32 casts - slot counts are bounded well below u32::MAX
#![allow(clippy::cast_possible_truncation)]

use tessera_foundation::{Entity, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One entry in the slot array.
///
/// `next_free == own index` means the slot is not parked in the free list
/// (its id is live or was never issued). A parked slot's `next_free` points
/// at the next parked slot, forming a LIFO chain rooted at the pool's `next`
/// cursor.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Slot {
    next_free: u32,
    generation: u32,
}

/// Allocates and recycles entity handles.
///
/// Slot 0 is a reserved sentinel anchoring the free list; it is never issued
/// and never recycled, and is excluded from all counts.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityPool {
    slots: Vec<Slot>,
    /// Head of the free list; meaningful only while `available > 0`.
    next: u32,
    /// Number of slots currently parked in the free list.
    available: u32,
}

impl Default for EntityPool {
    fn default() -> Self {
        Self::new(0)
    }
}

impl EntityPool {
    /// Creates a pool with capacity reserved for `capacity` entities.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity.saturating_add(1));
        slots.push(Slot {
            next_free: 0,
            generation: u32::MAX,
        });
        Self {
            slots,
            next: 0,
            available: 0,
        }
    }

    /// Issues an entity handle.
    ///
    /// Pops the most recently recycled id when one is available (LIFO),
    /// otherwise appends a fresh slot at generation 0.
    pub fn get(&mut self) -> Entity {
        if self.available == 0 {
            let id = self.slots.len() as u32;
            self.slots.push(Slot {
                next_free: id,
                generation: 0,
            });
            return Entity::new(id, 0);
        }

        let id = self.next;
        let slot = &mut self.slots[id as usize];
        self.next = slot.next_free;
        slot.next_free = id;
        self.available -= 1;
        Entity::new(id, slot.generation)
    }

    /// Recycles an entity's id, invalidating the handle.
    ///
    /// The slot's generation increments (wrapping to 0 on overflow) and the
    /// id becomes the new free-list head. The caller must have confirmed
    /// [`alive`](Self::alive) beforehand; recycling does not re-check, so a
    /// double recycle corrupts the free list.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::RecycleSentinel`](tessera_foundation::ErrorKind::RecycleSentinel)
    /// if the handle carries the reserved id 0.
    ///
    /// # Panics
    ///
    /// Panics if the id was never allocated by this pool.
    pub fn recycle(&mut self, entity: Entity) -> Result<()> {
        if entity.is_sentinel() {
            return Err(Error::recycle_sentinel());
        }

        let slot = &mut self.slots[entity.id as usize];
        slot.generation = slot.generation.wrapping_add(1);
        slot.next_free = self.next;
        self.next = entity.id;
        self.available += 1;
        Ok(())
    }

    /// Returns true if the handle is current: its generation matches the
    /// stored generation for its id.
    ///
    /// The sentinel and ids this pool never allocated are never alive.
    #[must_use]
    pub fn alive(&self, entity: Entity) -> bool {
        !entity.is_sentinel()
            && self
                .slots
                .get(entity.id as usize)
                .is_some_and(|slot| slot.generation == entity.generation)
    }

    /// Returns true if the id is currently parked in the free list.
    #[must_use]
    pub fn is_recycle_wait(&self, id: u32) -> bool {
        self.slots
            .get(id as usize)
            .is_some_and(|slot| slot.next_free != id)
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn used(&self) -> usize {
        self.total() - self.available()
    }

    /// Returns the number of slots ever allocated, sentinel excluded.
    #[must_use]
    pub fn total(&self) -> usize {
        self.slots.len() - 1
    }

    /// Returns the number of recycled ids awaiting reuse.
    #[must_use]
    pub fn available(&self) -> usize {
        self.available as usize
    }

    /// Returns the slot capacity reserved so far, sentinel excluded.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity().saturating_sub(1)
    }

    /// Returns the stored generation for an id, if allocated.
    ///
    /// This is useful for debugging and testing.
    #[must_use]
    pub fn generation(&self, id: u32) -> Option<u32> {
        self.slots.get(id as usize).map(|slot| slot.generation)
    }

    /// Overwrites the stored generation for an id. Test hook for exercising
    /// generation wraparound without four billion recycles.
    #[cfg(test)]
    fn set_generation(&mut self, id: u32, generation: u32) {
        self.slots[id as usize].generation = generation;
    }
}
