//! Archetypes: dense entity storage grouped by component set.
//!
//! An archetype holds every live entity with one exact component layout in a
//! single dense array, so iteration over structurally identical entities is
//! a linear scan. Removal is swap-remove: O(1), order-disturbing, and the
//! caller owns the follow-up of re-indexing whichever entity got moved into
//! the vacated row.

// Allow usize/u32 casts - rows and archetype counts stay well below u32::MAX
#![allow(clippy::cast_possible_truncation)]

use std::collections::HashMap;
use std::fmt;

use tessera_foundation::{ComponentId, Entity, Mask256};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense identifier for an archetype within one world.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArchetypeId(u32);

impl ArchetypeId {
    /// The pre-created empty-layout archetype every world starts with.
    pub const EMPTY: Self = Self(0);

    /// Creates an archetype id from a raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this id.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArchetypeId({})", self.0)
    }
}

/// A dense array of live entities sharing one exact component set.
///
/// Rows are ordered but not stable: swap-remove reuses the vacated row for
/// the formerly-last entity. Archetypes do not own entities, only their
/// positional bookkeeping.
#[derive(Clone, Debug)]
pub struct Archetype {
    id: ArchetypeId,
    mask: Mask256,
    layout: Vec<ComponentId>,
    entities: Vec<Entity>,
}

impl Archetype {
    fn new(id: ArchetypeId, mask: Mask256, layout: Vec<ComponentId>) -> Self {
        Self {
            id,
            mask,
            layout,
            entities: Vec::new(),
        }
    }

    /// Returns this archetype's id.
    #[must_use]
    pub fn id(&self) -> ArchetypeId {
        self.id
    }

    /// Returns the layout mask keying this archetype.
    #[must_use]
    pub fn mask(&self) -> &Mask256 {
        &self.mask
    }

    /// Returns the component ids defining this archetype, in ascending order.
    #[must_use]
    pub fn layout(&self) -> &[ComponentId] {
        &self.layout
    }

    /// Returns the entities currently stored, in row order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Appends an entity, returning its row (the prior length).
    pub fn add(&mut self, entity: Entity) -> u32 {
        let row = self.entities.len() as u32;
        self.entities.push(entity);
        row
    }

    /// Removes the entity at `row` by swap-remove.
    ///
    /// Returns true if another entity was swapped into `row`; the caller
    /// must then look up [`entity(row)`](Self::entity) and update that
    /// entity's recorded location. Returns false when `row` was the last
    /// row and the array simply shrank.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn remove(&mut self, row: u32) -> bool {
        let row = row as usize;
        let last = self.entities.len() - 1;
        self.entities.swap_remove(row);
        row != last
    }

    /// Returns the entity at a dense row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn entity(&self, row: u32) -> Entity {
        self.entities[row as usize]
    }

    /// Returns the number of entities stored.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if no entities are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Maps layout masks to archetypes, creating on miss.
///
/// Archetypes live in a stable table indexed by [`ArchetypeId`]; the
/// directory never removes or reorders them. The empty-layout archetype is
/// created up front so every entity, even one with zero components, belongs
/// to exactly one archetype.
#[derive(Clone, Debug)]
pub struct ArchetypeDirectory {
    archetypes: Vec<Archetype>,
    by_mask: HashMap<Mask256, ArchetypeId>,
}

impl Default for ArchetypeDirectory {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ArchetypeDirectory {
    /// Creates a directory with capacity reserved for `capacity` archetypes,
    /// containing the pre-created empty-layout archetype.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let mut directory = Self {
            archetypes: Vec::with_capacity(capacity.max(1)),
            by_mask: HashMap::with_capacity(capacity.max(1)),
        };
        let empty = directory.resolve(Mask256::new(), &[]);
        debug_assert_eq!(empty, ArchetypeId::EMPTY);
        directory
    }

    /// Returns the archetype for `mask`, creating it on miss.
    ///
    /// `layout` is the ascending component-id list the mask was built from;
    /// it is stored for diagnostics on first creation and ignored on hits.
    pub fn resolve(&mut self, mask: Mask256, layout: &[ComponentId]) -> ArchetypeId {
        if let Some(id) = self.by_mask.get(&mask) {
            return *id;
        }

        let id = ArchetypeId::new(self.archetypes.len() as u32);
        self.archetypes.push(Archetype::new(id, mask, layout.to_vec()));
        self.by_mask.insert(mask, id);
        id
    }

    /// Returns the archetype for an id issued by this directory.
    ///
    /// # Panics
    ///
    /// Panics if the id was not issued by this directory.
    #[must_use]
    pub fn get(&self, id: ArchetypeId) -> &Archetype {
        &self.archetypes[id.index()]
    }

    /// Returns the archetype for an id, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the id was not issued by this directory.
    pub fn get_mut(&mut self, id: ArchetypeId) -> &mut Archetype {
        &mut self.archetypes[id.index()]
    }

    /// Looks up an archetype by layout mask without creating it.
    #[must_use]
    pub fn lookup(&self, mask: &Mask256) -> Option<ArchetypeId> {
        self.by_mask.get(mask).copied()
    }

    /// Returns the number of archetypes, the empty one included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    /// Returns true if the directory holds no archetypes.
    ///
    /// Always false in practice: the empty-layout archetype exists from
    /// construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    /// Iterates all archetypes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.archetypes.iter()
    }
}
