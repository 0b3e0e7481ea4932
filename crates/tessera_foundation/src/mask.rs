//! Fixed-width component-set masks.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::component::ComponentId;

/// 256-bit set of component ids, used as an archetype's layout key.
///
/// Equality and hashing are defined by composition alone: two masks compare
/// equal iff exactly the same bits are set. Bit position = component id
/// index, which is why the registry caps registrations at [`Mask256::WIDTH`].
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mask256 {
    bits: [u64; 4],
}

impl Mask256 {
    /// Number of distinct component ids a mask can hold.
    pub const WIDTH: usize = 256;

    /// Creates an empty mask.
    #[must_use]
    pub const fn new() -> Self {
        Self { bits: [0; 4] }
    }

    /// Creates a mask with the bit for each given id set.
    ///
    /// Duplicates are harmless here; the resulting mask is the set union.
    ///
    /// # Panics
    ///
    /// Panics if any id index is `WIDTH` or greater.
    #[must_use]
    pub fn from_ids(ids: &[ComponentId]) -> Self {
        let mut mask = Self::new();
        for id in ids {
            mask.set(*id);
        }
        mask
    }

    /// Sets the bit for a component id.
    ///
    /// # Panics
    ///
    /// Panics if the id index is `WIDTH` or greater.
    pub fn set(&mut self, id: ComponentId) {
        let index = id.index();
        assert!(index < Self::WIDTH, "component id {index} out of mask range");
        self.bits[index / 64] |= 1 << (index % 64);
    }

    /// Clears the bit for a component id.
    ///
    /// # Panics
    ///
    /// Panics if the id index is `WIDTH` or greater.
    pub fn clear(&mut self, id: ComponentId) {
        let index = id.index();
        assert!(index < Self::WIDTH, "component id {index} out of mask range");
        self.bits[index / 64] &= !(1 << (index % 64));
    }

    /// Returns true if the bit for a component id is set.
    #[must_use]
    pub fn contains(&self, id: ComponentId) -> bool {
        let index = id.index();
        if index >= Self::WIDTH {
            return false;
        }
        self.bits[index / 64] & (1 << (index % 64)) != 0
    }

    /// Returns true if every bit set in `other` is also set here.
    #[must_use]
    pub fn contains_all(&self, other: &Self) -> bool {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .all(|(mine, theirs)| mine & theirs == *theirs)
    }

    /// Returns the number of bits set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|word| *word == 0)
    }

    /// Iterates the component ids whose bits are set, in ascending order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn ids(&self) -> impl Iterator<Item = ComponentId> + '_ {
        (0..Self::WIDTH)
            .filter(|index| self.bits[index / 64] & (1 << (index % 64)) != 0)
            .map(|index| ComponentId::new(index as u32))
    }
}

impl fmt::Debug for Mask256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mask256{{")?;
        for (i, id) in self.ids().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id.index())?;
        }
        write!(f, "}}")
    }
}
