//! Component type identifiers and descriptors.

use std::any::{TypeId, type_name};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense identifier for a registered component type.
///
/// Ids are assigned sequentially by the component registry, starting at 0,
/// and double as bit positions in a [`Mask256`](crate::Mask256) layout key.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentId(u32);

impl ComponentId {
    /// Creates a component id from a raw index.
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

impl fmt::Debug for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentId({})", self.0)
    }
}

/// Descriptor for a component type: a name plus the origin-type handle.
///
/// Two descriptors are the same component iff both the name and the origin
/// type match; the registry dedups on this structural identity.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct ComponentInfo {
    name: String,
    type_id: TypeId,
}

impl ComponentInfo {
    /// Creates a descriptor for a Rust type, named after the type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self {
            name: type_name::<T>().to_string(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Creates a descriptor for a Rust type with an explicit name.
    ///
    /// Distinct names over the same origin type are distinct components;
    /// this is what makes tag components possible.
    #[must_use]
    pub fn named<T: 'static>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Returns the component's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the origin-type handle this component was built from.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }
}

impl fmt::Debug for ComponentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentInfo({})", self.name)
    }
}
