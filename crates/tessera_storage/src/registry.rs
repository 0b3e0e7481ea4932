//! Component-type registration with dense ids and a fixed ceiling.
//!
//! The registry hands out sequential [`ComponentId`]s, dedups on structural
//! descriptor identity (name + origin type), and refuses registrations past
//! its configured capacity. Ids double as layout-mask bit positions, so the
//! ceiling can never exceed [`Mask256::WIDTH`]. The registry is append-only:
//! an id, once issued, stays valid for the process's lifetime.

// Allow usize/u32 casts - registration count is capped at the mask width
#![allow(clippy::cast_possible_truncation)]

use std::collections::HashMap;

use tessera_foundation::{ComponentId, ComponentInfo, Error, Mask256, Result};

/// Origin type shared by all tag components.
///
/// Tags are zero-sized marker components distinguished by name alone, used
/// for grouping entities without attaching data.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Tag;

/// Allocates and dedups component ids.
#[derive(Clone, Debug)]
pub struct ComponentRegistry {
    infos: Vec<ComponentInfo>,
    index: HashMap<ComponentInfo, ComponentId>,
    capacity: usize,
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new(Mask256::WIDTH)
    }
}

impl ComponentRegistry {
    /// Creates a registry holding at most `max_components` registrations.
    ///
    /// Values above [`Mask256::WIDTH`] are clamped to it; ids are mask bit
    /// positions and cannot address bits past the mask width.
    #[must_use]
    pub fn new(max_components: usize) -> Self {
        let capacity = max_components.min(Mask256::WIDTH);
        Self {
            infos: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    /// Registers a component descriptor, returning its dense id.
    ///
    /// A descriptor that was seen before (same name and origin type) maps to
    /// its existing id; otherwise the next sequential id is issued.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::RegistryFull`](tessera_foundation::ErrorKind::RegistryFull)
    /// if a new registration would exceed the configured ceiling.
    pub fn register(&mut self, info: ComponentInfo) -> Result<ComponentId> {
        if let Some(id) = self.index.get(&info) {
            return Ok(*id);
        }
        if self.infos.len() >= self.capacity {
            return Err(Error::registry_full(self.capacity));
        }

        let id = ComponentId::new(self.infos.len() as u32);
        self.index.insert(info.clone(), id);
        self.infos.push(info);
        Ok(id)
    }

    /// Registers a Rust type as a component, named after the type.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::RegistryFull`](tessera_foundation::ErrorKind::RegistryFull)
    /// if a new registration would exceed the configured ceiling.
    pub fn register_component<T: 'static>(&mut self) -> Result<ComponentId> {
        self.register(ComponentInfo::of::<T>())
    }

    /// Registers a named tag component.
    ///
    /// All tags share the [`Tag`] origin type; the name alone distinguishes
    /// them, so registering the same name twice returns the same id.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::RegistryFull`](tessera_foundation::ErrorKind::RegistryFull)
    /// if a new registration would exceed the configured ceiling.
    pub fn register_tag(&mut self, name: impl Into<String>) -> Result<ComponentId> {
        self.register(ComponentInfo::named::<Tag>(name))
    }

    /// Returns the descriptor behind an id, for diagnostics.
    #[must_use]
    pub fn info(&self, id: ComponentId) -> Option<&ComponentInfo> {
        self.infos.get(id.index())
    }

    /// Returns true if the registry issued this id.
    #[must_use]
    pub fn contains(&self, id: ComponentId) -> bool {
        id.index() < self.infos.len()
    }

    /// Returns the number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.infos.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    /// Returns the hard registration ceiling.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
