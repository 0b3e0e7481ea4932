//! World orchestration: entity lifecycle, archetype membership, callbacks.
//!
//! The `World` exclusively owns the entity pool, the component registry,
//! the archetype directory, and the per-entity location index. Every
//! structural change flows through it, which is what keeps the swap-remove
//! back-reference fix-up — the easiest invariant to drop — in exactly one
//! place.

use std::fmt;
use std::rc::Rc;

use tessera_foundation::{ComponentId, ComponentInfo, Entity, Error, Mask256, Result};

use crate::archetype::{Archetype, ArchetypeDirectory, ArchetypeId};
use crate::config::WorldConfig;
use crate::pool::EntityPool;
use crate::registry::ComponentRegistry;
use crate::stats::{EntityStats, WorldStats};

/// Lifecycle callback invoked with the world and the affected entity.
type EntityCallback = Rc<dyn Fn(&mut World, Entity)>;

/// An entity's current position: which archetype, and which dense row.
///
/// Owned and rewritten exclusively by the world on every structural change.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EntityLocation {
    /// The archetype holding the entity.
    pub archetype: ArchetypeId,
    /// The entity's row in that archetype's dense array.
    pub row: u32,
}

/// Archetype-based entity-component world.
///
/// Single-threaded by design: every operation is a synchronous in-memory
/// mutation assuming exclusive access, and lifecycle callbacks run inline
/// (they may themselves create and destroy entities).
pub struct World {
    pool: EntityPool,
    registry: ComponentRegistry,
    directory: ArchetypeDirectory,
    /// Location per entity id; `None` for the sentinel and dead ids.
    locations: Vec<Option<EntityLocation>>,
    on_create: Vec<EntityCallback>,
    on_remove: Vec<EntityCallback>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates a world with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&WorldConfig::default())
    }

    /// Creates a world with explicit capacity options.
    #[must_use]
    pub fn with_config(config: &WorldConfig) -> Self {
        Self {
            pool: EntityPool::new(config.entity_pool_capacity),
            registry: ComponentRegistry::new(config.max_components),
            directory: ArchetypeDirectory::new(config.archetype_capacity),
            locations: Vec::with_capacity(config.entity_pool_capacity),
            on_create: Vec::with_capacity(config.on_create_capacity),
            on_remove: Vec::with_capacity(config.on_remove_capacity),
        }
    }

    // --- Component registration ---

    /// Registers a component descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::RegistryFull`](tessera_foundation::ErrorKind::RegistryFull)
    /// if a new registration would exceed the registry ceiling.
    pub fn register(&mut self, info: ComponentInfo) -> Result<ComponentId> {
        self.registry.register(info)
    }

    /// Registers a Rust type as a component, named after the type.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::RegistryFull`](tessera_foundation::ErrorKind::RegistryFull)
    /// if a new registration would exceed the registry ceiling.
    pub fn register_component<T: 'static>(&mut self) -> Result<ComponentId> {
        self.registry.register_component::<T>()
    }

    /// Registers a named tag component.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::RegistryFull`](tessera_foundation::ErrorKind::RegistryFull)
    /// if a new registration would exceed the registry ceiling.
    pub fn register_tag(&mut self, name: impl Into<String>) -> Result<ComponentId> {
        self.registry.register_tag(name)
    }

    /// Returns the descriptor behind a component id, for diagnostics.
    #[must_use]
    pub fn component_info(&self, id: ComponentId) -> Option<&ComponentInfo> {
        self.registry.info(id)
    }

    /// Returns the number of registered component types.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.registry.len()
    }

    // --- Entity lifecycle ---

    /// Creates an entity with the given component set.
    ///
    /// The empty set is valid: the entity lands in the pre-created
    /// empty-layout archetype. On-create callbacks fire in registration
    /// order after the entity is fully placed; the callback list is
    /// snapshotted at call start, so callbacks registered during the pass
    /// fire only on later creations.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateComponent`](tessera_foundation::ErrorKind::DuplicateComponent)
    /// if a component id appears twice in the request, or
    /// [`ErrorKind::UnknownComponent`](tessera_foundation::ErrorKind::UnknownComponent)
    /// if an id was never registered. Both are checked before any mutation.
    pub fn create_entity(&mut self, components: &[ComponentId]) -> Result<Entity> {
        let layout = self.checked_layout(components)?;
        let mask = Mask256::from_ids(&layout);

        let archetype = self.directory.resolve(mask, &layout);
        let entity = self.pool.get();
        let row = self.directory.get_mut(archetype).add(entity);
        self.set_location(entity.id, EntityLocation { archetype, row });

        let callbacks = self.on_create.clone();
        for callback in callbacks {
            callback.as_ref()(self, entity);
        }
        Ok(entity)
    }

    /// Destroys a live entity.
    ///
    /// On-remove callbacks fire first, in registration order, while the
    /// entity is still observable; then the entity leaves its archetype by
    /// swap-remove (re-indexing whichever entity got moved into its row)
    /// and its id is recycled. The handle is permanently dead afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DeadEntity`](tessera_foundation::ErrorKind::DeadEntity)
    /// if the handle is stale; nothing is mutated in that case.
    pub fn remove_entity(&mut self, entity: Entity) -> Result<()> {
        if !self.pool.alive(entity) {
            return Err(Error::dead_entity(entity));
        }

        let callbacks = self.on_remove.clone();
        for callback in callbacks {
            callback.as_ref()(self, entity);
        }
        // A callback may have destroyed this entity itself; the teardown
        // below already happened in the nested call.
        if !self.pool.alive(entity) {
            return Ok(());
        }

        let Some(location) = self.take_location(entity.id) else {
            return Err(Error::dead_entity(entity));
        };

        let swapped = self.directory.get_mut(location.archetype).remove(location.row);
        self.pool.recycle(entity)?;
        if swapped {
            self.fix_up_swapped(location);
        }
        Ok(())
    }

    /// Adds components to a live entity, migrating it to the matching
    /// archetype.
    ///
    /// No lifecycle callbacks fire on migration.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DeadEntity`](tessera_foundation::ErrorKind::DeadEntity)
    /// for a stale handle,
    /// [`ErrorKind::UnknownComponent`](tessera_foundation::ErrorKind::UnknownComponent)
    /// for an unregistered id, or
    /// [`ErrorKind::DuplicateComponent`](tessera_foundation::ErrorKind::DuplicateComponent)
    /// if an id appears twice in the request or is already on the entity.
    /// All checks precede any mutation.
    pub fn add_components(&mut self, entity: Entity, components: &[ComponentId]) -> Result<()> {
        if !self.pool.alive(entity) {
            return Err(Error::dead_entity(entity));
        }
        let added = self.checked_layout(components)?;

        let Some(location) = self.location(entity.id) else {
            return Err(Error::dead_entity(entity));
        };
        let current = self.directory.get(location.archetype);
        let mut mask = *current.mask();
        for id in &added {
            if mask.contains(*id) {
                return Err(Error::duplicate_component(*id));
            }
            mask.set(*id);
        }

        let mut layout = current.layout().to_vec();
        layout.extend_from_slice(&added);
        layout.sort_unstable();

        self.migrate(entity, location, mask, &layout);
        Ok(())
    }

    /// Removes components from a live entity, migrating it to the matching
    /// archetype.
    ///
    /// No lifecycle callbacks fire on migration.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DeadEntity`](tessera_foundation::ErrorKind::DeadEntity)
    /// for a stale handle,
    /// [`ErrorKind::UnknownComponent`](tessera_foundation::ErrorKind::UnknownComponent)
    /// for an unregistered id,
    /// [`ErrorKind::DuplicateComponent`](tessera_foundation::ErrorKind::DuplicateComponent)
    /// if an id appears twice in the request, or
    /// [`ErrorKind::MissingComponent`](tessera_foundation::ErrorKind::MissingComponent)
    /// if the entity does not have a requested component.
    /// All checks precede any mutation.
    pub fn remove_components(&mut self, entity: Entity, components: &[ComponentId]) -> Result<()> {
        if !self.pool.alive(entity) {
            return Err(Error::dead_entity(entity));
        }
        let removed = self.checked_layout(components)?;

        let Some(location) = self.location(entity.id) else {
            return Err(Error::dead_entity(entity));
        };
        let current = self.directory.get(location.archetype);
        let mut mask = *current.mask();
        for id in &removed {
            if !mask.contains(*id) {
                return Err(Error::missing_component(entity, *id));
            }
            mask.clear(*id);
        }

        let layout: Vec<ComponentId> = current
            .layout()
            .iter()
            .copied()
            .filter(|id| !removed.contains(id))
            .collect();

        self.migrate(entity, location, mask, &layout);
        Ok(())
    }

    // --- Callbacks ---

    /// Appends an on-create callback.
    ///
    /// Callbacks run synchronously on every entity creation, in
    /// registration order, after the entity is placed in its archetype.
    pub fn push_on_create(&mut self, callback: impl Fn(&mut World, Entity) + 'static) {
        self.on_create.push(Rc::new(callback));
    }

    /// Appends an on-remove callback.
    ///
    /// Callbacks run synchronously on every entity destruction, in
    /// registration order, before the entity leaves its archetype.
    pub fn push_on_remove(&mut self, callback: impl Fn(&mut World, Entity) + 'static) {
        self.on_remove.push(Rc::new(callback));
    }

    // --- Queries ---

    /// Returns true if the handle refers to a live entity.
    #[must_use]
    pub fn alive(&self, entity: Entity) -> bool {
        self.pool.alive(entity)
    }

    /// Returns a live entity's current archetype and row.
    #[must_use]
    pub fn locate(&self, entity: Entity) -> Option<EntityLocation> {
        if !self.pool.alive(entity) {
            return None;
        }
        self.location(entity.id)
    }

    /// Returns the archetype behind an id issued by this world.
    ///
    /// # Panics
    ///
    /// Panics if the id was not issued by this world.
    #[must_use]
    pub fn archetype(&self, id: ArchetypeId) -> &Archetype {
        self.directory.get(id)
    }

    /// Looks up an archetype by layout mask without creating it.
    #[must_use]
    pub fn archetype_by_mask(&self, mask: &Mask256) -> Option<ArchetypeId> {
        self.directory.lookup(mask)
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.pool.used()
    }

    /// Returns the number of archetypes, the empty one included.
    #[must_use]
    pub fn archetype_count(&self) -> usize {
        self.directory.len()
    }

    /// Reads the world's counters.
    #[must_use]
    pub fn stats(&self) -> WorldStats {
        WorldStats {
            entities: EntityStats {
                used: self.pool.used(),
                total: self.pool.total(),
                recycled: self.pool.available(),
                capacity: self.pool.capacity(),
            },
        }
    }

    // --- Private helpers ---

    /// Validates a component request: no duplicates, every id registered.
    /// Returns the ids sorted ascending. Checks everything before the
    /// caller mutates anything.
    fn checked_layout(&self, components: &[ComponentId]) -> Result<Vec<ComponentId>> {
        let mut layout = components.to_vec();
        layout.sort_unstable();
        for pair in layout.windows(2) {
            if pair[0] == pair[1] {
                return Err(Error::duplicate_component(pair[0]));
            }
        }
        for id in &layout {
            if !self.registry.contains(*id) {
                return Err(Error::unknown_component(*id));
            }
        }
        Ok(layout)
    }

    /// Moves a live entity into the archetype for `mask`, leaving its old
    /// row by swap-remove and re-indexing the entity swapped into it.
    fn migrate(
        &mut self,
        entity: Entity,
        location: EntityLocation,
        mask: Mask256,
        layout: &[ComponentId],
    ) {
        let swapped = self.directory.get_mut(location.archetype).remove(location.row);
        if swapped {
            self.fix_up_swapped(location);
        }

        let target = self.directory.resolve(mask, layout);
        let row = self.directory.get_mut(target).add(entity);
        self.set_location(entity.id, EntityLocation { archetype: target, row });
    }

    /// Rewrites the location of the entity that swap-remove moved into the
    /// vacated row. Must run on the post-swap state; skipping it corrupts
    /// that entity on its next structural change.
    fn fix_up_swapped(&mut self, vacated: EntityLocation) {
        let moved = self.directory.get(vacated.archetype).entity(vacated.row);
        self.set_location(moved.id, vacated);
    }

    fn location(&self, id: u32) -> Option<EntityLocation> {
        self.locations.get(id as usize).copied().flatten()
    }

    fn take_location(&mut self, id: u32) -> Option<EntityLocation> {
        self.locations.get_mut(id as usize).and_then(Option::take)
    }

    fn set_location(&mut self, id: u32, location: EntityLocation) {
        let index = id as usize;
        if index >= self.locations.len() {
            self.locations.resize(index + 1, None);
        }
        self.locations[index] = Some(location);
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("entities", &self.pool.used())
            .field("archetypes", &self.directory.len())
            .field("components", &self.registry.len())
            .field("on_create", &self.on_create.len())
            .field("on_remove", &self.on_remove.len())
            .finish()
    }
}
