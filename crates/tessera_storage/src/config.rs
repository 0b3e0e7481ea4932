//! World construction options.

use tessera_foundation::Mask256;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity options applied at world construction.
///
/// Every field is a pre-allocation hint except `max_components`, which is
/// the hard component-registry ceiling (clamped to [`Mask256::WIDTH`], the
/// layout-mask width).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldConfig {
    /// Initial entity-pool capacity.
    pub entity_pool_capacity: usize,
    /// Initial archetype-table capacity.
    pub archetype_capacity: usize,
    /// Hard ceiling on registrable component types.
    pub max_components: usize,
    /// Initial capacity of the on-create callback list.
    pub on_create_capacity: usize,
    /// Initial capacity of the on-remove callback list.
    pub on_remove_capacity: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            entity_pool_capacity: 1024,
            archetype_capacity: 16,
            max_components: Mask256::WIDTH,
            on_create_capacity: 256,
            on_remove_capacity: 256,
        }
    }
}

impl WorldConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entity-pool capacity hint.
    #[must_use]
    pub fn with_entity_pool_capacity(mut self, capacity: usize) -> Self {
        self.entity_pool_capacity = capacity;
        self
    }

    /// Sets the archetype-table capacity hint.
    #[must_use]
    pub fn with_archetype_capacity(mut self, capacity: usize) -> Self {
        self.archetype_capacity = capacity;
        self
    }

    /// Sets the component-registry ceiling.
    ///
    /// Values above [`Mask256::WIDTH`] are clamped at registry construction.
    #[must_use]
    pub fn with_max_components(mut self, max: usize) -> Self {
        self.max_components = max;
        self
    }

    /// Sets the on-create callback list capacity hint.
    #[must_use]
    pub fn with_on_create_capacity(mut self, capacity: usize) -> Self {
        self.on_create_capacity = capacity;
        self
    }

    /// Sets the on-remove callback list capacity hint.
    #[must_use]
    pub fn with_on_remove_capacity(mut self, capacity: usize) -> Self {
        self.on_remove_capacity = capacity;
        self
    }
}
