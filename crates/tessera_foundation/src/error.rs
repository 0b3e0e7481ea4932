//! Error types for the Tessera system.
//!
//! Uses `thiserror` for ergonomic error definition. There is exactly one
//! error taxonomy: caller misuse of a pure in-memory structure. Errors are
//! raised at the point of detection, before any partial mutation, and are
//! never retryable.

use thiserror::Error;

use crate::component::ComponentId;
use crate::entity::Entity;

/// Convenience alias for results carrying a Tessera [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Tessera operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a dead-entity error.
    #[must_use]
    pub fn dead_entity(entity: Entity) -> Self {
        Self::new(ErrorKind::DeadEntity(entity))
    }

    /// Creates a sentinel-recycle error.
    #[must_use]
    pub fn recycle_sentinel() -> Self {
        Self::new(ErrorKind::RecycleSentinel)
    }

    /// Creates a duplicate-component error.
    #[must_use]
    pub fn duplicate_component(component: ComponentId) -> Self {
        Self::new(ErrorKind::DuplicateComponent(component))
    }

    /// Creates an unknown-component error.
    #[must_use]
    pub fn unknown_component(component: ComponentId) -> Self {
        Self::new(ErrorKind::UnknownComponent(component))
    }

    /// Creates a missing-component error.
    #[must_use]
    pub fn missing_component(entity: Entity, component: ComponentId) -> Self {
        Self::new(ErrorKind::MissingComponent { entity, component })
    }

    /// Creates a registry-full error.
    #[must_use]
    pub fn registry_full(capacity: usize) -> Self {
        Self::new(ErrorKind::RegistryFull { capacity })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Operation on a dead or stale entity handle.
    #[error("can't operate on a dead entity: {0:?}")]
    DeadEntity(Entity),

    /// Attempt to recycle the reserved sentinel entity.
    #[error("can't recycle the reserved sentinel entity")]
    RecycleSentinel,

    /// The same component id appeared more than once in one request.
    #[error("duplicate component in request: {0:?}")]
    DuplicateComponent(ComponentId),

    /// A component id the registry never issued.
    #[error("unknown component id: {0:?}")]
    UnknownComponent(ComponentId),

    /// The entity does not have the named component.
    #[error("component {component:?} not present on {entity:?}")]
    MissingComponent {
        /// The entity that was operated on.
        entity: Entity,
        /// The component that was expected on it.
        component: ComponentId,
    },

    /// Component registration would exceed the registry's fixed capacity.
    #[error("component registry full: capacity {capacity}")]
    RegistryFull {
        /// The configured registry ceiling.
        capacity: usize,
    },
}
