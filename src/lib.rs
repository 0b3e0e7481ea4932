//! Tessera - Archetype-based entity-component storage
//!
//! This crate re-exports both layers of the Tessera system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: tessera_storage    — Entity pool, component registry, archetypes, world
//! Layer 0: tessera_foundation — Core types (Entity, ComponentId, Mask256, Error)
//! ```

pub use tessera_foundation as foundation;
pub use tessera_storage as storage;
