//! Entity-component storage for Tessera.
//!
//! This crate provides:
//! - [`EntityPool`] - Generational entity allocation with LIFO recycling
//! - [`ComponentRegistry`] - Dense component-type registration with a fixed ceiling
//! - [`Archetype`] / [`ArchetypeDirectory`] - Dense per-layout entity storage
//! - [`World`] - Orchestration: create/destroy/migrate entities, lifecycle callbacks
//! - [`WorldConfig`] / [`WorldStats`] - Capacity configuration and read-only counters

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod archetype;
mod config;
mod pool;
mod registry;
mod stats;
mod world;

pub use archetype::{Archetype, ArchetypeDirectory, ArchetypeId};
pub use config::WorldConfig;
pub use pool::EntityPool;
pub use registry::{ComponentRegistry, Tag};
pub use stats::{EntityStats, WorldStats};
pub use world::{EntityLocation, World};
