//! Core types for the Tessera storage engine.
//!
//! This crate provides:
//! - [`Entity`] - Generational entity handles
//! - [`ComponentId`] / [`ComponentInfo`] - Dense component type identifiers
//! - [`Mask256`] - 256-bit component-set masks used as archetype layout keys
//! - [`Error`] - Structured errors for caller misuse

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod component;
mod entity;
mod error;
mod mask;

pub use component::{ComponentId, ComponentInfo};
pub use entity::Entity;
pub use error::{Error, ErrorKind, Result};
pub use mask::Mask256;
