//! Common types and traits for all entities

pub mod contactable;
pub mod entity;

// Re-exports
pub use contactable::{Contactable, ContactableKind, ContactableRef};
pub use entity::{Entity, EntityId};
