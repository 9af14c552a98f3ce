use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Server-assigned numeric identifier shared by every entity
pub type EntityId = i64;

/// Trait for records managed through the admin entity stores
///
/// Implementors are plain data mirrored from the REST backend; the only
/// thing the stores need to know about them is their identifier.
pub trait Entity:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Get the record id
    fn id(&self) -> EntityId;
}

/// Implement [`Entity`] for structs with a public `id: EntityId` field
#[macro_export]
macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::domain::common::Entity for $ty {
                fn id(&self) -> $crate::domain::common::EntityId {
                    self.id
                }
            }
        )+
    };
}
