use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Lookup: category of guard (armed, unarmed, supervisor...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardType {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
