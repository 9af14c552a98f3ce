use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Free-text note kept against a guard's file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: EntityId,
    #[serde(default)]
    pub guard_id: Option<EntityId>,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
