use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::enums::AssignmentStatus;

/// A guard booked onto a duty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardAssignment {
    pub id: EntityId,
    pub guard_id: EntityId,
    pub duty_id: EntityId,
    pub status: AssignmentStatus,
    #[serde(default)]
    pub assigned_at: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub guard_name: Option<String>,
    #[serde(default)]
    pub duty_title: Option<String>,
}
