use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::enums::ComplaintStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: EntityId,
    pub complainant_id: EntityId,
    #[serde(default)]
    pub site_id: Option<EntityId>,
    #[serde(default)]
    pub guard_id: Option<EntityId>,
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ComplaintStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}
