use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::enums::{IncidentSeverity, IncidentStatus};

/// Security incident reported at a site; attachments go up as multipart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: EntityId,
    pub site_id: EntityId,
    #[serde(default)]
    pub guard_id: Option<EntityId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub severity: IncidentSeverity,
    pub status: IncidentStatus,
    pub occurred_at: DateTime<Utc>,
    #[serde(default)]
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentDto {
    pub site_id: EntityId,
    pub guard_id: Option<EntityId>,
    pub title: String,
    pub description: Option<String>,
    pub severity: IncidentSeverity,
    pub occurred_at: DateTime<Utc>,
}
