use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Periodic report filed by a guard while on duty; may carry a photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyStatusReport {
    pub id: EntityId,
    pub duty_id: EntityId,
    pub guard_id: EntityId,
    pub report: String,
    pub reported_at: DateTime<Utc>,
    #[serde(default)]
    pub image_url: Option<String>,
}
