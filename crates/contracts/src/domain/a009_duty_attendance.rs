use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::enums::AttendanceStatus;

/// Check-in / check-out record of a guard on a duty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyAttendance {
    pub id: EntityId,
    pub duty_id: EntityId,
    pub guard_id: EntityId,
    #[serde(default)]
    pub check_in_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out_at: Option<DateTime<Utc>>,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub guard_name: Option<String>,
}
