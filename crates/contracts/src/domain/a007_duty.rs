use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::enums::DutyStatus;

/// Shift to be covered at a site on a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duty {
    pub id: EntityId,
    pub site_id: EntityId,
    #[serde(default)]
    pub duty_time_type_id: Option<EntityId>,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub required_guards: u32,
    pub status: DutyStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
}
