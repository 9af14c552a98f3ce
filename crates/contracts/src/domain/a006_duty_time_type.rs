use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Lookup: named shift window such as "Morning 08:00-16:00"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyTimeType {
    pub id: EntityId,
    pub name: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`, may be earlier than `start_time` for overnight shifts
    pub end_time: String,
}
