use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::enums::LeaveStatus;

/// Leave request submitted by a guard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leave {
    pub id: EntityId,
    pub guard_id: EntityId,
    pub leave_type: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: LeaveStatus,
    #[serde(default)]
    pub guard_name: Option<String>,
}

impl Leave {
    /// Inclusive number of days covered by the request
    pub fn days(&self) -> i64 {
        (self.to_date - self.from_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_are_inclusive() {
        let leave = Leave {
            id: 1,
            guard_id: 2,
            leave_type: "annual".to_string(),
            from_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            reason: None,
            status: LeaveStatus::Pending,
            guard_name: None,
        };
        assert_eq!(leave.days(), 3);
    }
}
