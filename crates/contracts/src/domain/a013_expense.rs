use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::enums::ExpenseStatus;

/// Operational expense, optionally with a scanned receipt (multipart upload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: EntityId,
    pub expense_category_id: EntityId,
    #[serde(default)]
    pub guard_id: Option<EntityId>,
    #[serde(default)]
    pub site_id: Option<EntityId>,
    pub amount: f64,
    pub spent_on: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub receipt_url: Option<String>,
    pub status: ExpenseStatus,
    #[serde(default)]
    pub category_name: Option<String>,
}
