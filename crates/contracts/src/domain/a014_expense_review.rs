use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::enums::ExpenseStatus;

/// Reviewer decision recorded against an expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseReview {
    pub id: EntityId,
    pub expense_id: EntityId,
    #[serde(default)]
    pub reviewer_id: Option<EntityId>,
    pub decision: ExpenseStatus,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseReviewDto {
    pub expense_id: EntityId,
    pub decision: ExpenseStatus,
    pub comment: Option<String>,
}
