//! Sorting helpers for server-side sorted lists
use contracts::shared::pagination::SortOrder;

/// Column the list is sorted by, if any
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<String>,
    pub order: SortOrder,
}

impl SortState {
    /// Header click: same column flips the order, a new column starts ascending
    pub fn toggled(&self, field: &str) -> Self {
        if self.field.as_deref() == Some(field) {
            Self {
                field: self.field.clone(),
                order: self.order.toggled(),
            }
        } else {
            Self {
                field: Some(field.to_string()),
                order: SortOrder::Asc,
            }
        }
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        match (&self.field, self.order) {
            (Some(current), SortOrder::Asc) if current == field => " ▲",
            (Some(current), SortOrder::Desc) if current == field => " ▼",
            _ => " ⇅",
        }
    }
}
