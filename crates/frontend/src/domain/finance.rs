use contracts::domain::{Expense, ExpenseCategory, ExpenseReview};
use contracts::enums::ExpenseStatus;
use serde_json::json;

use super::status_button;
use crate::shared::date_utils::{format_date, format_timestamp};
use crate::shared::entity_page::{or_dash, Column, StatusButton, TableColumns};

fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

impl TableColumns for ExpenseCategory {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::sortable("name", "Name"),
            Column::plain("description", "Description"),
            Column::sortable("is_active", "Status"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "description" => or_dash(&self.description),
            "is_active" => if self.is_active { "Active" } else { "Inactive" }.to_string(),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn template() -> serde_json::Value {
        json!({ "name": "", "description": null, "is_active": true })
    }

    fn status_buttons(&self) -> Vec<StatusButton> {
        vec![StatusButton::toggle("is_active", self.is_active)]
    }
}

impl TableColumns for Expense {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::plain("category", "Category"),
            Column::sortable("amount", "Amount"),
            Column::sortable("spent_on", "Date"),
            Column::plain("description", "Description"),
            Column::plain("receipt", "Receipt"),
            Column::sortable("status", "Status"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "category" => self
                .category_name
                .clone()
                .unwrap_or_else(|| format!("#{}", self.expense_category_id)),
            "amount" => format_amount(self.amount),
            "spent_on" => format_date(&self.spent_on),
            "description" => or_dash(&self.description),
            "receipt" => if self.receipt_url.is_some() { "Attached" } else { "-" }.to_string(),
            "status" => self.status.display_name().to_string(),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        format!("{} on {}", format_amount(self.amount), format_date(&self.spent_on))
    }

    fn template() -> serde_json::Value {
        json!({
            "expense_category_id": null,
            "guard_id": null,
            "site_id": null,
            "amount": 0,
            "spent_on": "",
            "description": null,
        })
    }

    fn status_buttons(&self) -> Vec<StatusButton> {
        match self.status {
            ExpenseStatus::Pending => vec![
                status_button("Approve", ExpenseStatus::Approved.code()),
                status_button("Reject", ExpenseStatus::Rejected.code()),
            ],
            ExpenseStatus::Approved | ExpenseStatus::Rejected => Vec::new(),
        }
    }
}

impl TableColumns for ExpenseReview {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::plain("expense_id", "Expense"),
            Column::sortable("decision", "Decision"),
            Column::plain("comment", "Comment"),
            Column::sortable("reviewed_at", "Reviewed"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "expense_id" => format!("#{}", self.expense_id),
            "decision" => self.decision.display_name().to_string(),
            "comment" => or_dash(&self.comment),
            "reviewed_at" => self
                .reviewed_at
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        format!("Review of expense #{}", self.expense_id)
    }

    fn template() -> serde_json::Value {
        json!({ "expense_id": null, "decision": "approved", "comment": null })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(status: ExpenseStatus) -> Expense {
        Expense {
            id: 5,
            expense_category_id: 2,
            guard_id: None,
            site_id: None,
            amount: 1250.5,
            spent_on: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            description: None,
            receipt_url: None,
            status,
            category_name: Some("Fuel".to_string()),
        }
    }

    #[test]
    fn test_expense_cells() {
        let item = expense(ExpenseStatus::Pending);
        assert_eq!(item.cell("amount"), "1250.50");
        assert_eq!(item.cell("category"), "Fuel");
        assert_eq!(item.cell("receipt"), "-");
        assert_eq!(item.title(), "1250.50 on 29.02.2024");
    }

    #[test]
    fn test_only_pending_expenses_can_be_reviewed() {
        assert_eq!(expense(ExpenseStatus::Pending).status_buttons().len(), 2);
        assert!(expense(ExpenseStatus::Approved).status_buttons().is_empty());
    }
}
