use contracts::domain::{Guard, GuardAssignment, GuardType, Leave, Note};
use contracts::enums::LeaveStatus;
use serde_json::json;

use super::status_button;
use crate::shared::date_utils::{format_date, format_timestamp};
use crate::shared::entity_page::{or_dash, Column, StatusButton, TableColumns};

impl TableColumns for Guard {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::sortable("name", "Name"),
            Column::plain("phone", "Phone"),
            Column::plain("cnic", "CNIC"),
            Column::plain("guard_type", "Type"),
            Column::sortable("is_active", "Status"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "phone" => or_dash(&self.phone),
            "cnic" => or_dash(&self.cnic),
            "guard_type" => or_dash(&self.guard_type.as_ref().map(|t| t.name.clone())),
            "is_active" => if self.is_active { "Active" } else { "Inactive" }.to_string(),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn template() -> serde_json::Value {
        json!({
            "name": "",
            "email": null,
            "phone": null,
            "cnic": null,
            "address": null,
            "guard_type_id": null,
            "is_active": true,
        })
    }

    fn status_buttons(&self) -> Vec<StatusButton> {
        vec![StatusButton::toggle("is_active", self.is_active)]
    }
}

impl TableColumns for GuardType {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::sortable("name", "Name"),
            Column::plain("description", "Description"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "description" => or_dash(&self.description),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn template() -> serde_json::Value {
        json!({ "name": "", "description": null })
    }
}

impl TableColumns for Leave {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::plain("guard", "Guard"),
            Column::sortable("leave_type", "Type"),
            Column::sortable("from_date", "From"),
            Column::sortable("to_date", "To"),
            Column::plain("days", "Days"),
            Column::sortable("status", "Status"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "guard" => self
                .guard_name
                .clone()
                .unwrap_or_else(|| format!("#{}", self.guard_id)),
            "leave_type" => self.leave_type.clone(),
            "from_date" => format_date(&self.from_date),
            "to_date" => format_date(&self.to_date),
            "days" => self.days().to_string(),
            "status" => self.status.display_name().to_string(),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        format!("{} leave, {}", self.leave_type, self.cell("guard"))
    }

    fn template() -> serde_json::Value {
        json!({
            "guard_id": null,
            "leave_type": "",
            "from_date": "",
            "to_date": "",
            "reason": null,
        })
    }

    fn status_buttons(&self) -> Vec<StatusButton> {
        match self.status {
            LeaveStatus::Pending => vec![
                status_button("Approve", LeaveStatus::Approved.code()),
                status_button("Reject", LeaveStatus::Rejected.code()),
            ],
            LeaveStatus::Approved | LeaveStatus::Rejected => Vec::new(),
        }
    }
}

impl TableColumns for GuardAssignment {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::plain("guard", "Guard"),
            Column::plain("duty", "Duty"),
            Column::sortable("status", "Status"),
            Column::sortable("assigned_at", "Assigned"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "guard" => self
                .guard_name
                .clone()
                .unwrap_or_else(|| format!("#{}", self.guard_id)),
            "duty" => self
                .duty_title
                .clone()
                .unwrap_or_else(|| format!("#{}", self.duty_id)),
            "status" => self.status.display_name().to_string(),
            "assigned_at" => self
                .assigned_at
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        format!("{} on {}", self.cell("guard"), self.cell("duty"))
    }

    fn template() -> serde_json::Value {
        json!({ "guard_id": null, "duty_id": null, "notes": null })
    }

    /// One button per allowed transition
    fn status_buttons(&self) -> Vec<StatusButton> {
        self.status
            .available_transitions()
            .iter()
            .map(|next| status_button(next.action_label(), next.code()))
            .collect()
    }
}

impl TableColumns for Note {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::sortable("title", "Title"),
            Column::plain("guard_id", "Guard"),
            Column::sortable("created_at", "Created"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "guard_id" => or_dash(&self.guard_id.map(|id| format!("#{}", id))),
            "created_at" => self
                .created_at
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn template() -> serde_json::Value {
        json!({ "guard_id": null, "title": "", "body": null })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::entity_store::StatusChange;
    use contracts::enums::AssignmentStatus;

    fn assignment(status: AssignmentStatus) -> GuardAssignment {
        GuardAssignment {
            id: 1,
            guard_id: 7,
            duty_id: 3,
            status,
            assigned_at: None,
            notes: None,
            guard_name: Some("Ali".to_string()),
            duty_title: None,
        }
    }

    #[test]
    fn test_assignment_buttons_follow_transitions() {
        let buttons = assignment(AssignmentStatus::Pending).status_buttons();
        let labels: Vec<_> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Accept", "Reject", "Cancel"]);
        assert_eq!(
            buttons[0].change,
            StatusChange::new("change-status", "status", "accepted")
        );

        assert!(assignment(AssignmentStatus::Completed).status_buttons().is_empty());
    }

    #[test]
    fn test_assignment_cells_fall_back_to_ids() {
        let item = assignment(AssignmentStatus::Active);
        assert_eq!(item.cell("guard"), "Ali");
        assert_eq!(item.cell("duty"), "#3");
        assert_eq!(item.cell("assigned_at"), "-");
        assert_eq!(item.title(), "Ali on #3");
    }

    #[test]
    fn test_guard_toggle() {
        let guard = Guard {
            id: 1,
            name: "Ali".to_string(),
            email: None,
            phone: None,
            cnic: None,
            address: None,
            guard_type_id: None,
            guard_type: None,
            photo_url: None,
            is_active: true,
            created_at: None,
        };
        let buttons = guard.status_buttons();
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].change.value, serde_json::json!(false));
        assert_eq!(guard.cell("guard_type"), "-");
    }
}
