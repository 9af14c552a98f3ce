use chrono::{DateTime, Utc};
use contracts::domain::{
    Complainant, Complaint, Duty, DutyAttendance, DutyStatusReport, DutyTimeType, Incident,
};
use contracts::enums::{ComplaintStatus, DutyStatus, IncidentStatus};
use serde_json::json;

use super::status_button;
use crate::shared::date_utils::{format_date, format_datetime, format_timestamp};
use crate::shared::entity_page::{or_dash, Column, StatusButton, TableColumns};

impl TableColumns for DutyTimeType {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::sortable("name", "Name"),
            Column::plain("start_time", "Starts"),
            Column::plain("end_time", "Ends"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "start_time" => self.start_time.clone(),
            "end_time" => self.end_time.clone(),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        format!("{} ({} - {})", self.name, self.start_time, self.end_time)
    }

    fn template() -> serde_json::Value {
        json!({ "name": "", "start_time": "08:00", "end_time": "20:00" })
    }
}

impl TableColumns for Duty {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::sortable("title", "Title"),
            Column::plain("site", "Site"),
            Column::sortable("date", "Date"),
            Column::sortable("required_guards", "Guards"),
            Column::sortable("status", "Status"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "site" => self
                .site_name
                .clone()
                .unwrap_or_else(|| format!("#{}", self.site_id)),
            "date" => format_date(&self.date),
            "required_guards" => self.required_guards.to_string(),
            "status" => self.status.display_name().to_string(),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn template() -> serde_json::Value {
        json!({
            "site_id": null,
            "duty_time_type_id": null,
            "title": "",
            "date": "",
            "required_guards": 1,
            "notes": null,
        })
    }

    fn status_buttons(&self) -> Vec<StatusButton> {
        match self.status {
            DutyStatus::Scheduled => vec![
                status_button("Start", DutyStatus::Ongoing.code()),
                status_button("Cancel", DutyStatus::Cancelled.code()),
            ],
            DutyStatus::Ongoing => vec![status_button("Complete", DutyStatus::Completed.code())],
            DutyStatus::Completed | DutyStatus::Cancelled => Vec::new(),
        }
    }
}

impl TableColumns for DutyAttendance {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::plain("guard", "Guard"),
            Column::plain("duty_id", "Duty"),
            Column::sortable("check_in_at", "Check in"),
            Column::sortable("check_out_at", "Check out"),
            Column::sortable("status", "Status"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        let time = |value: &Option<DateTime<Utc>>| {
            value.as_ref().map(format_datetime).unwrap_or_else(|| "-".to_string())
        };
        match key {
            "guard" => self
                .guard_name
                .clone()
                .unwrap_or_else(|| format!("#{}", self.guard_id)),
            "duty_id" => format!("#{}", self.duty_id),
            "check_in_at" => time(&self.check_in_at),
            "check_out_at" => time(&self.check_out_at),
            "status" => self.status.display_name().to_string(),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        format!("{}, duty #{}", self.cell("guard"), self.duty_id)
    }

    fn template() -> serde_json::Value {
        json!({
            "duty_id": null,
            "guard_id": null,
            "check_in_at": null,
            "check_out_at": null,
            "status": "present",
        })
    }
}

impl TableColumns for DutyStatusReport {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::plain("report", "Report"),
            Column::plain("guard_id", "Guard"),
            Column::plain("duty_id", "Duty"),
            Column::sortable("reported_at", "Reported"),
            Column::plain("image", "Photo"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "report" => self.report.clone(),
            "guard_id" => format!("#{}", self.guard_id),
            "duty_id" => format!("#{}", self.duty_id),
            "reported_at" => format_datetime(&self.reported_at),
            "image" => if self.image_url.is_some() { "Yes" } else { "-" }.to_string(),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        format!("Report on duty #{}", self.duty_id)
    }

    fn template() -> serde_json::Value {
        json!({ "duty_id": null, "guard_id": null, "report": "", "reported_at": "" })
    }
}

impl TableColumns for Incident {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::sortable("title", "Title"),
            Column::plain("site_id", "Site"),
            Column::sortable("severity", "Severity"),
            Column::sortable("status", "Status"),
            Column::sortable("occurred_at", "Occurred"),
            Column::plain("attachments", "Files"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "site_id" => format!("#{}", self.site_id),
            "severity" => self.severity.display_name().to_string(),
            "status" => self.status.display_name().to_string(),
            "occurred_at" => format_datetime(&self.occurred_at),
            "attachments" => self.attachments.len().to_string(),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn template() -> serde_json::Value {
        json!({
            "site_id": null,
            "guard_id": null,
            "title": "",
            "description": null,
            "severity": "low",
            "occurred_at": "",
        })
    }

    fn status_buttons(&self) -> Vec<StatusButton> {
        match self.status {
            IncidentStatus::Open => vec![
                status_button("Investigate", IncidentStatus::Investigating.code()),
                status_button("Resolve", IncidentStatus::Resolved.code()),
            ],
            IncidentStatus::Investigating => {
                vec![status_button("Resolve", IncidentStatus::Resolved.code())]
            }
            IncidentStatus::Resolved => vec![status_button("Close", IncidentStatus::Closed.code())],
            IncidentStatus::Closed => Vec::new(),
        }
    }
}

impl TableColumns for Complainant {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::sortable("name", "Name"),
            Column::plain("phone", "Phone"),
            Column::plain("email", "Email"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "phone" => or_dash(&self.phone),
            "email" => or_dash(&self.email),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn template() -> serde_json::Value {
        json!({ "name": "", "phone": null, "email": null })
    }
}

impl TableColumns for Complaint {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::sortable("subject", "Subject"),
            Column::plain("complainant_id", "Complainant"),
            Column::sortable("status", "Status"),
            Column::sortable("created_at", "Received"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "subject" => self.subject.clone(),
            "complainant_id" => format!("#{}", self.complainant_id),
            "status" => self.status.display_name().to_string(),
            "created_at" => self
                .created_at
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| "-".to_string()),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        self.subject.clone()
    }

    fn template() -> serde_json::Value {
        json!({
            "complainant_id": null,
            "site_id": null,
            "guard_id": null,
            "subject": "",
            "description": null,
        })
    }

    fn status_buttons(&self) -> Vec<StatusButton> {
        let close = [
            status_button("Resolve", ComplaintStatus::Resolved.code()),
            status_button("Dismiss", ComplaintStatus::Dismissed.code()),
        ];
        match self.status {
            ComplaintStatus::Open => {
                let mut buttons = vec![status_button("Take up", ComplaintStatus::InProgress.code())];
                buttons.extend(close);
                buttons
            }
            ComplaintStatus::InProgress => close.to_vec(),
            ComplaintStatus::Resolved | ComplaintStatus::Dismissed => Vec::new(),
        }
    }
}
