define_status! {
    /// Lifecycle of a scheduled duty
    DutyStatus {
        Scheduled => ("scheduled", "Scheduled"),
        Ongoing => ("ongoing", "Ongoing"),
        Completed => ("completed", "Completed"),
        Cancelled => ("cancelled", "Cancelled"),
    }
}

define_status! {
    AttendanceStatus {
        Present => ("present", "Present"),
        Late => ("late", "Late"),
        Absent => ("absent", "Absent"),
    }
}

define_status! {
    LeaveStatus {
        Pending => ("pending", "Pending"),
        Approved => ("approved", "Approved"),
        Rejected => ("rejected", "Rejected"),
    }
}

define_status! {
    /// Review state of an expense; also the decision recorded on a review
    ExpenseStatus {
        Pending => ("pending", "Pending"),
        Approved => ("approved", "Approved"),
        Rejected => ("rejected", "Rejected"),
    }
}

define_status! {
    IncidentStatus {
        Open => ("open", "Open"),
        Investigating => ("investigating", "Investigating"),
        Resolved => ("resolved", "Resolved"),
        Closed => ("closed", "Closed"),
    }
}

define_status! {
    IncidentSeverity {
        Low => ("low", "Low"),
        Medium => ("medium", "Medium"),
        High => ("high", "High"),
        Critical => ("critical", "Critical"),
    }
}

define_status! {
    ComplaintStatus {
        Open => ("open", "Open"),
        InProgress => ("in_progress", "In progress"),
        Resolved => ("resolved", "Resolved"),
        Dismissed => ("dismissed", "Dismissed"),
    }
}
