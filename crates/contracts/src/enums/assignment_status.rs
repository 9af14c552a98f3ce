define_status! {
    /// Status of a guard's assignment to a duty
    AssignmentStatus {
        Pending => ("pending", "Pending"),
        Accepted => ("accepted", "Accepted"),
        Rejected => ("rejected", "Rejected"),
        Active => ("active", "Active"),
        Completed => ("completed", "Completed"),
        Cancelled => ("cancelled", "Cancelled"),
    }
}

impl AssignmentStatus {
    /// Statuses an assignment may move to from this one
    ///
    /// The admin screen renders one button per entry.
    pub fn available_transitions(&self) -> &'static [AssignmentStatus] {
        use AssignmentStatus::*;
        match self {
            Pending => &[Accepted, Rejected, Cancelled],
            Accepted => &[Active, Cancelled],
            Active => &[Completed, Cancelled],
            Rejected | Completed | Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: AssignmentStatus) -> bool {
        self.available_transitions().contains(&next)
    }

    pub fn is_terminal(&self) -> bool {
        self.available_transitions().is_empty()
    }

    /// Verb shown on the button that moves an assignment into this status
    pub fn action_label(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "Reset",
            AssignmentStatus::Accepted => "Accept",
            AssignmentStatus::Rejected => "Reject",
            AssignmentStatus::Active => "Start",
            AssignmentStatus::Completed => "Complete",
            AssignmentStatus::Cancelled => "Cancel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_can_be_accepted_or_rejected() {
        let next = AssignmentStatus::Pending.available_transitions();
        assert_eq!(
            next,
            &[
                AssignmentStatus::Accepted,
                AssignmentStatus::Rejected,
                AssignmentStatus::Cancelled
            ]
        );
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(AssignmentStatus::Completed.is_terminal());
        assert!(AssignmentStatus::Rejected.is_terminal());
        assert!(AssignmentStatus::Cancelled.is_terminal());
        assert!(!AssignmentStatus::Active.is_terminal());
    }

    #[test]
    fn test_no_skipping_acceptance() {
        assert!(!AssignmentStatus::Pending.can_transition_to(AssignmentStatus::Active));
        assert!(AssignmentStatus::Accepted.can_transition_to(AssignmentStatus::Active));
        assert!(AssignmentStatus::Active.can_transition_to(AssignmentStatus::Completed));
    }
}
