//! Generic screens over an [`EntityStore`]
//!
//! Every entity renders through the same list page, editor dialog and
//! detail panel; the per-entity parts are supplied by [`TableColumns`].

pub mod details;
pub mod editor;
pub mod list;

pub use details::EntityDetails;
pub use editor::{EditorTarget, EntityEditor};
pub use list::EntityListPage;

use contracts::domain::common::Entity;

use crate::shared::entity_store::{EntityStore, StatusChange};

/// One table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Field name, also sent as `sort_by`
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
}

impl Column {
    pub const fn sortable(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
        }
    }

    pub const fn plain(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
        }
    }
}

/// Row action that moves a status-like field
#[derive(Debug, Clone, PartialEq)]
pub struct StatusButton {
    pub label: String,
    pub change: StatusChange,
}

impl StatusButton {
    pub fn new(label: impl Into<String>, change: StatusChange) -> Self {
        Self {
            label: label.into(),
            change,
        }
    }

    /// `toggle-status` button for a boolean flag, labelled by the value it sets
    pub fn toggle(field: &str, current: bool) -> Self {
        let label = if current { "Deactivate" } else { "Activate" };
        Self::new(label, StatusChange::new("toggle-status", field, !current))
    }
}

/// How an entity is shown in the generic screens
pub trait TableColumns: Entity {
    fn columns() -> &'static [Column];

    /// Display text for one column of this row
    fn cell(&self, key: &str) -> String;

    /// Short name used in dialogs and the detail header
    fn title(&self) -> String;

    /// Editable JSON for a new record
    fn template() -> serde_json::Value;

    fn status_buttons(&self) -> Vec<StatusButton> {
        Vec::new()
    }

    /// Row click: show what we have, then refresh it from the backend
    fn open(store: &EntityStore<Self>, item: &Self) {
        store.set_current(Some(item.clone()));
        store.fetch_one(item.id()).spawn();
    }
}

/// Text for an optional cell value
pub fn or_dash<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string())
}

pub fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_button_sets_opposite_value() {
        let button = StatusButton::toggle("is_active", true);
        assert_eq!(button.label, "Deactivate");
        assert_eq!(button.change, StatusChange::new("toggle-status", "is_active", false));

        let button = StatusButton::toggle("is_active", false);
        assert_eq!(button.label, "Activate");
        assert_eq!(button.change.value, serde_json::json!(true));
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(&Some(3)), "3");
        assert_eq!(or_dash::<String>(&None), "-");
    }
}
