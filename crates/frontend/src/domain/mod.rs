pub mod app_store;
pub mod clients;
pub mod finance;
pub mod operations;
pub mod workforce;

pub use app_store::{config_for, render_screen, AppStore, Resource, ALL_CONFIGS};

use crate::shared::entity_page::StatusButton;
use crate::shared::entity_store::StatusChange;

/// `change-status` button that sets `status` to `code`
pub(crate) fn status_button(label: &str, code: &str) -> StatusButton {
    StatusButton::new(label, StatusChange::new("change-status", "status", code))
}
