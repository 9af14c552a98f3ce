use contracts::domain::common::EntityId;
use contracts::shared::pagination::ListResponse;
use std::fmt;

/// Which operation a dispatch performs; used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    FetchList,
    FetchOne,
    Create,
    Update,
    Delete,
    ChangeStatus,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActionKind::FetchList => "fetch_list",
            ActionKind::FetchOne => "fetch_one",
            ActionKind::Create => "create",
            ActionKind::Update => "update",
            ActionKind::Delete => "delete",
            ActionKind::ChangeStatus => "change_status",
        })
    }
}

/// Lifecycle event applied to an [`EntityState`](super::EntityState)
#[derive(Debug, Clone, PartialEq)]
pub enum Action<T> {
    /// Any request started
    Pending,
    ListLoaded(ListResponse<T>),
    Loaded(T),
    Created(T),
    /// Fulfilled `update` or status change
    Updated(T),
    Deleted(EntityId),
    /// Any request failed; carries the display message
    Rejected(String),
    /// The request was cancelled before it resolved
    Cancelled,
    ClearError,
    SetCurrent(Option<T>),
    Reset,
}
