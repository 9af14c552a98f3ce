//! Generic entity list-state management
//!
//! One [`EntityStore`] per entity type holds an [`EntityState`] container and
//! dispatches the fetch / create / update / delete / status-change actions
//! against an [`EntityService`]. Every action moves through a pending phase
//! and then either a fulfilled or a rejected phase; the transitions are
//! applied by [`reduce`].

pub mod action;
pub mod query;
pub mod reducer;
pub mod service;
pub mod state;
pub mod store;

pub use action::{Action, ActionKind};
pub use query::to_query_string;
pub use reducer::reduce;
pub use service::{EntityConfig, EntityService, RestService, StatusChange};
pub use state::EntityState;
pub use store::{ActionError, Dispatch, EntityStore, RequestHandle};
