use contracts::domain::common::Entity;

use super::action::Action;
use super::state::EntityState;

/// Apply one lifecycle event to a container
///
/// Fulfilled and rejected events always end loading. A rejection only
/// touches `error`; list, current item and pagination stay as they were.
pub fn reduce<T: Entity>(state: &mut EntityState<T>, action: Action<T>) {
    match action {
        Action::Pending => {
            state.is_loading = true;
            state.error = None;
        }
        Action::ListLoaded(response) => {
            state.items = response.items;
            state.pagination = response.data;
            state.is_loading = false;
        }
        Action::Loaded(item) => {
            state.current = Some(item);
            state.is_loading = false;
        }
        Action::Created(item) => {
            state.items.insert(0, item.clone());
            state.pagination.total += 1;
            state.current = Some(item);
            state.is_loading = false;
        }
        Action::Updated(item) => {
            let id = item.id();
            if let Some(existing) = state.items.iter_mut().find(|i| i.id() == id) {
                *existing = item.clone();
            }
            if state.current.as_ref().map(Entity::id) == Some(id) {
                state.current = Some(item);
            }
            state.is_loading = false;
        }
        Action::Deleted(id) => {
            state.items.retain(|i| i.id() != id);
            state.pagination.total = state.pagination.total.saturating_sub(1);
            if state.current.as_ref().map(Entity::id) == Some(id) {
                state.current = None;
            }
            state.is_loading = false;
        }
        Action::Rejected(message) => {
            state.error = Some(message);
            state.is_loading = false;
        }
        Action::Cancelled => {
            state.is_loading = false;
        }
        Action::ClearError => {
            state.error = None;
        }
        Action::SetCurrent(item) => {
            state.current = item;
        }
        Action::Reset => {
            *state = EntityState::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityId;
    use contracts::shared::pagination::{ListResponse, PageInfo};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: EntityId,
        name: String,
    }

    impl Entity for Item {
        fn id(&self) -> EntityId {
            self.id
        }
    }

    fn item(id: EntityId, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
        }
    }

    fn page(total: u64) -> PageInfo {
        PageInfo {
            current_page: 1,
            last_page: 1,
            total,
            per_page: Some(10),
        }
    }

    fn loaded(items: Vec<Item>) -> EntityState<Item> {
        let total = items.len() as u64;
        let mut state = EntityState::default();
        reduce(
            &mut state,
            Action::ListLoaded(ListResponse {
                items,
                data: page(total),
            }),
        );
        state
    }

    #[test]
    fn test_fetch_list_scenario() {
        let mut state = EntityState::<Item>::default();
        assert_eq!(state.pagination, PageInfo::default());

        reduce(&mut state, Action::Pending);
        assert!(state.is_loading);

        reduce(
            &mut state,
            Action::ListLoaded(ListResponse {
                items: vec![item(1, "Ali")],
                data: page(1),
            }),
        );
        assert_eq!(state.items, vec![item(1, "Ali")]);
        assert_eq!(state.pagination, page(1));
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_list_replaces_not_merges() {
        let mut state = loaded(vec![item(1, "a"), item(2, "b")]);
        reduce(
            &mut state,
            Action::ListLoaded(ListResponse {
                items: vec![item(3, "c")],
                data: page(1),
            }),
        );
        assert_eq!(state.items, vec![item(3, "c")]);
        assert_eq!(state.pagination.total, 1);
    }

    #[test]
    fn test_same_list_twice_is_idempotent() {
        let response = ListResponse {
            items: vec![item(1, "a"), item(2, "b")],
            data: page(2),
        };
        let mut state = EntityState::default();
        reduce(&mut state, Action::Pending);
        reduce(&mut state, Action::ListLoaded(response.clone()));
        let first = state.clone();
        reduce(&mut state, Action::Pending);
        reduce(&mut state, Action::ListLoaded(response));
        assert_eq!(state, first);
    }

    #[test]
    fn test_update_replaces_only_matching_item() {
        let mut state = loaded(vec![item(1, "a"), item(2, "b"), item(3, "c")]);
        state.current = Some(item(2, "b"));

        reduce(&mut state, Action::Updated(item(2, "B")));

        assert_eq!(state.items, vec![item(1, "a"), item(2, "B"), item(3, "c")]);
        assert_eq!(state.current, Some(item(2, "B")));
    }

    #[test]
    fn test_update_of_unlisted_item_leaves_list_alone() {
        let mut state = loaded(vec![item(1, "a")]);
        state.current = Some(item(1, "a"));

        reduce(&mut state, Action::Updated(item(9, "z")));

        assert_eq!(state.items, vec![item(1, "a")]);
        assert_eq!(state.current, Some(item(1, "a")));
    }

    #[test]
    fn test_delete_scenario() {
        let mut state = loaded(vec![item(1, "Ali")]);
        state.current = Some(item(1, "Ali"));

        reduce(&mut state, Action::Deleted(1));

        assert!(state.items.is_empty());
        assert_eq!(state.pagination.total, 0);
        assert_eq!(state.current, None);
    }

    #[test]
    fn test_delete_total_never_below_zero() {
        let mut state = EntityState::<Item>::default();
        reduce(&mut state, Action::Deleted(5));
        assert_eq!(state.pagination.total, 0);
    }

    #[test]
    fn test_delete_keeps_unrelated_current() {
        let mut state = loaded(vec![item(1, "a"), item(2, "b")]);
        state.current = Some(item(2, "b"));

        reduce(&mut state, Action::Deleted(1));

        assert_eq!(state.items, vec![item(2, "b")]);
        assert_eq!(state.pagination.total, 1);
        assert_eq!(state.current, Some(item(2, "b")));
    }

    #[test]
    fn test_create_prepends_and_bumps_total() {
        let mut state = loaded(vec![item(1, "a")]);

        reduce(&mut state, Action::Created(item(2, "b")));

        assert_eq!(state.items, vec![item(2, "b"), item(1, "a")]);
        assert_eq!(state.pagination.total, 2);
        assert_eq!(state.current, Some(item(2, "b")));
    }

    #[test]
    fn test_rejected_create_scenario() {
        let mut state = loaded(vec![item(1, "a")]);
        let before = state.clone();

        reduce(&mut state, Action::Pending);
        reduce(&mut state, Action::Rejected("Validation failed".to_string()));

        assert_eq!(state.items, before.items);
        assert_eq!(state.pagination, before.pagination);
        assert_eq!(state.current, before.current);
        assert_eq!(state.error.as_deref(), Some("Validation failed"));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_pending_clears_previous_error() {
        let mut state = EntityState::<Item>::default();
        reduce(&mut state, Action::Rejected("boom".to_string()));
        reduce(&mut state, Action::Pending);
        assert_eq!(state.error, None);
        assert!(state.is_loading);
    }

    #[test]
    fn test_fetch_one_sets_current_only() {
        let mut state = loaded(vec![item(1, "a")]);
        reduce(&mut state, Action::Loaded(item(7, "g")));
        assert_eq!(state.current, Some(item(7, "g")));
        assert_eq!(state.items, vec![item(1, "a")]);
    }

    #[test]
    fn test_cancel_only_stops_loading() {
        let mut state = loaded(vec![item(1, "a")]);
        reduce(&mut state, Action::Pending);
        let mut expected = state.clone();
        expected.is_loading = false;

        reduce(&mut state, Action::Cancelled);

        assert_eq!(state, expected);
    }

    #[test]
    fn test_clear_error_and_reset() {
        let mut state = loaded(vec![item(1, "a")]);
        reduce(&mut state, Action::Rejected("x".to_string()));
        reduce(&mut state, Action::ClearError);
        assert_eq!(state.error, None);
        assert_eq!(state.items.len(), 1);

        reduce(&mut state, Action::Reset);
        assert_eq!(state, EntityState::default());
    }
}
