use contracts::domain::common::{Entity, EntityId};
use contracts::shared::pagination::{ListParams, ListResponse};
use futures::future::{AbortHandle, Abortable, Aborted, LocalBoxFuture};
use futures::FutureExt;
use leptos::prelude::*;
use std::collections::HashMap;
use std::future::{Future, IntoFuture};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

use super::action::{Action, ActionKind};
use super::reducer::reduce;
use super::service::{EntityService, StatusChange};
use super::state::EntityState;
use crate::shared::error::ApiError;
use crate::shared::http::Payload;

/// Why a dispatched action did not produce a value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Rejected(#[from] ApiError),
    #[error("Request cancelled")]
    Cancelled,
}

/// Cancels one in-flight request
///
/// Once cancelled, the request's eventual response is dropped and never
/// reaches the container.
#[derive(Clone, Debug)]
pub struct RequestHandle {
    abort: AbortHandle,
}

impl RequestHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// A dispatched action
///
/// Nothing happens until it is awaited or spawned. Await it to get the
/// fulfilled value, or [`spawn`](Dispatch::spawn) it as fire-and-forget
/// and keep the handle for cleanup.
pub struct Dispatch<O> {
    handle: RequestHandle,
    task: LocalBoxFuture<'static, Result<O, ActionError>>,
}

impl<O: 'static> Dispatch<O> {
    pub fn handle(&self) -> RequestHandle {
        self.handle.clone()
    }

    /// Run on the local executor without waiting for the outcome
    pub fn spawn(self) -> RequestHandle {
        let Dispatch { handle, task } = self;
        leptos::task::spawn_local(async move {
            let _ = task.await;
        });
        handle
    }
}

impl<O: 'static> IntoFuture for Dispatch<O> {
    type Output = Result<O, ActionError>;
    type IntoFuture = LocalBoxFuture<'static, Result<O, ActionError>>;

    fn into_future(self) -> Self::IntoFuture {
        self.task
    }
}

/// Abort handles of requests that have not resolved yet
#[derive(Clone, Default)]
struct InFlight {
    next_id: Arc<AtomicU64>,
    handles: Arc<Mutex<HashMap<u64, AbortHandle>>>,
}

impl InFlight {
    fn register(&self, handle: AbortHandle) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, handle);
        id
    }

    fn release(&self, id: u64) {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }

    fn abort_all(&self) -> usize {
        let handles: Vec<AbortHandle> = self
            .handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain()
            .map(|(_, handle)| handle)
            .collect();
        for handle in &handles {
            handle.abort();
        }
        handles.len()
    }

    fn len(&self) -> usize {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Registry entry owned by a dispatched task
///
/// Released when the task finishes or is dropped unpolled.
struct InFlightGuard {
    in_flight: InFlight,
    id: u64,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight.release(self.id);
    }
}

/// Reactive container plus the actions that mutate it
///
/// Cheap to clone; clones share the same container and service.
pub struct EntityStore<T: Entity> {
    key: &'static str,
    state: RwSignal<EntityState<T>>,
    service: Arc<dyn EntityService<T> + Send + Sync>,
    in_flight: InFlight,
}

impl<T: Entity> Clone for EntityStore<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            state: self.state,
            service: Arc::clone(&self.service),
            in_flight: self.in_flight.clone(),
        }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new(key: &'static str, service: Arc<dyn EntityService<T> + Send + Sync>) -> Self {
        Self {
            key,
            state: RwSignal::new(EntityState::default()),
            service,
            in_flight: InFlight::default(),
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Reactive view of the container for components
    pub fn state(&self) -> RwSignal<EntityState<T>> {
        self.state
    }

    /// Untracked copy of the container
    pub fn snapshot(&self) -> EntityState<T> {
        self.state.get_untracked()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    fn apply(&self, action: Action<T>) {
        self.state.update(|state| reduce(state, action));
    }

    pub fn clear_error(&self) {
        self.apply(Action::ClearError);
    }

    pub fn set_current(&self, item: Option<T>) {
        self.apply(Action::SetCurrent(item));
    }

    /// Empty the container; in-flight requests are cancelled first
    pub fn reset(&self) {
        self.cancel_all();
        self.apply(Action::Reset);
    }

    /// Cancel every request of this store that has not resolved yet
    pub fn cancel_all(&self) {
        let cancelled = self.in_flight.abort_all();
        if cancelled > 0 {
            log::debug!("[{}] cancelled {} in-flight request(s)", self.key, cancelled);
        }
    }

    pub fn fetch_list(&self, params: ListParams) -> Dispatch<ListResponse<T>> {
        let service = Arc::clone(&self.service);
        self.dispatch(
            ActionKind::FetchList,
            async move { service.list(&params).await },
            |response: &ListResponse<T>| Action::ListLoaded(response.clone()),
        )
    }

    pub fn fetch_one(&self, id: EntityId) -> Dispatch<T> {
        let service = Arc::clone(&self.service);
        self.dispatch(
            ActionKind::FetchOne,
            async move { service.get(id).await },
            |item: &T| Action::Loaded(item.clone()),
        )
    }

    pub fn create(&self, payload: Payload) -> Dispatch<T> {
        let service = Arc::clone(&self.service);
        self.dispatch(
            ActionKind::Create,
            async move { service.create(payload).await },
            |item: &T| Action::Created(item.clone()),
        )
    }

    pub fn update(&self, id: EntityId, payload: Payload) -> Dispatch<T> {
        let service = Arc::clone(&self.service);
        self.dispatch(
            ActionKind::Update,
            async move { service.update(id, payload).await },
            |item: &T| Action::Updated(item.clone()),
        )
    }

    pub fn delete(&self, id: EntityId) -> Dispatch<EntityId> {
        let service = Arc::clone(&self.service);
        self.dispatch(
            ActionKind::Delete,
            async move { service.delete(id).await.map(|()| id) },
            |id: &EntityId| Action::Deleted(*id),
        )
    }

    pub fn change_status(&self, id: EntityId, change: StatusChange) -> Dispatch<T> {
        let service = Arc::clone(&self.service);
        self.dispatch(
            ActionKind::ChangeStatus,
            async move { service.change_status(id, &change).await },
            |item: &T| Action::Updated(item.clone()),
        )
    }

    /// Flip a boolean flag such as `is_active` through `toggle-status`
    pub fn toggle_status(&self, id: EntityId, field: &str, value: bool) -> Dispatch<T> {
        self.change_status(id, StatusChange::new("toggle-status", field, value))
    }

    /// Wrap a service call in the pending / fulfilled / rejected lifecycle
    ///
    /// The pending phase is applied on first poll. A cancelled request only
    /// clears the loading flag.
    fn dispatch<O, Fut, F>(&self, kind: ActionKind, request: Fut, fulfilled: F) -> Dispatch<O>
    where
        O: 'static,
        Fut: Future<Output = Result<O, ApiError>> + 'static,
        F: FnOnce(&O) -> Action<T> + 'static,
    {
        let (abort, registration) = AbortHandle::new_pair();
        let guard = InFlightGuard {
            in_flight: self.in_flight.clone(),
            id: self.in_flight.register(abort.clone()),
        };
        let store = self.clone();

        let task = async move {
            let pending_store = store.clone();
            let outcome = Abortable::new(
                async move {
                    log::debug!("[{}] {} pending", pending_store.key, kind);
                    pending_store.apply(Action::Pending);
                    request.await
                },
                registration,
            )
            .await;
            drop(guard);

            match outcome {
                Ok(Ok(value)) => {
                    store.apply(fulfilled(&value));
                    Ok(value)
                }
                Ok(Err(e)) => {
                    log::warn!("[{}] {} rejected: {}", store.key, kind, e);
                    store.apply(Action::Rejected(e.to_string()));
                    Err(ActionError::Rejected(e))
                }
                Err(Aborted) => {
                    log::debug!("[{}] {} cancelled", store.key, kind);
                    store.apply(Action::Cancelled);
                    Err(ActionError::Cancelled)
                }
            }
        }
        .boxed_local();

        Dispatch {
            handle: RequestHandle { abort },
            task,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::shared::pagination::PageInfo;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use serde::{Deserialize, Serialize};
    use std::collections::VecDeque;

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

    fn listing(items: Vec<Item>) -> ListResponse<Item> {
        let total = items.len() as u64;
        ListResponse {
            items,
            data: PageInfo {
                current_page: 1,
                last_page: 1,
                total,
                per_page: Some(10),
            },
        }
    }

    /// Scripted backend: every call pops the next queued reply
    ///
    /// A reply is a oneshot receiver so tests decide when each call resolves.
    #[derive(Default)]
    struct ScriptedService {
        lists: Mutex<VecDeque<oneshot::Receiver<Result<ListResponse<Item>, ApiError>>>>,
        items: Mutex<VecDeque<Result<Item, ApiError>>>,
        deletes: Mutex<VecDeque<Result<(), ApiError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedService {
        fn queue_list(&self) -> oneshot::Sender<Result<ListResponse<Item>, ApiError>> {
            let (tx, rx) = oneshot::channel();
            self.lists.lock().unwrap().push_back(rx);
            tx
        }

        fn queue_item(&self, reply: Result<Item, ApiError>) {
            self.items.lock().unwrap().push_back(reply);
        }

        fn queue_delete(&self, reply: Result<(), ApiError>) {
            self.deletes.lock().unwrap().push_back(reply);
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn next_item(&self) -> Result<Item, ApiError> {
            self.items.lock().unwrap().pop_front().expect("no item reply queued")
        }
    }

    #[async_trait(?Send)]
    impl EntityService<Item> for ScriptedService {
        async fn list(&self, params: &ListParams) -> Result<ListResponse<Item>, ApiError> {
            self.record(format!("list page={:?}", params.page));
            let reply = self.lists.lock().unwrap().pop_front().expect("no list reply queued");
            reply.await.unwrap_or(Err(ApiError::Transport("dropped".to_string())))
        }

        async fn get(&self, id: EntityId) -> Result<Item, ApiError> {
            self.record(format!("get {}", id));
            self.next_item()
        }

        async fn create(&self, _payload: Payload) -> Result<Item, ApiError> {
            self.record("create".to_string());
            self.next_item()
        }

        async fn update(&self, id: EntityId, _payload: Payload) -> Result<Item, ApiError> {
            self.record(format!("update {}", id));
            self.next_item()
        }

        async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
            self.record(format!("delete {}", id));
            self.deletes.lock().unwrap().pop_front().expect("no delete reply queued")
        }

        async fn change_status(&self, id: EntityId, change: &StatusChange) -> Result<Item, ApiError> {
            self.record(format!("{} {} {}={}", change.action, id, change.field, change.value));
            self.next_item()
        }
    }

    fn store() -> (EntityStore<Item>, Arc<ScriptedService>) {
        let service = Arc::new(ScriptedService::default());
        (EntityStore::new("items", service.clone()), service)
    }

    fn seed(store: &EntityStore<Item>, service: &ScriptedService, items: Vec<Item>) {
        let tx = service.queue_list();
        tx.send(Ok(listing(items))).unwrap();
        block_on(store.fetch_list(ListParams::page(1, 10)).into_future()).unwrap();
    }

    fn validation(message: &str) -> ApiError {
        ApiError::Validation {
            message: message.to_string(),
            fields: Default::default(),
        }
    }

    #[test]
    fn test_fetch_list_scenario() {
        let (store, service) = store();
        let tx = service.queue_list();
        tx.send(Ok(listing(vec![item(1, "Ali")]))).unwrap();

        let response = block_on(store.fetch_list(ListParams::page(1, 10)).into_future()).unwrap();

        let state = store.snapshot();
        assert_eq!(response.items, vec![item(1, "Ali")]);
        assert_eq!(state.items, vec![item(1, "Ali")]);
        assert_eq!(state.pagination.total, 1);
        assert_eq!(state.pagination.per_page, Some(10));
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(store.in_flight(), 0);
    }

    #[test]
    fn test_loading_flag_while_pending() {
        let (store, service) = store();
        let tx = service.queue_list();
        let mut pool = LocalPool::new();
        let dispatch = store.fetch_list(ListParams::page(1, 10));
        pool.spawner()
            .spawn_local(async move {
                let _ = dispatch.await;
            })
            .unwrap();

        pool.run_until_stalled();
        assert!(store.snapshot().is_loading);
        assert_eq!(store.in_flight(), 1);

        tx.send(Ok(listing(vec![]))).unwrap();
        pool.run_until_stalled();
        assert!(!store.snapshot().is_loading);
        assert_eq!(store.in_flight(), 0);
    }

    #[test]
    fn test_delete_scenario() {
        let (store, service) = store();
        seed(&store, &service, vec![item(1, "Ali")]);
        store.set_current(Some(item(1, "Ali")));
        service.queue_delete(Ok(()));

        let deleted = block_on(store.delete(1).into_future()).unwrap();

        let state = store.snapshot();
        assert_eq!(deleted, 1);
        assert!(state.items.is_empty());
        assert_eq!(state.pagination.total, 0);
        assert_eq!(state.current, None);
    }

    #[test]
    fn test_rejected_create_scenario() {
        let (store, service) = store();
        seed(&store, &service, vec![item(1, "Ali")]);
        service.queue_item(Err(validation("Validation failed")));
        let before = store.snapshot();

        let payload = Payload::json(&serde_json::json!({ "name": "" })).unwrap();
        let result = block_on(store.create(payload).into_future());

        assert!(matches!(result, Err(ActionError::Rejected(ApiError::Validation { .. }))));
        let state = store.snapshot();
        assert_eq!(state.items, before.items);
        assert_eq!(state.pagination.total, before.pagination.total);
        assert_eq!(state.error.as_deref(), Some("Validation failed"));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_rejected_update_changes_only_error_and_loading() {
        let (store, service) = store();
        seed(&store, &service, vec![item(1, "a"), item(2, "b")]);
        store.set_current(Some(item(2, "b")));
        service.queue_item(Err(ApiError::NotFound("Guard not found".to_string())));
        let before = store.snapshot();

        let payload = Payload::json(&serde_json::json!({ "name": "B" })).unwrap();
        let _ = block_on(store.update(2, payload).into_future());

        let after = store.snapshot();
        assert_eq!(after.items, before.items);
        assert_eq!(after.current, before.current);
        assert_eq!(after.pagination, before.pagination);
        assert_eq!(after.error.as_deref(), Some("Guard not found"));
    }

    #[test]
    fn test_update_replaces_by_id() {
        let (store, service) = store();
        seed(&store, &service, vec![item(1, "a"), item(2, "b")]);
        store.set_current(Some(item(2, "b")));
        service.queue_item(Ok(item(2, "B")));

        let payload = Payload::json(&serde_json::json!({ "name": "B" })).unwrap();
        block_on(store.update(2, payload).into_future()).unwrap();

        let state = store.snapshot();
        assert_eq!(state.items, vec![item(1, "a"), item(2, "B")]);
        assert_eq!(state.current, Some(item(2, "B")));
    }

    #[test]
    fn test_update_keeps_other_current() {
        let (store, service) = store();
        seed(&store, &service, vec![item(1, "a"), item(2, "b")]);
        store.set_current(Some(item(1, "a")));
        service.queue_item(Ok(item(2, "B")));

        let payload = Payload::json(&serde_json::json!({ "name": "B" })).unwrap();
        block_on(store.update(2, payload).into_future()).unwrap();

        assert_eq!(store.snapshot().current, Some(item(1, "a")));

        store.set_current(None);
        service.queue_item(Ok(item(2, "BB")));
        let payload = Payload::json(&serde_json::json!({ "name": "BB" })).unwrap();
        block_on(store.update(2, payload).into_future()).unwrap();

        assert_eq!(store.snapshot().current, None);
    }

    #[test]
    fn test_create_prepends_and_bumps_total() {
        let (store, service) = store();
        seed(&store, &service, vec![item(1, "a")]);
        service.queue_item(Ok(item(7, "new")));

        let payload = Payload::json(&serde_json::json!({ "name": "new" })).unwrap();
        let created = block_on(store.create(payload).into_future()).unwrap();

        let state = store.snapshot();
        assert_eq!(created, item(7, "new"));
        assert_eq!(state.items, vec![item(7, "new"), item(1, "a")]);
        assert_eq!(state.pagination.total, 2);
        assert_eq!(state.current, Some(item(7, "new")));
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(service.calls.lock().unwrap().last().map(String::as_str), Some("create"));
    }

    #[test]
    fn test_dropped_dispatch_leaves_no_in_flight_entry() {
        let (store, _service) = store();

        for page in 1..=1000 {
            drop(store.fetch_list(ListParams::page(page, 10)));
        }

        assert_eq!(store.in_flight(), 0);
        assert_eq!(store.snapshot(), EntityState::default());
    }

    #[test]
    fn test_toggle_status_goes_through_status_endpoint() {
        let (store, service) = store();
        seed(&store, &service, vec![item(1, "a")]);
        service.queue_item(Ok(item(1, "a (inactive)")));

        block_on(store.toggle_status(1, "is_active", false).into_future()).unwrap();

        assert_eq!(store.snapshot().items, vec![item(1, "a (inactive)")]);
        let calls = service.calls.lock().unwrap().clone();
        assert_eq!(calls.last().map(String::as_str), Some("toggle-status 1 is_active=false"));
    }

    #[test]
    fn test_fetch_one_sets_current() {
        let (store, service) = store();
        service.queue_item(Ok(item(5, "e")));

        block_on(store.fetch_one(5).into_future()).unwrap();

        let state = store.snapshot();
        assert_eq!(state.current, Some(item(5, "e")));
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_later_resolution_wins() {
        let (store, service) = store();
        let first = service.queue_list();
        let second = service.queue_list();
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let page_one = store.fetch_list(ListParams::page(1, 10));
        let page_two = store.fetch_list(ListParams::page(2, 10));
        spawner.spawn_local(async move { let _ = page_one.await; }).unwrap();
        spawner.spawn_local(async move { let _ = page_two.await; }).unwrap();
        pool.run_until_stalled();

        // Dispatched second, resolves first
        second.send(Ok(listing(vec![item(2, "page two")]))).unwrap();
        pool.run_until_stalled();
        first.send(Ok(listing(vec![item(1, "page one")]))).unwrap();
        pool.run_until_stalled();

        assert_eq!(store.snapshot().items, vec![item(1, "page one")]);
    }

    #[test]
    fn test_cancelled_request_never_applies() {
        let (store, service) = store();
        seed(&store, &service, vec![item(1, "a")]);
        let tx = service.queue_list();
        let mut pool = LocalPool::new();

        let dispatch = store.fetch_list(ListParams::page(2, 10));
        let handle = dispatch.handle();
        let outcome = Arc::new(Mutex::new(None));
        let outcome_slot = outcome.clone();
        pool.spawner()
            .spawn_local(async move {
                let result = dispatch.await;
                *outcome_slot.lock().unwrap() = Some(result.map(|_| ()));
            })
            .unwrap();
        pool.run_until_stalled();
        assert!(store.snapshot().is_loading);

        handle.cancel();
        pool.run_until_stalled();
        let _ = tx.send(Ok(listing(vec![item(9, "late")])));
        pool.run_until_stalled();

        let state = store.snapshot();
        assert_eq!(state.items, vec![item(1, "a")]);
        assert!(!state.is_loading);
        assert!(handle.is_cancelled());
        assert_eq!(*outcome.lock().unwrap(), Some(Err(ActionError::Cancelled)));
    }

    #[test]
    fn test_reset_cancels_and_empties() {
        let (store, service) = store();
        seed(&store, &service, vec![item(1, "a")]);
        let _tx = service.queue_list();
        let mut pool = LocalPool::new();
        let dispatch = store.fetch_list(ListParams::page(2, 10));
        pool.spawner()
            .spawn_local(async move {
                let _ = dispatch.await;
            })
            .unwrap();
        pool.run_until_stalled();

        store.reset();
        pool.run_until_stalled();

        assert_eq!(store.snapshot(), EntityState::default());
        assert_eq!(store.in_flight(), 0);
    }

    #[test]
    fn test_container_usable_after_rejection() {
        let (store, service) = store();
        let tx = service.queue_list();
        tx.send(Err(ApiError::Transport("offline".to_string()))).unwrap();
        assert!(block_on(store.fetch_list(ListParams::default()).into_future()).is_err());
        assert!(store.snapshot().error.is_some());

        let tx = service.queue_list();
        tx.send(Ok(listing(vec![item(1, "a")]))).unwrap();
        block_on(store.fetch_list(ListParams::default()).into_future()).unwrap();

        let state = store.snapshot();
        assert_eq!(state.error, None);
        assert_eq!(state.items.len(), 1);
    }
}
