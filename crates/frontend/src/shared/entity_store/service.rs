use async_trait::async_trait;
use contracts::domain::common::{Entity, EntityId};
use contracts::shared::pagination::{ItemResponse, ListParams, ListResponse};
use gloo_net::http::Request;
use std::marker::PhantomData;

use super::query::to_query_string;
use crate::shared::api_utils::join_url;
use crate::shared::error::ApiError;
use crate::shared::http::{authorized, decode, ensure_success, send_with, Payload};

/// Static description of one entity's REST resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityConfig {
    /// Stable key used for tabs and logging, e.g. `"guards"`
    pub key: &'static str,
    /// Menu / page title
    pub label: &'static str,
    /// Collection path, e.g. `"/api/guards"`
    pub path: &'static str,
    /// Form field carrying an uploaded file; when set, create / update
    /// bodies go up as multipart forms
    pub file_field: Option<&'static str>,
    /// Relations requested on every list fetch
    pub includes: &'static [&'static str],
}

/// Request to move one field of a record to a new value
///
/// `action` is the endpoint suffix (`toggle-status`, `change-status`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub action: String,
    pub field: String,
    pub value: serde_json::Value,
}

impl EntityConfig {
    pub fn is_multipart(&self) -> bool {
        self.file_field.is_some()
    }
}

impl StatusChange {
    pub fn new(action: impl Into<String>, field: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            action: action.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    fn body(&self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert(self.field.clone(), self.value.clone());
        serde_json::Value::Object(body)
    }
}

/// Backend operations for one entity type
#[async_trait(?Send)]
pub trait EntityService<T: Entity> {
    async fn list(&self, params: &ListParams) -> Result<ListResponse<T>, ApiError>;

    async fn get(&self, id: EntityId) -> Result<T, ApiError>;

    async fn create(&self, payload: Payload) -> Result<T, ApiError>;

    async fn update(&self, id: EntityId, payload: Payload) -> Result<T, ApiError>;

    async fn delete(&self, id: EntityId) -> Result<(), ApiError>;

    async fn change_status(&self, id: EntityId, change: &StatusChange) -> Result<T, ApiError>;
}

/// [`EntityService`] talking to the REST backend
pub struct RestService<T> {
    config: EntityConfig,
    base: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T> RestService<T> {
    pub fn new(config: EntityConfig, base: impl Into<String>) -> Self {
        Self {
            config,
            base: base.into(),
            _entity: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        join_url(&self.base, self.config.path)
    }

    fn item_url(&self, id: EntityId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

#[async_trait(?Send)]
impl<T: Entity> EntityService<T> for RestService<T> {
    async fn list(&self, params: &ListParams) -> Result<ListResponse<T>, ApiError> {
        let mut params = params.clone();
        params
            .include
            .extend(self.config.includes.iter().map(|r| r.to_string()));

        let query = to_query_string(&params)?;
        let url = if query.is_empty() {
            self.collection_url()
        } else {
            format!("{}?{}", self.collection_url(), query)
        };

        let response = authorized(Request::get(&url))?.send().await?;
        decode(response).await
    }

    async fn get(&self, id: EntityId) -> Result<T, ApiError> {
        let response = authorized(Request::get(&self.item_url(id)))?.send().await?;
        decode::<ItemResponse<T>>(response).await.map(|r| r.item)
    }

    async fn create(&self, payload: Payload) -> Result<T, ApiError> {
        let builder = authorized(Request::post(&self.collection_url()))?;
        let response = send_with(builder, payload).await?;
        decode::<ItemResponse<T>>(response).await.map(|r| r.item)
    }

    async fn update(&self, id: EntityId, payload: Payload) -> Result<T, ApiError> {
        // Browsers cannot send multipart PUT bodies the backend understands;
        // spoof the method instead
        let builder = match payload {
            Payload::Multipart(_) => {
                authorized(Request::post(&format!("{}?_method=PUT", self.item_url(id))))?
            }
            Payload::Json(_) => authorized(Request::put(&self.item_url(id)))?,
        };
        let response = send_with(builder, payload).await?;
        decode::<ItemResponse<T>>(response).await.map(|r| r.item)
    }

    async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        let response = authorized(Request::delete(&self.item_url(id)))?.send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn change_status(&self, id: EntityId, change: &StatusChange) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.item_url(id), change.action);
        let builder = authorized(Request::patch(&url))?;
        let response = send_with(builder, Payload::Json(change.body())).await?;
        decode::<ItemResponse<T>>(response).await.map(|r| r.item)
    }
}
