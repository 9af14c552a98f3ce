use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::common::EntityId;

/// Server pagination metadata, mirrored verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            total: 0,
            per_page: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// List request descriptor
///
/// Pure request shaping: nothing here is validated client side, the server
/// decides what is legal. `include` holds relation names that are sent as
/// `include_<name>=true` flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    // Foreign-key scopes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guard_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duty_id: Option<EntityId>,

    #[serde(skip)]
    pub include: BTreeSet<String>,
}

impl ListParams {
    pub fn page(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            ..Self::default()
        }
    }

    /// Set the search text; blank input clears it
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.trim().is_empty() {
            None
        } else {
            Some(search.trim().to_string())
        };
        self
    }

    pub fn with_sort(mut self, sort_by: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_order = Some(order);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn including(mut self, relation: impl Into<String>) -> Self {
        self.include.insert(relation.into());
        self
    }
}

/// `GET` list envelope: `{ items, data }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub data: PageInfo,
}

/// Single record envelope: `{ item }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse<T> {
    pub item: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_info_without_per_page() {
        let info: PageInfo =
            serde_json::from_str(r#"{"current_page":2,"last_page":5,"total":48}"#).unwrap();
        assert_eq!(info.current_page, 2);
        assert_eq!(info.last_page, 5);
        assert_eq!(info.total, 48);
        assert_eq!(info.per_page, None);
    }

    #[test]
    fn test_default_page_info() {
        let info = PageInfo::default();
        assert_eq!((info.current_page, info.last_page, info.total), (1, 1, 0));
    }

    #[test]
    fn test_blank_search_is_dropped() {
        let params = ListParams::page(1, 10).with_search("   ");
        assert_eq!(params.search, None);
        let params = ListParams::page(1, 10).with_search(" ali ");
        assert_eq!(params.search.as_deref(), Some("ali"));
    }

    #[test]
    fn test_list_response_shape() {
        let response: ListResponse<serde_json::Value> = serde_json::from_str(
            r#"{"items":[{"id":1}],"data":{"current_page":1,"last_page":1,"total":1,"per_page":10}}"#,
        )
        .unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.data.per_page, Some(10));
    }
}
