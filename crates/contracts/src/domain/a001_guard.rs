use serde::{Deserialize, Serialize};

use super::a002_guard_type::GuardType;
use crate::domain::common::EntityId;

/// Security guard on the workforce roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guard {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cnic: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub guard_type_id: Option<EntityId>,
    /// Present when listed with `include_guard_type`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard_type: Option<GuardType>,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardDto {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cnic: Option<String>,
    pub address: Option<String>,
    pub guard_type_id: Option<EntityId>,
    pub is_active: bool,
}
