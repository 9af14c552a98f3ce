use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}
