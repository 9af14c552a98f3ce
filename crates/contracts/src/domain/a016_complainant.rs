use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Person who lodged one or more complaints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complainant {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
