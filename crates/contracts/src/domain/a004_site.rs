use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Guarded premises belonging to a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: EntityId,
    pub client_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub required_guards: u32,
    #[serde(default)]
    pub client_name: Option<String>,
}
