use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Error body returned by the backend on non-2xx responses
///
/// Example: `{ "message": "Validation failed", "errors": { "email": ["taken"] } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ErrorBody {
    /// First message reported for a field, if any
    pub fn first_error(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }
}
