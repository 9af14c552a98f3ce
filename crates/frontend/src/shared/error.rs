use contracts::shared::error_body::ErrorBody;
use std::collections::BTreeMap;
use thiserror::Error;

/// Failure of a backend call
///
/// The `Display` text is what ends up in an entity container's `error` field,
/// so server-provided messages are shown verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("{message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("Not authenticated")]
    NotAuthenticated,
}

impl ApiError {
    /// Build an error from a non-2xx status and the raw response body
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed.message.filter(|m| !m.trim().is_empty());

        match status {
            401 | 403 => ApiError::Unauthorized(message.unwrap_or_else(|| "Unauthorized".to_string())),
            404 => ApiError::NotFound(message.unwrap_or_else(|| "Not found".to_string())),
            422 => ApiError::Validation {
                message: message.unwrap_or_else(|| "Validation failed".to_string()),
                fields: parsed.errors,
            },
            _ => ApiError::Server {
                status,
                message: message
                    .unwrap_or_else(|| format!("Request failed with status {}", status)),
            },
        }
    }

    /// Field-level messages for form display; `None` for non-validation errors
    pub fn field_errors(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        match self {
            ApiError::Validation { fields, .. } => Some(fields),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_) | ApiError::NotAuthenticated)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Encode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = ApiError::from_response(
            422,
            r#"{"message":"Validation failed","errors":{"email":["The email has already been taken."]}}"#,
        );
        assert_eq!(err.to_string(), "Validation failed");
        let fields = err.field_errors().unwrap();
        assert_eq!(fields["email"], vec!["The email has already been taken."]);
    }

    #[test]
    fn test_not_found_without_body() {
        let err = ApiError::from_response(404, "");
        assert_eq!(err, ApiError::NotFound("Not found".to_string()));
    }

    #[test]
    fn test_unknown_status_uses_generic_message() {
        let err = ApiError::from_response(500, "<html>oops</html>");
        assert_eq!(err.to_string(), "Request failed with status 500");
        assert!(err.field_errors().is_none());
    }

    #[test]
    fn test_unauthorized() {
        let err = ApiError::from_response(401, r#"{"message":"Unauthenticated."}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Unauthenticated.");
    }
}
