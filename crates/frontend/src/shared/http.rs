//! Thin helpers over `gloo-net` shared by every REST service

use gloo_net::http::{RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::JsValue;

use crate::shared::error::ApiError;
use crate::system::auth::storage;

/// Request body for create / update calls
///
/// File-bearing entities (receipts, incident attachments, report photos)
/// are sent as multipart forms, everything else as JSON.
#[derive(Debug, Clone)]
pub enum Payload {
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

#[derive(Debug, Clone)]
pub struct FormPart {
    pub name: String,
    pub value: FormValue,
}

#[derive(Debug, Clone)]
pub enum FormValue {
    Text(String),
    File(web_sys::File),
}

impl Payload {
    /// Serialize a DTO into a JSON payload
    pub fn json<T: Serialize>(dto: &T) -> Result<Self, ApiError> {
        Ok(Payload::Json(serde_json::to_value(dto)?))
    }

    /// Flatten a DTO into text form parts, then attach files
    ///
    /// Nested values are sent as their JSON text; `null` fields are skipped.
    pub fn multipart<T: Serialize>(dto: &T, files: Vec<(String, web_sys::File)>) -> Result<Self, ApiError> {
        let mut parts = text_parts(&serde_json::to_value(dto)?)?;
        parts.extend(files.into_iter().map(|(name, file)| FormPart {
            name,
            value: FormValue::File(file),
        }));
        Ok(Payload::Multipart(parts))
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Payload::Multipart(_))
    }
}

fn text_parts(value: &serde_json::Value) -> Result<Vec<FormPart>, ApiError> {
    let object = value
        .as_object()
        .ok_or_else(|| ApiError::Encode("multipart payload must be an object".to_string()))?;

    Ok(object
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(name, v)| FormPart {
            name: name.clone(),
            value: FormValue::Text(match v {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Bool(b) => if *b { "1".to_string() } else { "0".to_string() },
                other => other.to_string(),
            }),
        })
        .collect())
}

fn get_auth_header() -> Result<String, ApiError> {
    storage::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or(ApiError::NotAuthenticated)
}

/// Attach the bearer token and JSON accept header
pub fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    Ok(builder
        .header("Authorization", &get_auth_header()?)
        .header("Accept", "application/json"))
}

/// Attach a payload and send the request
pub async fn send_with(builder: RequestBuilder, payload: Payload) -> Result<Response, ApiError> {
    let request = match payload {
        Payload::Json(value) => builder.json(&value)?,
        Payload::Multipart(parts) => builder.body(form_data(parts)?)?,
    };
    Ok(request.send().await?)
}

fn form_data(parts: Vec<FormPart>) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    for part in parts {
        let appended = match part.value {
            FormValue::Text(text) => form.append_with_str(&part.name, &text),
            FormValue::File(file) => form.append_with_blob(&part.name, &file),
        };
        appended.map_err(js_error)?;
    }
    Ok(form)
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Encode(format!("{:?}", value))
}

/// Turn a non-2xx response into an [`ApiError`] carrying the server message
pub async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

/// Check the status and decode the JSON body
pub async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_success(response).await?;
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(parts: &[FormPart], name: &str) -> Option<String> {
        parts.iter().find(|p| p.name == name).and_then(|p| match &p.value {
            FormValue::Text(t) => Some(t.clone()),
            FormValue::File(_) => None,
        })
    }

    #[test]
    fn test_multipart_flattens_fields() {
        let dto = serde_json::json!({
            "title": "Broken gate",
            "site_id": 3,
            "guard_id": null,
            "urgent": true
        });
        let Payload::Multipart(parts) = Payload::multipart(&dto, Vec::new()).unwrap() else {
            panic!("expected multipart");
        };
        assert_eq!(text_of(&parts, "title").as_deref(), Some("Broken gate"));
        assert_eq!(text_of(&parts, "site_id").as_deref(), Some("3"));
        assert_eq!(text_of(&parts, "urgent").as_deref(), Some("1"));
        assert!(text_of(&parts, "guard_id").is_none());
    }

    #[test]
    fn test_multipart_requires_object() {
        let result = Payload::multipart(&vec![1, 2, 3], Vec::new());
        assert!(matches!(result, Err(ApiError::Encode(_))));
    }

    #[test]
    fn test_json_payload() {
        let payload = Payload::json(&serde_json::json!({ "name": "North gate" })).unwrap();
        assert!(!payload.is_multipart());
    }
}
