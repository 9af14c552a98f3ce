use contracts::shared::pagination::ListParams;

use crate::shared::error::ApiError;

/// Encode list parameters as a query string (without the leading `?`)
///
/// Unset options are omitted; each relation in `include` becomes an
/// `include_<name>=true` flag.
pub fn to_query_string(params: &ListParams) -> Result<String, ApiError> {
    let mut query = serde_qs::to_string(params).map_err(|e| ApiError::Encode(e.to_string()))?;

    for relation in &params.include {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str("include_");
        query.push_str(relation);
        query.push_str("=true");
    }

    Ok(query)
}
