use crate::shared::storage;

const ACCESS_TOKEN_KEY: &str = "auth_token";

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    storage::set_item(ACCESS_TOKEN_KEY, token);
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    storage::get_item(ACCESS_TOKEN_KEY).filter(|token| !token.is_empty())
}

/// Clear the stored token
pub fn clear_tokens() {
    storage::remove_item(ACCESS_TOKEN_KEY);
}
