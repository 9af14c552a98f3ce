use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::join_url;
use crate::shared::error::ApiError;
use crate::shared::http::{decode, ensure_success};

/// Login with email and password
pub async fn login(base: &str, email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };

    let response = Request::post(&join_url(base, "/api/login"))
        .header("Accept", "application/json")
        .json(&request)?
        .send()
        .await?;

    decode(response).await
}

/// Fetch the user owning `token`; used to validate a restored session
pub async fn get_current_user(base: &str, token: &str) -> Result<UserInfo, ApiError> {
    let response = Request::get(&join_url(base, "/api/me"))
        .header("Authorization", &format!("Bearer {}", token))
        .header("Accept", "application/json")
        .send()
        .await?;

    decode(response).await
}

/// Logout (revoke the token server side)
pub async fn logout(base: &str, token: &str) -> Result<(), ApiError> {
    let response = Request::post(&join_url(base, "/api/logout"))
        .header("Authorization", &format!("Bearer {}", token))
        .header("Accept", "application/json")
        .send()
        .await?;

    ensure_success(response).await?;
    Ok(())
}
