use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::api_base;
use crate::shared::config::AppConfig;
use crate::shared::error::ApiError;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

fn config_base() -> String {
    let config = use_context::<AppConfig>().unwrap_or_default();
    api_base(&config.api)
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Optimistically trust a stored token; it is validated right after mount
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: storage::get_access_token(),
        user_info: None,
    });
    let base = config_base();

    Effect::new(move |_| {
        let base = base.clone();
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };
            match api::get_current_user(&base, &access_token).await {
                Ok(user_info) => {
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                    });
                }
                Err(e) if e.is_unauthorized() => {
                    log::info!("Stored session rejected: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
                // Keep the session on transport errors; the next call will tell
                Err(e) => log::warn!("Could not validate session: {}", e),
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login and publish the new session
pub async fn do_login(
    base: String,
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = api::login(&base, email, password).await?;

    storage::save_access_token(&response.token);
    set_auth_state.set(AuthState {
        access_token: Some(response.token),
        user_info: Some(response.user),
    });

    Ok(())
}

/// Helper: Perform logout
///
/// The local session is dropped even if the server call fails.
pub async fn do_logout(base: String, set_auth_state: WriteSignal<AuthState>) {
    if let Some(token) = storage::get_access_token() {
        if let Err(e) = api::logout(&base, &token).await {
            log::warn!("Logout request failed: {}", e);
        }
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
