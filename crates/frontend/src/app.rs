use leptos::prelude::*;

use crate::app_shell::AppShell;
use crate::domain::AppStore;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::api_base;
use crate::shared::config::load_config;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let base = api_base(&config.api);
    log::info!("API base: {}", base);

    provide_context(config);
    provide_context(AppStore::new(&base));
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
