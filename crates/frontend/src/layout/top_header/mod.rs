//! Top navigation bar: sidebar toggle, title, signed-in user and logout

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::AppStore;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::api_base;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let app_store = use_context::<AppStore>().expect("AppStore context not found");
    let config = use_context::<AppConfig>().unwrap_or_default();
    let (auth_state, set_auth_state) = use_auth();

    let base = StoredValue::new(api_base(&config.api));
    let app_store = StoredValue::new(app_store);

    // Nothing from the old session may land in the containers after logout
    let logout = move |_| {
        app_store.with_value(|store| {
            store.cancel_all();
            store.reset_all();
        });
        ctx.close_all();
        let base = base.get_value();
        spawn_local(async move {
            do_logout(base, set_auth_state).await;
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide menu" } else { "Show menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Guard Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("users")}
                    <span>
                        {move || auth_state.get().user_info
                            .map(|u| u.name)
                            .unwrap_or_default()}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
