use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires authentication
/// Shows `fallback` (the login page) if not authenticated
#[component]
pub fn RequireAuth(
    #[prop(into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=fallback
        >
            {children()}
        </Show>
    }
}
