//! Auth gate: the login page until a session exists, then the main shell

use leptos::prelude::*;

use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireAuth fallback=|| view! { <LoginPage /> }>
            <Shell />
        </RequireAuth>
    }
}
