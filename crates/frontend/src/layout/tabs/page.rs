use leptos::prelude::*;

use crate::domain::{render_screen, AppStore};
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};

/// Mounted content of one tab
///
/// Inactive tabs stay mounted and are only hidden, so their lists survive
/// switching. Closing the tab unmounts the screen, which cancels its requests.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let app_store = use_context::<AppStore>().expect("AppStore context not found");

    let key = tab.key.clone();
    let is_active = move || tabs_store.active.get().as_deref() == Some(key.as_str());

    let content = render_screen(&app_store, &tab.key).unwrap_or_else(|| {
        log::warn!("no screen registered for tab '{}'", tab.key);
        view! { <div class="alert alert--error">"Unknown screen: "{tab.key.clone()}</div> }.into_any()
    });

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab.key.clone()
        >
            {content}
        </div>
    }
}
