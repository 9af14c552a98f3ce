use contracts::shared::pagination::PageInfo;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Pager over the backend's 1-based page metadata
#[component]
pub fn PaginationControls(
    #[prop(into)] page_info: Signal<PageInfo>,

    /// Page size currently requested
    #[prop(into)]
    page_size: Signal<u32>,

    /// Called with the 1-based page to load
    on_page_change: Callback<u32>,

    on_page_size_change: Callback<u32>,

    page_size_options: Vec<u32>,
) -> impl IntoView {
    let current = move || page_info.get().current_page.max(1);
    let last = move || page_info.get().last_page.max(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || current() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if current() > 1 {
                        on_page_change.run(current() - 1);
                    }
                }
                disabled=move || current() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {} ({})", current(), last(), page_info.get().total)}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if current() < last() {
                        on_page_change.run(current() + 1);
                    }
                }
                disabled=move || current() >= last()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last())
                disabled=move || current() >= last()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
