use leptos::prelude::*;
use thaw::*;

use super::TableColumns;
use crate::shared::entity_store::EntityStore;
use crate::shared::icons::icon;

/// Side panel for the store's `current` record
#[component]
pub fn EntityDetails<T: TableColumns>(store: EntityStore<T>) -> impl IntoView {
    let state = store.state();
    let store = StoredValue::new(store);

    view! {
        {move || state.with(|s| s.current.clone()).map(|item| {
            let title = item.title();
            view! {
                <div class="details-panel">
                    <div class="details-panel__header">
                        <h3 class="details-panel__title">{title}</h3>
                        <Show when=move || state.with(|s| s.is_loading)>
                            <span class="details-panel__hint">"Refreshing..."</span>
                        </Show>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| store.with_value(|s| s.set_current(None))
                        >
                            {icon("x")}
                        </Button>
                    </div>
                    <dl class="details-panel__fields">
                        {T::columns().iter().map(|column| view! {
                            <dt>{column.label}</dt>
                            <dd>{item.cell(column.key)}</dd>
                        }).collect_view()}
                    </dl>
                </div>
            }
        })}
    }
}
