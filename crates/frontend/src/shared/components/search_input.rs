use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::icons::icon;

const DEBOUNCE_MS: u32 = 300;

/// Search box that reports its value once typing pauses
///
/// Clearing with the button reports immediately.
#[component]
pub fn SearchInput(
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search...".to_string());
    let (input_value, set_input_value) = signal(String::new());

    // Replacing the stored timeout drops the previous one, which cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |text: String| {
        set_input_value.set(text.clone());
        let timeout = Timeout::new(DEBOUNCE_MS, move || on_change.run(text));
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !input_value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
