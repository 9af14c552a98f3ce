use std::collections::BTreeMap;

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::TableColumns;
use crate::shared::entity_store::{ActionError, EntityConfig, EntityStore};
use crate::shared::error::ApiError;
use crate::shared::http::Payload;
use crate::shared::icons::icon;

/// What the editor dialog is saving
#[derive(Debug, Clone, PartialEq)]
pub enum EditorTarget<T> {
    New,
    Existing(T),
}

/// Record as editable JSON text; the id travels in the URL, not the body
pub fn editable_json<T: TableColumns>(target: &EditorTarget<T>) -> String {
    let mut value = match target {
        EditorTarget::New => T::template(),
        EditorTarget::Existing(item) => serde_json::to_value(item).unwrap_or_else(|_| T::template()),
    };
    if let Some(object) = value.as_object_mut() {
        object.remove("id");
    }
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

/// Parse the edited text; only JSON objects are accepted
pub fn parse_body(text: &str) -> Result<serde_json::Value, String> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| format!("Invalid JSON: {}", e))?;
    if value.is_object() {
        Ok(value)
    } else {
        Err("The record must be a JSON object".to_string())
    }
}

fn selected_file(input: &NodeRef<html::Input>) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.get(0)
}

/// Create / update dialog
///
/// Malformed input is reported here and never dispatched. Server validation
/// errors are listed per field; the store's error banner shows the message.
#[component]
pub fn EntityEditor<T: TableColumns>(
    store: EntityStore<T>,
    config: EntityConfig,
    target: EditorTarget<T>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let title = match &target {
        EditorTarget::New => format!("New: {}", config.label),
        EditorTarget::Existing(item) => format!("Edit: {}", item.title()),
    };
    let editing_id = match &target {
        EditorTarget::New => None,
        EditorTarget::Existing(item) => Some(item.id()),
    };

    let text = RwSignal::new(editable_json(&target));
    let local_error = RwSignal::new(None::<String>);
    let field_errors = RwSignal::new(BTreeMap::<String, Vec<String>>::new());
    let saving = RwSignal::new(false);
    let file_input: NodeRef<html::Input> = NodeRef::new();
    let store = StoredValue::new(store);

    let on_save = move |_| {
        local_error.set(None);
        field_errors.set(BTreeMap::new());

        let body = match parse_body(&text.get_untracked()) {
            Ok(body) => body,
            Err(message) => {
                local_error.set(Some(message));
                return;
            }
        };

        let payload = match config.file_field {
            Some(field) => {
                let files = selected_file(&file_input)
                    .map(|file| vec![(field.to_string(), file)])
                    .unwrap_or_default();
                Payload::multipart(&body, files)
            }
            None => Payload::json(&body),
        };
        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => {
                local_error.set(Some(e.to_string()));
                return;
            }
        };

        let dispatch = store.with_value(|store| match editing_id {
            Some(id) => store.update(id, payload),
            None => store.create(payload),
        });

        saving.set(true);
        spawn_local(async move {
            match dispatch.await {
                Ok(_) => on_close.run(()),
                Err(ActionError::Rejected(e)) => {
                    if let ApiError::Validation { fields, .. } = e {
                        field_errors.set(fields);
                    }
                    saving.set(false);
                }
                Err(ActionError::Cancelled) => saving.set(false),
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || local_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <Show when=move || !field_errors.with(|f| f.is_empty())>
                        <ul class="form__errors">
                            {move || field_errors.get().into_iter().map(|(field, messages)| {
                                view! { <li><b>{field}</b>": "{messages.join(", ")}</li> }
                            }).collect_view()}
                        </ul>
                    </Show>

                    <div class="form__group">
                        <textarea
                            class="form__json"
                            rows="18"
                            prop:value=move || text.get()
                            on:input=move |ev| text.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        ></textarea>
                    </div>

                    {config.file_field.map(|field| view! {
                        <div class="form__group">
                            <Label>{field}</Label>
                            <input type="file" node_ref=file_input disabled=move || saving.get() />
                        </div>
                    })}
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_rejects_non_objects() {
        assert!(parse_body(r#"{"name":"Ali"}"#).is_ok());
        assert_eq!(
            parse_body("[1, 2]").unwrap_err(),
            "The record must be a JSON object"
        );
        assert!(parse_body("{name").unwrap_err().starts_with("Invalid JSON"));
    }
}
