use contracts::shared::pagination::ListParams;
use leptos::prelude::*;
use thaw::*;

use super::{EditorTarget, EntityDetails, EntityEditor, TableColumns};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::config::AppConfig;
use crate::shared::entity_store::{EntityConfig, EntityStore};
use crate::shared::icons::icon;
use crate::shared::list_utils::SortState;

fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

/// Paginated, searchable, sortable list of one entity type
///
/// Reloads whenever page, page size, search text or sort change. Requests
/// still running when the page is closed are cancelled.
#[component]
pub fn EntityListPage<T: TableColumns>(store: EntityStore<T>, config: EntityConfig) -> impl IntoView {
    let list_config = use_context::<AppConfig>().unwrap_or_default().list;
    let page_size_options = list_config.page_size_options.clone();

    let state = store.state();
    let store = StoredValue::new(store);

    let page = RwSignal::new(1u32);
    let per_page = RwSignal::new(list_config.per_page);
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(SortState::default());
    let reload = RwSignal::new(0u32);
    let editing = RwSignal::new(None::<EditorTarget<T>>);

    Effect::new(move |_| {
        reload.track();
        let mut params = ListParams::page(page.get(), per_page.get()).with_search(search.get());
        let sort_state = sort.get();
        if let Some(field) = sort_state.field {
            params = params.with_sort(field, sort_state.order);
        }
        store.with_value(|s| {
            s.fetch_list(params).spawn();
        });
    });

    on_cleanup(move || store.with_value(|s| s.cancel_all()));

    let on_search = Callback::new(move |text: String| {
        search.set(text);
        page.set(1);
    });

    let toggle_sort = move |field: &'static str| {
        move |_| {
            sort.update(|s| *s = s.toggled(field));
            page.set(1);
        }
    };

    let row = move |item: T| {
        let id = item.id();
        let title = item.title();
        let for_open = item.clone();
        let for_edit = item.clone();

        view! {
            <TableRow>
                {T::columns().iter().enumerate().map(|(index, column)| {
                    let text = item.cell(column.key);
                    if index == 0 {
                        let for_open = for_open.clone();
                        view! {
                            <TableCell>
                                <TableCellLayout truncate=true>
                                    <span
                                        class="table__link"
                                        on:click=move |_| store.with_value(|s| T::open(s, &for_open))
                                    >
                                        {text}
                                    </span>
                                </TableCellLayout>
                            </TableCell>
                        }.into_any()
                    } else {
                        view! {
                            <TableCell>
                                <TableCellLayout truncate=true>{text}</TableCellLayout>
                            </TableCell>
                        }.into_any()
                    }
                }).collect_view()}
                <TableCell>
                    <div class="table__actions">
                        {item.status_buttons().into_iter().map(|button| {
                            let change = button.change.clone();
                            view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| {
                                        let change = change.clone();
                                        store.with_value(|s| {
                                            s.change_status(id, change).spawn();
                                        });
                                    }
                                >
                                    {button.label}
                                </Button>
                            }
                        }).collect_view()}
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| editing.set(Some(EditorTarget::Existing(for_edit.clone())))
                        >
                            "Edit"
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                if confirm(&format!("Delete \"{}\"?", title)) {
                                    store.with_value(|s| {
                                        s.delete(id).spawn();
                                    });
                                }
                            }
                        >
                            "Delete"
                        </Button>
                    </div>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{config.label}</h1>
                    <Badge>{move || state.with(|s| s.pagination.total).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(EditorTarget::New))
                    >
                        {icon("plus")}
                        " New"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload.update(|n| *n += 1)
                        disabled=Signal::derive(move || state.with(|s| s.is_loading))
                    >
                        {icon("refresh")}
                        {move || if state.with(|s| s.is_loading) { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || state.with(|s| s.error.clone()).map(|e| view! {
                    <div class="alert alert--error">
                        {icon("alert-triangle")}
                        <span>{e}</span>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| store.with_value(|s| s.clear_error())
                        >
                            {icon("x")}
                        </Button>
                    </div>
                })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <SearchInput on_change=on_search />
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                page_info=Signal::derive(move || state.with(|s| s.pagination.clone()))
                                page_size=per_page
                                on_page_change=Callback::new(move |p| page.set(p))
                                on_page_size_change=Callback::new(move |size| {
                                    per_page.set(size);
                                    page.set(1);
                                })
                                page_size_options=page_size_options
                            />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {T::columns().iter().map(|column| {
                                    let key = column.key;
                                    if column.sortable {
                                        view! {
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" on:click=toggle_sort(key)>
                                                    {column.label}
                                                    <span>{move || sort.with(|s| s.indicator(key))}</span>
                                                </div>
                                            </TableHeaderCell>
                                        }.into_any()
                                    } else {
                                        view! { <TableHeaderCell>{column.label}</TableHeaderCell> }.into_any()
                                    }
                                }).collect_view()}
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || state.with(|s| s.items.clone()).into_iter().map(row).collect_view()}
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.items.is_empty() && !s.is_loading)>
                        <div class="table__empty">"Nothing found"</div>
                    </Show>
                </div>

                <EntityDetails store=store.get_value() />
            </div>

            {move || editing.get().map(|target| view! {
                <EntityEditor
                    store=store.get_value()
                    config=config
                    target=target
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </div>
    }
}
