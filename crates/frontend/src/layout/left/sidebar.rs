//! Sidebar with collapsible menu groups

use leptos::prelude::*;

use crate::domain::config_for;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// Entity keys, see [`crate::domain::ALL_CONFIGS`]
    items: &'static [&'static str],
}

const MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        id: "workforce",
        label: "Workforce",
        icon: "shield",
        items: &["guards", "guard_types", "leaves", "guard_assignments", "notes"],
    },
    MenuGroup {
        id: "operations",
        label: "Operations",
        icon: "calendar",
        items: &[
            "duties",
            "duty_attendances",
            "duty_status_reports",
            "duty_time_types",
            "incidents",
            "complaints",
            "complainants",
        ],
    },
    MenuGroup {
        id: "clients",
        label: "Clients",
        icon: "building",
        items: &["clients", "sites", "site_locations", "contacts"],
    },
    MenuGroup {
        id: "finance",
        label: "Finance",
        icon: "wallet",
        items: &["expenses", "expense_categories", "expense_reviews"],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded_groups = RwSignal::new(vec!["workforce"]);

    view! {
        <div class="app-sidebar__content">
            {MENU_GROUPS.iter().map(|group| {
                let group_id = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {group.items.iter().filter_map(|key| config_for(key)).map(|config| {
                                    let key = config.key;
                                    let label = config.label;
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ALL_CONFIGS;

    #[test]
    fn test_every_entity_is_in_exactly_one_group() {
        let mut keys: Vec<&str> = MENU_GROUPS.iter().flat_map(|g| g.items.iter().copied()).collect();
        keys.sort_unstable();
        let mut expected: Vec<&str> = ALL_CONFIGS.iter().map(|c| c.key).collect();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }
}
