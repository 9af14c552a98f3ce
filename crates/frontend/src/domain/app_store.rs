//! Application-wide registry of entity stores
//!
//! Built once at start-up and provided through context. Each entity type is
//! wired to its REST resource by a [`Resource`] impl generated below.

use std::sync::Arc;

use contracts::domain::*;
use leptos::prelude::*;

use crate::shared::entity_page::{EntityListPage, TableColumns};
use crate::shared::entity_store::{EntityConfig, EntityStore, RestService};

/// Entity type with a REST resource and a slot in [`AppStore`]
pub trait Resource: TableColumns {
    const CONFIG: EntityConfig;

    fn select(store: &AppStore) -> &EntityStore<Self>;
}

macro_rules! app_store {
    (
        $(
            $field:ident: $ty:ty => {
                key: $key:literal,
                label: $label:literal,
                path: $path:literal,
                file_field: $file_field:expr,
                includes: [$($include:literal),* $(,)?] $(,)?
            }
        ),+ $(,)?
    ) => {
        #[derive(Clone)]
        pub struct AppStore {
            $(pub $field: EntityStore<$ty>,)+
        }

        impl AppStore {
            /// One REST-backed store per entity, all against `base`
            pub fn new(base: &str) -> Self {
                Self {
                    $(
                        $field: EntityStore::new(
                            $key,
                            Arc::new(RestService::<$ty>::new(<$ty as Resource>::CONFIG, base)),
                        ),
                    )+
                }
            }

            pub fn cancel_all(&self) {
                $(self.$field.cancel_all();)+
            }

            /// Empty every container; used on logout
            pub fn reset_all(&self) {
                $(self.$field.reset();)+
            }
        }

        $(
            impl Resource for $ty {
                const CONFIG: EntityConfig = EntityConfig {
                    key: $key,
                    label: $label,
                    path: $path,
                    file_field: $file_field,
                    includes: &[$($include),*],
                };

                fn select(store: &AppStore) -> &EntityStore<Self> {
                    &store.$field
                }
            }
        )+

        pub const ALL_CONFIGS: &[EntityConfig] = &[$(<$ty as Resource>::CONFIG),+];

        /// Tab content for an entity key
        pub fn render_screen(store: &AppStore, key: &str) -> Option<AnyView> {
            match key {
                $($key => Some(screen::<$ty>(store)),)+
                _ => None,
            }
        }
    };
}

fn screen<R: Resource>(store: &AppStore) -> AnyView {
    let store = R::select(store).clone();
    view! { <EntityListPage store=store config=R::CONFIG /> }.into_any()
}

pub fn config_for(key: &str) -> Option<&'static EntityConfig> {
    ALL_CONFIGS.iter().find(|config| config.key == key)
}

app_store! {
    guards: Guard => {
        key: "guards",
        label: "Guards",
        path: "/api/guards",
        file_field: None,
        includes: ["guard_type"],
    },
    guard_types: GuardType => {
        key: "guard_types",
        label: "Guard types",
        path: "/api/guard-types",
        file_field: None,
        includes: [],
    },
    clients: Client => {
        key: "clients",
        label: "Clients",
        path: "/api/clients",
        file_field: None,
        includes: [],
    },
    sites: Site => {
        key: "sites",
        label: "Sites",
        path: "/api/sites",
        file_field: None,
        includes: ["client"],
    },
    site_locations: SiteLocation => {
        key: "site_locations",
        label: "Site locations",
        path: "/api/site-locations",
        file_field: None,
        includes: ["site"],
    },
    duty_time_types: DutyTimeType => {
        key: "duty_time_types",
        label: "Duty time types",
        path: "/api/duty-time-types",
        file_field: None,
        includes: [],
    },
    duties: Duty => {
        key: "duties",
        label: "Duties",
        path: "/api/duties",
        file_field: None,
        includes: ["site", "duty_time_type"],
    },
    guard_assignments: GuardAssignment => {
        key: "guard_assignments",
        label: "Guard assignments",
        path: "/api/guard-assignments",
        file_field: None,
        includes: ["guard", "duty"],
    },
    duty_attendances: DutyAttendance => {
        key: "duty_attendances",
        label: "Attendance",
        path: "/api/duty-attendances",
        file_field: None,
        includes: ["guard", "duty"],
    },
    duty_status_reports: DutyStatusReport => {
        key: "duty_status_reports",
        label: "Status reports",
        path: "/api/duty-status-reports",
        file_field: Some("image"),
        includes: ["guard", "duty"],
    },
    leaves: Leave => {
        key: "leaves",
        label: "Leaves",
        path: "/api/leaves",
        file_field: None,
        includes: ["guard"],
    },
    expense_categories: ExpenseCategory => {
        key: "expense_categories",
        label: "Expense categories",
        path: "/api/expense-categories",
        file_field: None,
        includes: [],
    },
    expenses: Expense => {
        key: "expenses",
        label: "Expenses",
        path: "/api/expenses",
        file_field: Some("receipt"),
        includes: ["expense_category"],
    },
    expense_reviews: ExpenseReview => {
        key: "expense_reviews",
        label: "Expense reviews",
        path: "/api/expense-reviews",
        file_field: None,
        includes: ["expense"],
    },
    incidents: Incident => {
        key: "incidents",
        label: "Incidents",
        path: "/api/incidents",
        file_field: Some("attachment"),
        includes: ["site", "guard"],
    },
    complainants: Complainant => {
        key: "complainants",
        label: "Complainants",
        path: "/api/complainants",
        file_field: None,
        includes: [],
    },
    complaints: Complaint => {
        key: "complaints",
        label: "Complaints",
        path: "/api/complaints",
        file_field: None,
        includes: ["complainant"],
    },
    contacts: Contact => {
        key: "contacts",
        label: "Contacts",
        path: "/api/contacts",
        file_field: None,
        includes: ["contactable"],
    },
    notes: Note => {
        key: "notes",
        label: "Notes",
        path: "/api/notes",
        file_field: None,
        includes: ["guard"],
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = ALL_CONFIGS.iter().map(|c| c.key).collect();
        assert_eq!(keys.len(), ALL_CONFIGS.len());
        assert_eq!(ALL_CONFIGS.len(), 19);
    }

    #[test]
    fn test_file_bearing_resources_are_multipart() {
        let multipart: Vec<_> = ALL_CONFIGS
            .iter()
            .filter(|c| c.is_multipart())
            .map(|c| c.key)
            .collect();
        assert_eq!(multipart, vec!["duty_status_reports", "expenses", "incidents"]);
    }

    #[test]
    fn test_config_lookup() {
        assert_eq!(config_for("guards").map(|c| c.path), Some("/api/guards"));
        assert_eq!(<Guard as Resource>::CONFIG.includes, &["guard_type"]);
        assert!(config_for("unknown").is_none());
    }

    #[test]
    fn test_store_keys_follow_configs() {
        let store = AppStore::new("http://localhost:3000");
        assert_eq!(store.guards.key(), "guards");
        assert_eq!(Client::select(&store).key(), "clients");
        assert_eq!(store.notes.in_flight(), 0);
    }
}
