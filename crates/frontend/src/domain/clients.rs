use contracts::domain::common::EntityId;
use contracts::domain::{Client, Contact, Site, SiteLocation};
use leptos::task::spawn_local;
use serde_json::json;

use crate::shared::entity_page::{or_dash, Column, StatusButton, TableColumns};
use crate::shared::entity_store::{ActionError, EntityStore};
use crate::shared::storage::{cache_entity, cached_entity};

/// Local storage prefix of the client detail cache (`client_{id}`)
pub const CLIENT_CACHE: &str = "client";

fn coordinates(latitude: Option<f64>, longitude: Option<f64>) -> String {
    match (latitude, longitude) {
        (Some(lat), Some(lng)) => format!("{:.5}, {:.5}", lat, lng),
        _ => "-".to_string(),
    }
}

impl TableColumns for Client {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::sortable("name", "Name"),
            Column::plain("contact_person", "Contact person"),
            Column::plain("phone", "Phone"),
            Column::plain("sites_count", "Sites"),
            Column::sortable("is_active", "Status"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "contact_person" => or_dash(&self.contact_person),
            "phone" => or_dash(&self.phone),
            "sites_count" => or_dash(&self.sites_count),
            "is_active" => if self.is_active { "Active" } else { "Inactive" }.to_string(),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn template() -> serde_json::Value {
        json!({
            "name": "",
            "email": null,
            "phone": null,
            "address": null,
            "contact_person": null,
            "is_active": true,
        })
    }

    fn status_buttons(&self) -> Vec<StatusButton> {
        vec![StatusButton::toggle("is_active", self.is_active)]
    }

    /// Successful detail fetches are cached; a failed one falls back to the cache
    fn open(store: &EntityStore<Self>, item: &Self) {
        let id = item.id;
        store.set_current(Some(item.clone()));

        let dispatch = store.fetch_one(id);
        let store = store.clone();
        spawn_local(async move {
            match dispatch.await {
                Ok(client) => cache_entity(CLIENT_CACHE, id, &client),
                Err(ActionError::Rejected(_)) => {
                    let current = store.snapshot().current;
                    let cached = cached_entity::<Client>(CLIENT_CACHE, id);
                    if let Some(cached) = cache_fallback(current.as_ref(), id, cached) {
                        log::debug!("client {} shown from cache", id);
                        store.set_current(Some(cached));
                    }
                }
                Err(ActionError::Cancelled) => {}
            }
        });
    }
}

/// Cached client to show after the detail fetch of `id` failed
///
/// Only applies while nothing else has been focused since `id` was opened.
fn cache_fallback(current: Option<&Client>, id: EntityId, cached: Option<Client>) -> Option<Client> {
    match current {
        Some(focused) if focused.id != id => None,
        _ => cached,
    }
}

impl TableColumns for Site {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::sortable("name", "Name"),
            Column::plain("client", "Client"),
            Column::plain("address", "Address"),
            Column::sortable("required_guards", "Guards required"),
            Column::plain("coordinates", "Coordinates"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "client" => self
                .client_name
                .clone()
                .unwrap_or_else(|| format!("#{}", self.client_id)),
            "address" => or_dash(&self.address),
            "required_guards" => self.required_guards.to_string(),
            "coordinates" => coordinates(self.latitude, self.longitude),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn template() -> serde_json::Value {
        json!({
            "client_id": null,
            "name": "",
            "address": null,
            "latitude": null,
            "longitude": null,
            "required_guards": 1,
        })
    }
}

impl TableColumns for SiteLocation {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::sortable("name", "Name"),
            Column::plain("site_id", "Site"),
            Column::plain("description", "Description"),
            Column::plain("coordinates", "Coordinates"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "site_id" => format!("#{}", self.site_id),
            "description" => or_dash(&self.description),
            "coordinates" => coordinates(self.latitude, self.longitude),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn template() -> serde_json::Value {
        json!({
            "site_id": null,
            "name": "",
            "description": null,
            "latitude": null,
            "longitude": null,
        })
    }
}

impl TableColumns for Contact {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::sortable("name", "Name"),
            Column::plain("designation", "Designation"),
            Column::plain("phone", "Phone"),
            Column::plain("email", "Email"),
            Column::plain("owner", "Belongs to"),
        ];
        COLUMNS
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "designation" => or_dash(&self.designation),
            "phone" => or_dash(&self.phone),
            "email" => or_dash(&self.email),
            "owner" => self.owner.to_string(),
            _ => String::new(),
        }
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn template() -> serde_json::Value {
        json!({
            "name": "",
            "designation": null,
            "phone": null,
            "email": null,
            "contactable_type": "client",
            "contactable_id": null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Contactable;

    #[test]
    fn test_coordinates() {
        assert_eq!(coordinates(Some(31.5204), Some(74.3587)), "31.52040, 74.35870");
        assert_eq!(coordinates(Some(31.5), None), "-");
    }

    fn client(id: EntityId, name: &str) -> Client {
        serde_json::from_value(json!({ "id": id, "name": name, "is_active": true }))
            .expect("client fixture")
    }

    #[test]
    fn test_cache_fallback_for_the_opened_client() {
        let row = client(5, "Row copy");
        let cached = client(5, "Fetched earlier");

        assert_eq!(
            cache_fallback(Some(&row), 5, Some(cached.clone())),
            Some(cached.clone())
        );
        assert_eq!(cache_fallback(None, 5, Some(cached.clone())), Some(cached));
        assert_eq!(cache_fallback(Some(&row), 5, None), None);
    }

    #[test]
    fn test_cache_fallback_ignored_after_switching_client() {
        // open(5), open(6), fetch 6 resolves, then fetch 5 is rejected
        let focused = client(6, "Picked later");
        let cached = client(5, "Stale");

        assert_eq!(cache_fallback(Some(&focused), 5, Some(cached)), None);
    }

    #[test]
    fn test_contact_owner_cell() {
        let contact = Contact {
            id: 2,
            name: "Sara".to_string(),
            designation: None,
            phone: None,
            email: None,
            owner: Contactable::Site(9),
        };
        assert_eq!(contact.cell("owner"), "Site #9");
        assert_eq!(contact.cell("phone"), "-");
    }
}
