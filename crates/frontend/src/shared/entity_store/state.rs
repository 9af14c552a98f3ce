use contracts::domain::common::{Entity, EntityId};
use contracts::shared::pagination::PageInfo;

/// Client-side cache of one entity type
///
/// `items` mirrors the last successful list fetch in server order. `current`
/// has its own lifecycle and is only kept in line with `items` by explicit
/// reducer cases.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityState<T> {
    pub items: Vec<T>,
    pub current: Option<T>,
    pub pagination: PageInfo,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for EntityState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            pagination: PageInfo::default(),
            is_loading: false,
            error: None,
        }
    }
}

impl<T: Entity> EntityState<T> {
    pub fn find(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
