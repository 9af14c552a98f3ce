use leptos::prelude::*;

/// Shell state shared by the sidebar, tab bar and header
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Open a tab, or focus it if it is already open
    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("open tab '{}'", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Close a tab; closing the active one focuses the last remaining tab
    pub fn close_tab(&self, key: &str) {
        log::debug!("close tab '{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(ctx: &AppGlobalContext) -> Vec<String> {
        ctx.opened
            .get_untracked()
            .into_iter()
            .map(|t| t.key)
            .collect()
    }

    #[test]
    fn test_open_is_idempotent() {
        let ctx = AppGlobalContext::new();
        ctx.open_tab("guards", "Guards");
        ctx.open_tab("sites", "Sites");
        ctx.open_tab("guards", "Guards");

        assert_eq!(keys(&ctx), vec!["guards", "sites"]);
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("guards"));
    }

    #[test]
    fn test_closing_active_focuses_last() {
        let ctx = AppGlobalContext::new();
        ctx.open_tab("guards", "Guards");
        ctx.open_tab("sites", "Sites");
        ctx.open_tab("leaves", "Leaves");
        ctx.activate_tab("sites");

        ctx.close_tab("sites");
        assert_eq!(keys(&ctx), vec!["guards", "leaves"]);
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("leaves"));

        ctx.close_tab("guards");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("leaves"));
    }

    #[test]
    fn test_close_all() {
        let ctx = AppGlobalContext::new();
        ctx.open_tab("guards", "Guards");
        ctx.close_all();
        assert!(keys(&ctx).is_empty());
        assert_eq!(ctx.active.get_untracked(), None);
    }
}
