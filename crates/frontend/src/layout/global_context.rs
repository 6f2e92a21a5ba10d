use super::tabs::tab_labels::{detail_key, detail_tab_label, title_for_key};
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Query parameter holding the active tab key.
pub const PAGE_PARAM: &str = "page";

/// Active tab key from a `location.search` string.
pub fn page_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(PAGE_PARAM)
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

/// `?page=<key>`
pub fn page_query(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([(PAGE_PARAM.to_string(), key.to_string())]))
        .unwrap_or_default();
    format!("?{}", query)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the tab named in `?page=` and keep the URL in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = page_from_query(&search) {
            match title_for_key(&key) {
                Some(title) => self.open_tab(&key, &title),
                None => log::warn!("unknown page '{}' in URL, ignored", key),
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let target = this.active.get().map(|key| page_query(&key)).unwrap_or_default();
            let Some(w) = window() else {
                return;
            };
            let location = w.location();
            if location.search().unwrap_or_default() == target {
                return;
            }
            let new_url = if target.is_empty() {
                location.pathname().unwrap_or_else(|_| "/".to_string())
            } else {
                target
            };
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: '{}'", key);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
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

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: '{}'", key);
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

    /// Close `key` and show `list_key` instead, e.g. after a detail record vanished.
    pub fn replace_tab(&self, key: &str, list_key: &str) {
        self.close_tab(key);
        if let Some(title) = title_for_key(list_key) {
            self.open_tab(list_key, &title);
        }
    }

    /// Opens the detail tab of an `entity` record by id; the page renames it once loaded.
    pub fn detail_opener(&self, entity: &'static str) -> Callback<i64> {
        let this = *self;
        Callback::new(move |id: i64| {
            this.open_tab(
                &detail_key(entity, id),
                &detail_tab_label(entity, &format!("#{}", id)),
            )
        })
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_page_param() {
        assert_eq!(page_from_query("?page=a003_brand"), Some("a003_brand".to_string()));
        assert_eq!(
            page_from_query("page=a005_product_detail_7&x=1"),
            Some("a005_product_detail_7".to_string())
        );
        assert_eq!(page_from_query(""), None);
        assert_eq!(page_from_query("?page="), None);
        assert_eq!(page_from_query("?other=1"), None);
    }

    #[test]
    fn writes_page_param() {
        assert_eq!(page_query("a006_price"), "?page=a006_price");
        assert_eq!(page_from_query(&page_query("sys_users")), Some("sys_users".to_string()));
    }
}
