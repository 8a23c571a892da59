use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Страницы приложения
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PageKey {
    #[default]
    Users,
    Posts,
    Dialog,
}

impl PageKey {
    /// Значение параметра `?active=`
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Users => "a001_user",
            PageKey::Posts => "a002_post",
            PageKey::Dialog => "dialog_demo",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageKey::Users => "Users",
            PageKey::Posts => "Posts",
            PageKey::Dialog => "Dialog",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            PageKey::Users => "users",
            PageKey::Posts => "posts",
            PageKey::Dialog => "dialog",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.as_str() == key)
    }

    pub fn all() -> [PageKey; 3] {
        [PageKey::Users, PageKey::Posts, PageKey::Dialog]
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<PageKey>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(PageKey::default()),
        }
    }

    pub fn open_page(&self, page: PageKey) {
        self.active.set(page);
    }

    /// Синхронизация активной страницы с `?active=...` в адресной строке
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("active").and_then(|k| PageKey::from_key(k)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active", active.as_str())]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
