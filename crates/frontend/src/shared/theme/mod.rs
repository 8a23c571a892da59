//! Theme management module for the application.
//!
//! Provides a context-based theme system with light and dark themes.
//! Each theme carries a primary colour; colours are exposed to CSS as
//! custom properties on the document element. Theme preference is
//! persisted in localStorage.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for `data-theme` and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the display name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Светлая",
            Theme::Dark => "Тёмная",
        }
    }

    /// Parse theme from string.
    pub fn from_key(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Returns all available themes.
    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                primary: "#6200ee",
                on_primary: "#ffffff",
                background: "#ffffff",
                surface: "#f5f5f5",
                text: "#1f1f1f",
                muted: "#6b6b6b",
                border: "#e0e0e0",
                overlay: "rgba(0, 0, 0, 0.5)",
            },
            Theme::Dark => Palette {
                primary: "#bb86fc",
                on_primary: "#000000",
                background: "#121212",
                surface: "#1e1e1e",
                text: "#e6e6e6",
                muted: "#9e9e9e",
                border: "#333333",
                overlay: "rgba(0, 0, 0, 0.7)",
            },
        }
    }
}

/// Набор цветов темы
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    pub primary: &'static str,
    pub on_primary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub overlay: &'static str,
}

impl Palette {
    /// CSS custom properties, in the order they are applied.
    pub fn css_variables(&self) -> [(&'static str, &'static str); 8] {
        [
            ("--color-primary", self.primary),
            ("--color-on-primary", self.on_primary),
            ("--color-background", self.background),
            ("--color-surface", self.surface),
            ("--color-text", self.text),
            ("--color-muted", self.muted),
            ("--color-border", self.border),
            ("--color-overlay", self.overlay),
        ]
    }
}

const THEME_STORAGE_KEY: &str = "app-theme";

/// Load theme from localStorage.
fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_key(&s))
        .unwrap_or_default()
}

/// Save theme to localStorage.
fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Apply theme: CSS variables on `<html>` and `data-theme` on body.
fn apply_theme(theme: Theme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Some(root) = document.document_element() {
        let style = root.unchecked_into::<web_sys::HtmlElement>().style();
        for (name, value) in theme.palette().css_variables() {
            let _ = style.set_property(name, value);
        }
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }

    /// Get the current theme.
    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    let theme = RwSignal::new(initial_theme);

    apply_theme(initial_theme);

    provide_context(ThemeContext { theme });

    children()
}

/// Hook to use the theme context.
///
/// Outside of a `ThemeProvider` a detached default context is returned.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: RwSignal::new(Theme::default()),
    })
}

/// Theme selector dropdown component.
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let ctx = use_theme();
    let (dropdown_open, set_dropdown_open) = signal(false);

    let select_theme = move |theme: Theme| {
        ctx.set_theme(theme);
        set_dropdown_open.set(false);
    };

    view! {
        <div class="theme-selector" style="position: relative;">
            <button
                class="top-header-icon-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_dropdown_open.update(|open| *open = !*open);
                }
                title="Выбор темы"
            >
                {crate::shared::icons::icon("palette")}
            </button>

            <Show when=move || dropdown_open.get()>
                <div class="theme-dropdown" on:click=move |ev| ev.stop_propagation()>
                    {Theme::all().into_iter().map(|theme| {
                        let is_active = move || ctx.theme.get() == theme;
                        view! {
                            <button
                                class=move || if is_active() { "theme-dropdown-item active" } else { "theme-dropdown-item" }
                                on:click=move |_| select_theme(theme)
                            >
                                {theme.display_name()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme_primary_colour() {
        assert_eq!(Theme::Light.palette().primary, "#6200ee");
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_theme_key_roundtrip_and_fallback() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_key(theme.as_str()), theme);
        }
        assert_eq!(Theme::from_key("forest"), Theme::Light);
    }
}
