pub mod global_context;

use crate::domain::a001_user::ui::list::UserList;
use crate::domain::a002_post::ui::list::PostList;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelector;
use crate::system::pages::dialog_demo::DialogDemo;
use global_context::{AppGlobalContext, PageKey};
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |   TopHeader: навигация + выбор темы       |
/// +------------------------------------------+
/// |              активная страница            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <header class="top-header">
                <nav class="top-header__nav">
                    {PageKey::all().into_iter().map(|page| {
                        let is_active = move || ctx.active.get() == page;
                        view! {
                            <button
                                class=move || if is_active() { "top-header__tab active" } else { "top-header__tab" }
                                on:click=move |_| ctx.open_page(page)
                            >
                                {icon(page.icon_name())}
                                <span>{page.title()}</span>
                            </button>
                        }
                    }).collect_view()}
                </nav>
                <ThemeSelector />
            </header>

            <main class="app-main">
                {move || match ctx.active.get() {
                    PageKey::Users => view! { <UserList /> }.into_any(),
                    PageKey::Posts => view! { <PostList /> }.into_any(),
                    PageKey::Dialog => view! { <DialogDemo /> }.into_any(),
                }}
            </main>
        </div>
    }
}
