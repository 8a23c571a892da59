use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    view! {
        <ThemeProvider>
            <Shell />
        </ThemeProvider>
    }
}
