//! PageFrame: standard root wrapper for every page rendered in the shell.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  : `"{entity}--{category}"`, e.g. `"a001_user--list"`
//!   - `data-page-category`  : one of the PAGE_CAT_* constants
//!
//! Usage:
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a001_user--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use leptos::prelude::*;

/// List of records: table with sorting/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Free-form demo page.
pub const PAGE_CAT_DEMO: &str = "demo";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DEMO => "page page--demo",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
