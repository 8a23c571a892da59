use crate::shared::icons::icon;
use contracts::shared::paging::PagerControls;
use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls
///
/// Кнопки включаются по флагам `PagerControls`; сама навигация
/// (и зажатие индекса в допустимый диапазон) остаётся за вьюером.
#[component]
pub fn PaginationControls(
    /// Snapshot of the viewer's pager state
    #[prop(into)]
    controls: Signal<PagerControls>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes (0-indexed target page)
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    page_size_options: Vec<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=move || !controls.get().can_first
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = controls.get().page_index;
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || !controls.get().can_previous
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let c = controls.get();
                    format!("{} / {} ({})", c.page_index + 1, c.page_count.max(1), c.total_count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(controls.get().page_index + 1)
                disabled=move || !controls.get().can_next
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = controls.get().page_count;
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=move || !controls.get().can_last
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
