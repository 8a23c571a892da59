//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Пример
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Email"
//!     sort_field="email"
//!     direction=Signal::derive(move || viewer.with(|v| v.sort().direction_of("email")))
//!     on_sort=Callback::new(move |field: String| toggle_sort(field))
//! />
//! ```

use super::{aria_sort, sort_class, sort_indicator};
use contracts::shared::paging::SortDirection;
use leptos::prelude::*;
use thaw::*;

/// Ячейка заголовка: индикатор направления (▲▼⇅) и клик для переключения.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    /// Направление сортировки этой колонки (`None`: не отсортирована)
    #[prop(into)]
    direction: Signal<Option<SortDirection>>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                role="button"
                aria-sort=move || aria_sort(direction.get())
                on:click=move |_| on_sort.run(sort_field.clone())
            >
                {label}
                <span class=move || sort_class(direction.get())>
                    {move || sort_indicator(direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
