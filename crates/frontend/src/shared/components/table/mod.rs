pub mod sortable_header_cell;

pub use sortable_header_cell::SortableHeaderCell;

use contracts::shared::paging::SortDirection;

/// Индикатор сортировки для заголовка колонки
pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => " ⇅",
    }
}

/// CSS-класс индикатора: активная колонка подсвечивается
pub fn sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// `aria-sort` value for a header cell
pub fn aria_sort(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => "ascending",
        Some(SortDirection::Desc) => "descending",
        None => "none",
    }
}
