//! Серверная сортировка и нарезка коллекции на страницы

use contracts::shared::paging::SortDirection;
use std::cmp::Ordering;
use thiserror::Error;

use super::config::PagingConfig;

/// Trait для записей, поддерживающих серверную сортировку
pub trait Sortable {
    /// Поля, по которым разрешена сортировка
    const SORT_FIELDS: &'static [&'static str];

    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("invalid sort order: {0} (expected asc or desc)")]
    InvalidOrder(String),
}

/// Нормализованный запрос списка: смещение, размер и сортировка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub offset: usize,
    pub limit: usize,
    pub sort: Option<(String, SortDirection)>,
}

impl ListQuery {
    /// Build from 1-based page params. Page 0 is treated as 1, size is clamped
    /// into `1..=max_page_size`.
    pub fn from_page_params<T: Sortable>(
        page: Option<usize>,
        per_page: Option<usize>,
        sort_by: Option<&str>,
        order: Option<&str>,
        paging: &PagingConfig,
    ) -> Result<Self, QueryError> {
        let limit = per_page
            .unwrap_or(paging.default_page_size)
            .clamp(1, paging.max_page_size);
        let page_index = page.unwrap_or(1).max(1) - 1;

        let sort = match sort_by.filter(|s| !s.is_empty()) {
            None => None,
            Some(field) => {
                if !T::SORT_FIELDS.iter().any(|f| *f == field) {
                    return Err(QueryError::UnknownSortField(field.to_string()));
                }
                Some((field.to_string(), parse_order(order)?))
            }
        };

        Ok(Self {
            offset: page_index.saturating_mul(limit),
            limit,
            sort,
        })
    }

    /// 1-based page number this query addresses
    pub fn page(&self) -> usize {
        (self.offset / self.limit).saturating_add(1)
    }
}

pub fn parse_order(order: Option<&str>) -> Result<SortDirection, QueryError> {
    match order.map(|o| o.to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("asc") => Ok(SortDirection::Asc),
        Some("desc") => Ok(SortDirection::Desc),
        Some(other) => Err(QueryError::InvalidOrder(other.to_string())),
    }
}

/// Отсортировать и вырезать страницу. Возвращает (строки страницы, всего строк).
pub fn page_of<T: Sortable + Clone>(items: &[T], query: &ListQuery) -> (Vec<T>, usize) {
    let total = items.len();
    let mut sorted: Vec<&T> = items.iter().collect();

    if let Some((field, direction)) = &query.sort {
        sorted.sort_by(|a, b| {
            let cmp = a.compare_by_field(b, field);
            match direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        });
    }

    let page = sorted
        .into_iter()
        .skip(query.offset)
        .take(query.limit)
        .cloned()
        .collect();

    (page, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u64,
        name: &'static str,
    }

    impl Sortable for Row {
        const SORT_FIELDS: &'static [&'static str] = &["id", "name"];

        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(other.name),
                _ => self.id.cmp(&other.id),
            }
        }
    }

    fn paging() -> PagingConfig {
        PagingConfig {
            default_page_size: 10,
            max_page_size: 100,
        }
    }

    fn rows(n: u64) -> Vec<Row> {
        (1..=n).map(|id| Row { id, name: "x" }).collect()
    }

    #[test]
    fn test_one_based_pages() {
        let query =
            ListQuery::from_page_params::<Row>(Some(3), Some(10), None, None, &paging()).unwrap();
        assert_eq!(query.offset, 20);
        assert_eq!(query.page(), 3);

        let (page, total) = page_of(&rows(25), &query);
        assert_eq!(total, 25);
        assert_eq!(page.iter().map(|r| r.id).collect::<Vec<_>>(), vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_defaults_and_clamping() {
        let query = ListQuery::from_page_params::<Row>(None, None, None, None, &paging()).unwrap();
        assert_eq!((query.offset, query.limit), (0, 10));

        let query =
            ListQuery::from_page_params::<Row>(Some(0), Some(5000), None, None, &paging()).unwrap();
        assert_eq!((query.offset, query.limit), (0, 100));

        let query =
            ListQuery::from_page_params::<Row>(Some(1), Some(0), None, None, &paging()).unwrap();
        assert_eq!(query.limit, 1);
    }

    #[test]
    fn test_page_beyond_end_is_empty() {
        let query =
            ListQuery::from_page_params::<Row>(Some(9), Some(10), None, None, &paging()).unwrap();
        let (page, total) = page_of(&rows(25), &query);
        assert!(page.is_empty());
        assert_eq!(total, 25);
    }

    #[test]
    fn test_huge_page_number_is_empty_not_overflow() {
        let query =
            ListQuery::from_page_params::<Row>(Some(usize::MAX), Some(10), None, None, &paging())
                .unwrap();
        assert_eq!(query.offset, usize::MAX);
        let (page, total) = page_of(&rows(25), &query);
        assert!(page.is_empty());
        assert_eq!(total, 25);

        let query =
            ListQuery::from_page_params::<Row>(Some(usize::MAX), Some(1), None, None, &paging())
                .unwrap();
        assert_eq!(query.page(), usize::MAX);
    }

    #[test]
    fn test_sort_descending() {
        let items = vec![
            Row { id: 1, name: "b" },
            Row { id: 2, name: "c" },
            Row { id: 3, name: "a" },
        ];
        let query = ListQuery::from_page_params::<Row>(
            Some(1),
            Some(10),
            Some("name"),
            Some("DESC"),
            &paging(),
        )
        .unwrap();
        let (page, _) = page_of(&items, &query);
        assert_eq!(page.iter().map(|r| r.name).collect::<Vec<_>>(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_invalid_sort_params() {
        assert_eq!(
            ListQuery::from_page_params::<Row>(None, None, Some("password"), None, &paging()),
            Err(QueryError::UnknownSortField("password".into()))
        );
        assert_eq!(
            ListQuery::from_page_params::<Row>(None, None, Some("id"), Some("up"), &paging()),
            Err(QueryError::InvalidOrder("up".into()))
        );
    }
}
