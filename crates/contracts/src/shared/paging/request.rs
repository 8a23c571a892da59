use serde::{Deserialize, Serialize};

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One `(field, direction)` entry of a sort spec
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

/// Упорядоченный список ключей сортировки. Пустой список = без сортировки.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec(pub Vec<SortKey>);

impl SortSpec {
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self(vec![SortKey {
            field: field.into(),
            direction,
        }])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The authoritative key; only single-column sort is honoured
    pub fn primary(&self) -> Option<&SortKey> {
        self.0.first()
    }

    /// Direction applied to `field`, if it is the sorted column
    pub fn direction_of(&self, field: &str) -> Option<SortDirection> {
        self.primary()
            .filter(|k| k.field == field)
            .map(|k| k.direction)
    }

    /// Следующее состояние при клике по заголовку колонки:
    /// none → asc → desc → none. Клик по другой колонке начинает с asc.
    pub fn toggled(&self, field: &str) -> SortSpec {
        match self.direction_of(field) {
            None => SortSpec::by(field, SortDirection::Asc),
            Some(SortDirection::Asc) => SortSpec::by(field, SortDirection::Desc),
            Some(SortDirection::Desc) => SortSpec::none(),
        }
    }
}

/// Параметры запроса одной страницы. Используется как ключ кэша.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    /// 0-based
    pub page_index: usize,
    pub page_size: usize,
    pub sort: SortSpec,
}

impl PageRequest {
    pub fn new(page_index: usize, page_size: usize, sort: SortSpec) -> Self {
        Self {
            page_index,
            page_size,
            sort,
        }
    }

    /// Row offset of the first item on this page
    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }
}

/// Результат запроса одной страницы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total_count: usize) -> Self {
        Self { items, total_count }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }

    pub fn page_count(&self, page_size: usize) -> usize {
        page_count(self.total_count, page_size)
    }
}

/// Количество страниц: ceil(total_count / page_size), 0 для пустой коллекции.
pub fn page_count(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_offset_saturates_on_huge_index() {
        let request = PageRequest::new(usize::MAX, 10, SortSpec::none());
        assert_eq!(request.offset(), usize::MAX);
        assert_eq!(PageRequest::new(2, 10, SortSpec::none()).offset(), 20);
    }

    #[test]
    fn test_page_count_examples() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(25, 0), 0);
    }

    #[test]
    fn test_toggle_cycle_returns_to_unsorted() {
        let start = SortSpec::none();
        let once = start.toggled("name");
        assert_eq!(once, SortSpec::by("name", SortDirection::Asc));
        let twice = once.toggled("name");
        assert_eq!(twice, SortSpec::by("name", SortDirection::Desc));
        let thrice = twice.toggled("name");
        assert_eq!(thrice, start);
    }

    #[test]
    fn test_toggle_other_column_starts_ascending() {
        let spec = SortSpec::by("name", SortDirection::Desc);
        assert_eq!(
            spec.toggled("email"),
            SortSpec::by("email", SortDirection::Asc)
        );
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(2, 10, SortSpec::none()).offset(), 20);
    }

    proptest! {
        #[test]
        fn page_count_is_ceiling_division(total in 0usize..100_000, size in 1usize..1_000) {
            let count = page_count(total, size);
            prop_assert!(count * size >= total);
            if count > 0 {
                prop_assert!((count - 1) * size < total);
            } else {
                prop_assert_eq!(total, 0);
            }
        }
    }
}
