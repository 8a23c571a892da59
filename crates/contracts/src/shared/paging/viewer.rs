//! Состояние постраничного просмотра коллекции.
//!
//! `PagedViewer` не выполняет запросы сам. Каждая операция, меняющая ключ
//! страницы, возвращает `FetchTicket`; вызывающий код выполняет загрузку и
//! передаёт результат в `resolve`. Результаты устаревших тикетов отбрасываются
//! (побеждает последний запрос), поэтому быстрые переключения страниц не
//! приводят к отрисовке не той страницы.

use super::cache::PageCache;
use super::column::{find_column, Column};
use super::error::FetchError;
use super::request::{page_count, PageRequest, PageResult, SortSpec};
use serde::{Deserialize, Serialize};

/// Настройки вьюера
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Показывать предыдущую страницу (приглушённо) пока грузится новая
    #[serde(default)]
    pub keep_previous_data: bool,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_cache_capacity() -> usize {
    16
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![5, 10, 20, 50],
            keep_previous_data: false,
            cache_capacity: default_cache_capacity(),
        }
    }
}

/// Запрос на загрузку, выданный вьюером
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub request: PageRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus<T> {
    Idle,
    Loading {
        request: PageRequest,
        /// Предыдущий результат для stale-while-revalidate; не является текущими строками
        stale: Option<PageResult<T>>,
    },
    Ready {
        request: PageRequest,
        result: PageResult<T>,
    },
    Failed {
        request: PageRequest,
        error: FetchError,
    },
}

/// Outcome of `PagedViewer::resolve`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// Ответ на устаревший запрос, проигнорирован
    Discarded,
    /// The collection shrank below the current page; the viewer clamped
    /// its page index and needs this follow-up fetch.
    Refetch(FetchTicket),
}

/// Состояние кнопок пагинации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerControls {
    pub page_index: usize,
    pub page_count: usize,
    pub total_count: usize,
    pub can_first: bool,
    pub can_previous: bool,
    pub can_next: bool,
    pub can_last: bool,
}

#[derive(Debug, Clone)]
pub struct PagedViewer<T> {
    config: ViewerConfig,
    columns: Vec<Column<T>>,
    page_index: usize,
    page_size: usize,
    sort: SortSpec,
    /// Последний известный total; `None` до первого успешного ответа
    total_count: Option<usize>,
    status: FetchStatus<T>,
    generation: u64,
    last_issued: Option<PageRequest>,
    cache: PageCache<T>,
}

impl<T: Clone> PagedViewer<T> {
    pub fn new(config: ViewerConfig, columns: Vec<Column<T>>) -> Self {
        let page_size = config.default_page_size.max(1);
        let cache = PageCache::new(config.cache_capacity);
        Self {
            config,
            columns,
            page_index: 0,
            page_size,
            sort: SortSpec::none(),
            total_count: None,
            status: FetchStatus::Idle,
            generation: 0,
            last_issued: None,
            cache,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn status(&self) -> &FetchStatus<T> {
        &self.status
    }

    pub fn cache(&self) -> &PageCache<T> {
        &self.cache
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading { .. })
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            FetchStatus::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Строки текущей страницы; пусто, пока нет актуального результата
    pub fn rows(&self) -> &[T] {
        match &self.status {
            FetchStatus::Ready { result, .. } => &result.items,
            _ => &[],
        }
    }

    /// Rows of a superseded page, offered only while loading with `keep_previous_data`
    pub fn stale_rows(&self) -> Option<&[T]> {
        match &self.status {
            FetchStatus::Loading {
                stale: Some(result),
                ..
            } => Some(&result.items),
            _ => None,
        }
    }

    pub fn total_count(&self) -> usize {
        self.total_count.unwrap_or(0)
    }

    /// 0, пока total неизвестен
    pub fn page_count(&self) -> usize {
        page_count(self.total_count(), self.page_size)
    }

    pub fn current_request(&self) -> PageRequest {
        PageRequest::new(self.page_index, self.page_size, self.sort.clone())
    }

    pub fn controls(&self) -> PagerControls {
        let page_count = self.page_count();
        let has_previous = self.page_index > 0;
        let has_next = self.page_index.saturating_add(1) < page_count;
        PagerControls {
            page_index: self.page_index,
            page_count,
            total_count: self.total_count(),
            can_first: has_previous,
            can_previous: has_previous,
            can_next: has_next,
            can_last: has_next,
        }
    }

    /// Первая загрузка: Idle → Loading
    pub fn start(&mut self) -> Option<FetchTicket> {
        match self.status {
            FetchStatus::Idle => self.issue(true),
            _ => None,
        }
    }

    pub fn set_page_index(&mut self, index: usize) -> Option<FetchTicket> {
        self.page_index = self.clamp_index(index);
        self.issue(false)
    }

    pub fn next_page(&mut self) -> Option<FetchTicket> {
        if !self.controls().can_next {
            return None;
        }
        self.set_page_index(self.page_index + 1)
    }

    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        if self.page_index == 0 {
            return None;
        }
        self.set_page_index(self.page_index - 1)
    }

    pub fn first_page(&mut self) -> Option<FetchTicket> {
        self.set_page_index(0)
    }

    pub fn last_page(&mut self) -> Option<FetchTicket> {
        let page_count = self.page_count();
        if page_count == 0 {
            return None;
        }
        self.set_page_index(page_count - 1)
    }

    /// Смена размера страницы сбрасывает индекс на 0. Размер 0 игнорируется.
    pub fn set_page_size(&mut self, size: usize) -> Option<FetchTicket> {
        if size == 0 {
            return None;
        }
        self.page_size = size;
        self.page_index = 0;
        self.issue(false)
    }

    /// Заменить сортировку. Учитывается только первый ключ; ключ по
    /// несортируемой или неизвестной колонке игнорируется целиком.
    pub fn set_sort(&mut self, spec: SortSpec) -> Option<FetchTicket> {
        let spec = match spec.primary() {
            None => SortSpec::none(),
            Some(key) => {
                if !self.is_sortable(&key.field) {
                    return None;
                }
                SortSpec(vec![key.clone()])
            }
        };
        self.sort = spec;
        self.issue(false)
    }

    /// Клик по заголовку: none → asc → desc → none
    pub fn toggle_sort(&mut self, field: &str) -> Option<FetchTicket> {
        if !self.is_sortable(field) {
            return None;
        }
        let next = self.sort.toggled(field);
        self.set_sort(next)
    }

    /// Повтор того же запроса после ошибки
    pub fn retry(&mut self) -> Option<FetchTicket> {
        match self.status {
            FetchStatus::Failed { .. } => self.issue(true),
            _ => None,
        }
    }

    /// Сбросить кэш и перезапросить текущую страницу (например, после удаления строки)
    pub fn invalidate(&mut self) -> Option<FetchTicket> {
        self.cache.invalidate_all();
        self.issue(true)
    }

    /// Применить результат загрузки тикета `generation`
    pub fn resolve(
        &mut self,
        generation: u64,
        outcome: Result<PageResult<T>, FetchError>,
    ) -> Resolution {
        if generation != self.generation {
            return Resolution::Discarded;
        }
        let Some(request) = self.last_issued.clone() else {
            return Resolution::Discarded;
        };

        match outcome {
            Ok(result) => {
                self.total_count = Some(result.total_count);
                let page_count = page_count(result.total_count, self.page_size);
                if self.page_index >= page_count.max(1) {
                    self.cache.forget(&request, generation);
                    self.page_index = page_count.saturating_sub(1);
                    if page_count == 0 {
                        // коллекция пуста: страница 0 тоже пуста, перезапрос не нужен
                        let request = self.current_request();
                        self.last_issued = Some(request.clone());
                        self.status = FetchStatus::Ready { request, result };
                        return Resolution::Applied;
                    }
                    return match self.issue(true) {
                        Some(ticket) => Resolution::Refetch(ticket),
                        None => Resolution::Discarded,
                    };
                }
                self.cache.resolve(&request, generation, result.clone());
                self.status = FetchStatus::Ready { request, result };
            }
            Err(error) => {
                self.cache.forget(&request, generation);
                self.status = FetchStatus::Failed { request, error };
            }
        }
        Resolution::Applied
    }

    fn is_sortable(&self, field: &str) -> bool {
        find_column(&self.columns, field).is_some_and(|c| c.sortable)
    }

    fn clamp_index(&self, index: usize) -> usize {
        match self.total_count {
            // до первого ответа границы неизвестны
            None => index,
            Some(_) => index.min(self.page_count().saturating_sub(1)),
        }
    }

    fn issue(&mut self, force: bool) -> Option<FetchTicket> {
        let request = self.current_request();
        if !force && self.last_issued.as_ref() == Some(&request) {
            return None;
        }

        let stale = if self.config.keep_previous_data {
            self.cache.resolved(&request).cloned().or_else(|| match &self.status {
                FetchStatus::Ready { result, .. } => Some(result.clone()),
                FetchStatus::Loading { stale, .. } => stale.clone(),
                _ => None,
            })
        } else {
            None
        };

        self.generation += 1;
        self.cache.mark_in_flight(&request, self.generation);
        self.last_issued = Some(request.clone());
        self.status = FetchStatus::Loading {
            request: request.clone(),
            stale,
        };

        Some(FetchTicket {
            generation: self.generation,
            request,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::paging::request::SortDirection;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u64,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("id", "ID", |r: &Row| r.id.to_string()),
            Column::new("note", "Note", |_: &Row| String::new()).not_sortable(),
        ]
    }

    fn viewer() -> PagedViewer<Row> {
        PagedViewer::new(
            ViewerConfig {
                default_page_size: 10,
                ..ViewerConfig::default()
            },
            columns(),
        )
    }

    /// Коллекция из `total` строк с id 1..=total, как отдаёт сервер
    fn serve(total: usize, request: &PageRequest) -> PageResult<Row> {
        let items = (1..=total as u64)
            .skip(request.offset())
            .take(request.page_size)
            .map(|id| Row { id })
            .collect();
        PageResult::new(items, total)
    }

    fn ids(viewer: &PagedViewer<Row>) -> Vec<u64> {
        viewer.rows().iter().map(|r| r.id).collect()
    }

    /// Запустить вьюер и применить первый ответ
    fn loaded(total: usize) -> PagedViewer<Row> {
        let mut v = viewer();
        let ticket = v.start().unwrap();
        assert_eq!(
            v.resolve(ticket.generation, Ok(serve(total, &ticket.request))),
            Resolution::Applied
        );
        v
    }

    #[test]
    fn test_initial_state_is_idle() {
        let v = viewer();
        assert_eq!(v.status(), &FetchStatus::Idle);
        assert_eq!(v.page_index(), 0);
        assert_eq!(v.page_size(), 10);
        assert!(v.sort().is_empty());
        assert_eq!(v.page_count(), 0);
    }

    #[test]
    fn test_start_enters_loading_once() {
        let mut v = viewer();
        let ticket = v.start().unwrap();
        assert_eq!(ticket.request, PageRequest::new(0, 10, SortSpec::none()));
        assert!(v.is_loading());
        assert!(v.rows().is_empty());
        assert!(v.start().is_none());
    }

    #[test]
    fn test_envelope_scenario_25_items() {
        let mut v = loaded(25);
        assert_eq!(v.page_count(), 3);
        assert_eq!(ids(&v), (1..=10).collect::<Vec<_>>());

        let ticket = v.set_page_index(2).unwrap();
        assert!(v.is_loading());
        v.resolve(ticket.generation, Ok(serve(25, &ticket.request)));
        assert_eq!(ids(&v), (21..=25).collect::<Vec<_>>());

        let controls = v.controls();
        assert!(!controls.can_next);
        assert!(!controls.can_last);
        assert!(controls.can_previous);
        assert!(controls.can_first);
        assert!(v.next_page().is_none());
        assert_eq!(v.page_index(), 2);
    }

    #[test]
    fn test_previous_on_first_page_is_noop() {
        let mut v = loaded(25);
        assert!(!v.controls().can_previous);
        assert!(v.previous_page().is_none());
        assert_eq!(v.page_index(), 0);
    }

    #[test]
    fn test_last_request_wins() {
        let mut v = viewer();
        let first = v.start().unwrap();
        let to_five = v.set_page_index(5).unwrap();
        let to_two = v.set_page_index(2).unwrap();

        // ответы приходят в обратном порядке
        assert_eq!(
            v.resolve(to_two.generation, Ok(serve(100, &to_two.request))),
            Resolution::Applied
        );
        assert_eq!(
            v.resolve(to_five.generation, Ok(serve(100, &to_five.request))),
            Resolution::Discarded
        );
        assert_eq!(
            v.resolve(first.generation, Ok(serve(100, &first.request))),
            Resolution::Discarded
        );

        assert_eq!(v.page_index(), 2);
        assert_eq!(ids(&v), (21..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_request_is_not_reissued() {
        let mut v = loaded(25);
        assert!(v.set_page_index(0).is_none());
        assert!(v.set_page_size(10).is_none());
    }

    #[test]
    fn test_navigation_clamps_to_last_page() {
        let mut v = loaded(25);
        let ticket = v.set_page_index(40).unwrap();
        assert_eq!(ticket.request.page_index, 2);
        assert_eq!(v.page_index(), 2);
    }

    #[test]
    fn test_empty_collection_is_ready_not_error() {
        let mut v = loaded(0);
        assert!(matches!(v.status(), FetchStatus::Ready { .. }));
        assert_eq!(v.page_count(), 0);
        assert!(v.rows().is_empty());
        let controls = v.controls();
        assert!(!controls.can_next && !controls.can_previous);
        assert!(v.set_page_index(3).is_none());
        assert_eq!(v.page_index(), 0);
        assert!(v.last_page().is_none());
    }

    #[test]
    fn test_collection_emptied_on_later_page() {
        let mut v = loaded(25);
        let t = v.set_page_index(2).unwrap();
        v.resolve(t.generation, Ok(serve(25, &t.request)));

        let t = v.invalidate().unwrap();
        assert_eq!(
            v.resolve(t.generation, Ok(PageResult::new(vec![], 0))),
            Resolution::Applied
        );
        assert_eq!(v.page_index(), 0);
        assert_eq!(v.page_count(), 0);
        assert!(matches!(v.status(), FetchStatus::Ready { .. }));
        let controls = v.controls();
        assert!(!controls.can_first && !controls.can_previous);
        assert!(!controls.can_next && !controls.can_last);
        // индекс 0 уже отображён
        assert!(v.set_page_index(0).is_none());
    }

    #[test]
    fn test_jump_before_total_then_empty_result() {
        let mut v = viewer();
        v.start().unwrap();
        let t = v.set_page_index(5).unwrap();
        assert_eq!(
            v.resolve(t.generation, Ok(PageResult::new(vec![], 0))),
            Resolution::Applied
        );
        assert_eq!(v.page_index(), 0);
        assert_eq!(v.controls().page_index, 0);
        assert!(!v.controls().can_previous);
    }

    #[test]
    fn test_page_size_change_resets_index() {
        let mut v = loaded(25);
        let t = v.set_page_index(2).unwrap();
        v.resolve(t.generation, Ok(serve(25, &t.request)));

        let ticket = v.set_page_size(5).unwrap();
        assert_eq!(ticket.request, PageRequest::new(0, 5, SortSpec::none()));
        v.resolve(ticket.generation, Ok(serve(25, &ticket.request)));
        assert_eq!(v.page_count(), 5);
        assert!(v.set_page_size(0).is_none());
        assert_eq!(v.page_size(), 5);
    }

    #[test]
    fn test_sort_keeps_page_and_refetches() {
        let mut v = loaded(25);
        let t = v.set_page_index(1).unwrap();
        v.resolve(t.generation, Ok(serve(25, &t.request)));

        let ticket = v.toggle_sort("id").unwrap();
        assert_eq!(ticket.request.page_index, 1);
        assert_eq!(ticket.request.sort, SortSpec::by("id", SortDirection::Asc));
        assert!(v.is_loading());
    }

    #[test]
    fn test_toggle_sort_three_times_restores_unsorted() {
        let mut v = loaded(25);
        let original = v.sort().clone();
        for _ in 0..3 {
            let t = v.toggle_sort("id").unwrap();
            v.resolve(t.generation, Ok(serve(25, &t.request)));
        }
        assert_eq!(v.sort(), &original);
    }

    #[test]
    fn test_unsortable_and_unknown_columns_are_noop() {
        let mut v = loaded(25);
        assert!(v.toggle_sort("note").is_none());
        assert!(v.toggle_sort("missing").is_none());
        assert!(v
            .set_sort(SortSpec::by("note", SortDirection::Desc))
            .is_none());
        assert!(v.sort().is_empty());
        assert!(matches!(v.status(), FetchStatus::Ready { .. }));
    }

    #[test]
    fn test_set_sort_keeps_single_column() {
        let mut v = loaded(25);
        let mut spec = SortSpec::by("id", SortDirection::Desc);
        spec.0.push(crate::shared::paging::request::SortKey {
            field: "note".into(),
            direction: SortDirection::Asc,
        });
        let ticket = v.set_sort(spec).unwrap();
        assert_eq!(ticket.request.sort, SortSpec::by("id", SortDirection::Desc));
    }

    #[test]
    fn test_failure_then_retry() {
        let mut v = viewer();
        let ticket = v.start().unwrap();
        v.resolve(
            ticket.generation,
            Err(FetchError::Transport("connection refused".into())),
        );
        assert_eq!(
            v.error(),
            Some(&FetchError::Transport("connection refused".into()))
        );
        assert!(v.rows().is_empty());

        let retry = v.retry().unwrap();
        assert_eq!(retry.request, ticket.request);
        assert_ne!(retry.generation, ticket.generation);
        assert!(v.is_loading());

        v.resolve(retry.generation, Ok(serve(3, &retry.request)));
        assert_eq!(ids(&v), vec![1, 2, 3]);
        assert!(v.retry().is_none());
    }

    #[test]
    fn test_shrunken_collection_triggers_clamped_refetch() {
        let mut v = loaded(25);
        let t = v.set_page_index(2).unwrap();
        v.resolve(t.generation, Ok(serve(25, &t.request)));

        // строки удалили: теперь только 12, страница 2 больше не существует
        let refresh = v.invalidate().unwrap();
        let follow_up = match v.resolve(refresh.generation, Ok(serve(12, &refresh.request))) {
            Resolution::Refetch(ticket) => ticket,
            other => panic!("expected refetch, got {:?}", other),
        };
        assert_eq!(follow_up.request.page_index, 1);
        assert_eq!(v.page_index(), 1);

        v.resolve(follow_up.generation, Ok(serve(12, &follow_up.request)));
        assert_eq!(ids(&v), vec![11, 12]);
    }

    #[test]
    fn test_invalidate_reissues_identical_request() {
        let mut v = loaded(25);
        let before = v.current_request();
        assert!(v.cache().resolved(&before).is_some());
        let ticket = v.invalidate().unwrap();
        assert_eq!(ticket.request, before);
        assert!(v.cache().resolved(&before).is_none());
    }

    #[test]
    fn test_stale_rows_only_with_keep_previous_data() {
        let mut v = loaded(25);
        v.set_page_index(1).unwrap();
        assert!(v.stale_rows().is_none());

        let mut v = PagedViewer::new(
            ViewerConfig {
                default_page_size: 10,
                keep_previous_data: true,
                ..ViewerConfig::default()
            },
            columns(),
        );
        let t = v.start().unwrap();
        v.resolve(t.generation, Ok(serve(25, &t.request)));
        v.set_page_index(1).unwrap();
        assert!(v.rows().is_empty());
        assert_eq!(v.stale_rows().map(|r| r.len()), Some(10));
    }

    proptest! {
        #[test]
        fn page_index_stays_in_range(
            total in 0usize..500,
            size in 1usize..50,
            moves in proptest::collection::vec((0usize..100, 0usize..500, any::<bool>()), 1..20),
        ) {
            let mut v = PagedViewer::new(
                ViewerConfig { default_page_size: size, ..ViewerConfig::default() },
                columns(),
            );
            let t = v.start().unwrap();
            v.resolve(t.generation, Ok(serve(total, &t.request)));

            // между ответами коллекция может вырасти, сжаться или опустеть
            for (index, total, reload) in moves {
                let total = if reload && total % 4 == 0 { 0 } else { total };
                let ticket = if reload { v.invalidate() } else { v.set_page_index(index) };
                let mut next = ticket;
                while let Some(t) = next {
                    next = match v.resolve(t.generation, Ok(serve(total, &t.request))) {
                        Resolution::Refetch(t) => Some(t),
                        _ => None,
                    };
                }
                prop_assert!(v.page_index() < v.page_count().max(1));
                let controls = v.controls();
                if v.page_count() == 0 {
                    prop_assert!(!controls.can_first && !controls.can_previous);
                    prop_assert!(!controls.can_next && !controls.can_last);
                }
            }
        }
    }
}
