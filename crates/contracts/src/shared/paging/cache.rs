use super::request::{PageRequest, PageResult};
use std::collections::{HashMap, VecDeque};

/// Запись кэша страниц
#[derive(Debug, Clone, PartialEq)]
pub enum CacheEntry<T> {
    /// Запрос отправлен, ответ ещё не пришёл
    InFlight { generation: u64 },
    Resolved(PageResult<T>),
}

/// Explicit `PageRequest → PageResult` cache with in-flight markers.
///
/// Bounded: once `capacity` keys are held, the oldest inserted key is evicted.
#[derive(Debug, Clone)]
pub struct PageCache<T> {
    entries: HashMap<PageRequest, CacheEntry<T>>,
    order: VecDeque<PageRequest>,
    capacity: usize,
}

impl<T: Clone> PageCache<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, request: &PageRequest) -> Option<&CacheEntry<T>> {
        self.entries.get(request)
    }

    pub fn resolved(&self, request: &PageRequest) -> Option<&PageResult<T>> {
        match self.entries.get(request) {
            Some(CacheEntry::Resolved(result)) => Some(result),
            _ => None,
        }
    }

    /// Пометить ключ как запрошенный. Старый результат для ключа заменяется маркером.
    pub fn mark_in_flight(&mut self, request: &PageRequest, generation: u64) {
        self.insert(request.clone(), CacheEntry::InFlight { generation });
    }

    /// Сохранить результат, если `generation` совпадает с маркером ключа.
    /// Returns `false` when the marker belongs to a newer request.
    pub fn resolve(&mut self, request: &PageRequest, generation: u64, result: PageResult<T>) -> bool {
        match self.entries.get(request) {
            Some(CacheEntry::InFlight { generation: g }) if *g == generation => {
                self.entries
                    .insert(request.clone(), CacheEntry::Resolved(result));
                true
            }
            _ => false,
        }
    }

    /// Drop the in-flight marker for a failed request
    pub fn forget(&mut self, request: &PageRequest, generation: u64) {
        if matches!(
            self.entries.get(request),
            Some(CacheEntry::InFlight { generation: g }) if *g == generation
        ) {
            self.entries.remove(request);
            self.order.retain(|r| r != request);
        }
    }

    pub fn invalidate_all(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn insert(&mut self, request: PageRequest, entry: CacheEntry<T>) {
        if self.entries.insert(request.clone(), entry).is_none() {
            self.order.push_back(request);
            while self.order.len() > self.capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.entries.remove(&oldest);
                }
            }
        }
    }
}
