use super::error::FetchError;
use super::request::{PageRequest, PageResult};
use super::viewer::{FetchTicket, PagedViewer, Resolution};
use std::future::Future;

/// Внешний источник страниц (REST-эндпоинт или заглушка в тестах)
pub trait CollectionEndpoint<T> {
    fn fetch_page(
        &self,
        request: &PageRequest,
    ) -> impl Future<Output = Result<PageResult<T>, FetchError>>;
}

/// Выполнить тикет и все догрузки, которые вьюер запросит в ответ.
///
/// Для однопоточного кода, где между выдачей тикета и его выполнением
/// состояние не меняется (тесты, простые клиенты).
pub async fn run_to_completion<T, E>(
    viewer: &mut PagedViewer<T>,
    endpoint: &E,
    ticket: FetchTicket,
) -> Resolution
where
    T: Clone,
    E: CollectionEndpoint<T>,
{
    let mut ticket = ticket;
    loop {
        let outcome = endpoint.fetch_page(&ticket.request).await;
        match viewer.resolve(ticket.generation, outcome) {
            Resolution::Refetch(next) => ticket = next,
            other => return other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::paging::column::Column;
    use crate::shared::paging::endpoint::EndpointConvention;
    use crate::shared::paging::viewer::{FetchStatus, ViewerConfig};
    use futures::executor::block_on;
    use serde::{Deserialize, Serialize};
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: u64,
        name: String,
    }

    /// Эмулирует сервер с 1-based страницами и конвертом `{ data, total }`
    struct EnvelopeServer {
        items: Vec<Item>,
        convention: EndpointConvention,
        fail_next: RefCell<bool>,
    }

    impl EnvelopeServer {
        fn new(count: u64) -> Self {
            Self {
                items: (1..=count)
                    .map(|id| Item {
                        id,
                        name: format!("item {}", id),
                    })
                    .collect(),
                convention: EndpointConvention::data_total_envelope(),
                fail_next: RefCell::new(false),
            }
        }

        fn respond(&self, request: &PageRequest) -> String {
            let pairs = self.convention.query_pairs(request);
            let param = |name: &str| {
                pairs
                    .iter()
                    .find(|(k, _)| k == name)
                    .map(|(_, v)| v.parse::<usize>().unwrap())
                    .unwrap()
            };
            let page = param("page");
            let per_page = param("per_page");
            let data: Vec<&Item> = self
                .items
                .iter()
                .skip((page - 1) * per_page)
                .take(per_page)
                .collect();
            serde_json::json!({ "data": data, "total": self.items.len(), "page": page })
                .to_string()
        }
    }

    impl CollectionEndpoint<Item> for EnvelopeServer {
        async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult<Item>, FetchError> {
            if self.fail_next.replace(false) {
                return Err(FetchError::Status {
                    status: 500,
                    message: "Internal Server Error".into(),
                });
            }
            let body = self.respond(request);
            self.convention.parse_page(&body, None)
        }
    }

    fn viewer() -> PagedViewer<Item> {
        PagedViewer::new(
            ViewerConfig::default(),
            vec![Column::new("id", "ID", |i: &Item| i.id.to_string())],
        )
    }

    fn ids(viewer: &PagedViewer<Item>) -> Vec<u64> {
        viewer.rows().iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_envelope_with_25_items() {
        let server = EnvelopeServer::new(25);
        let mut v = viewer();

        let ticket = v.start().unwrap();
        block_on(run_to_completion(&mut v, &server, ticket));
        assert_eq!(ids(&v), (1..=10).collect::<Vec<_>>());
        assert_eq!(v.page_count(), 3);

        let ticket = v.last_page().unwrap();
        block_on(run_to_completion(&mut v, &server, ticket));
        assert_eq!(ids(&v), (21..=25).collect::<Vec<_>>());
        assert!(!v.controls().can_next);
        assert!(v.controls().can_previous);
    }

    #[test]
    fn test_server_error_then_retry() {
        let server = EnvelopeServer::new(4);
        *server.fail_next.borrow_mut() = true;
        let mut v = viewer();

        let ticket = v.start().unwrap();
        block_on(run_to_completion(&mut v, &server, ticket));
        assert!(matches!(v.status(), FetchStatus::Failed { .. }));

        let ticket = v.retry().unwrap();
        assert!(v.is_loading());
        assert_eq!(
            block_on(run_to_completion(&mut v, &server, ticket)),
            Resolution::Applied
        );
        assert_eq!(ids(&v), vec![1, 2, 3, 4]);
    }
}
