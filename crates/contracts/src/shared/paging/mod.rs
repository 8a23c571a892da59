//! Постраничная загрузка коллекций: ключ страницы, кэш, соглашения эндпоинтов
//! и машина состояний вьюера.

pub mod cache;
pub mod column;
pub mod endpoint;
pub mod error;
pub mod request;
pub mod source;
pub mod viewer;

// Re-exports
pub use cache::{CacheEntry, PageCache};
pub use column::{Align, CellKind, Column};
pub use endpoint::{EndpointConvention, PageLocator, TotalSource};
pub use error::FetchError;
pub use source::CollectionEndpoint;
pub use request::{page_count, PageRequest, PageResult, SortDirection, SortKey, SortSpec};
pub use viewer::{
    FetchStatus, FetchTicket, PagedViewer, PagerControls, Resolution, ViewerConfig,
};
