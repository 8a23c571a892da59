//! REST-реализация `CollectionEndpoint` поверх gloo-net

use contracts::shared::paging::{
    CollectionEndpoint, EndpointConvention, FetchError, PageRequest, PageResult,
};
use gloo_net::http::Request;
use leptos::logging::log;
use serde::de::DeserializeOwned;

use super::api_utils::{api_url, query_string};

/// Коллекция на backend: путь + соглашение о пагинации
#[derive(Clone, Debug)]
pub struct RestCollection {
    pub path: &'static str,
    pub convention: EndpointConvention,
}

impl RestCollection {
    pub fn new(path: &'static str, convention: EndpointConvention) -> Self {
        Self { path, convention }
    }

    pub fn page_url(&self, request: &PageRequest) -> String {
        format!(
            "{}{}",
            api_url(self.path),
            query_string(&self.convention.query_pairs(request))
        )
    }
}

impl<T: DeserializeOwned> CollectionEndpoint<T> for RestCollection {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult<T>, FetchError> {
        let url = self.page_url(request);
        log!("Loading page: {}", url);

        let response = Request::get(&url)
            .header("Cache-Control", "no-cache")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                message: response.status_text(),
            });
        }

        let header_total = self
            .convention
            .total_header()
            .and_then(|name| response.headers().get(name));

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        self.convention.parse_page(&body, header_total.as_deref())
    }
}
