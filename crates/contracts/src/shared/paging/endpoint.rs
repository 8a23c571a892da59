//! Описание соглашений конкретного REST-эндпоинта о пагинации.
//!
//! Эндпоинты различаются: номер страницы с 0 или с 1, `per_page` или `_limit`,
//! конверт `{ data, total }` или голый массив с total в заголовке ответа.
//! Вьюер работает только с `PageRequest`/`PageResult`, а перевод в параметры
//! запроса и обратно делается здесь.

use super::error::FetchError;
use super::request::{PageRequest, PageResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Как в запросе передаётся позиция страницы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLocator {
    /// Номер страницы; `base` = 0 или 1
    Page { param: String, base: usize },
    /// Смещение первой строки (limit/offset)
    Offset { param: String },
}

/// Откуда берётся общее количество записей
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum TotalSource {
    Field { name: String },
    Header { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConvention {
    pub page: PageLocator,
    pub size_param: String,
    #[serde(default)]
    pub sort_param: Option<String>,
    #[serde(default)]
    pub order_param: Option<String>,
    /// Поле конверта с массивом; `None` = тело ответа и есть массив
    #[serde(default)]
    pub items_field: Option<String>,
    pub total: TotalSource,
}

impl EndpointConvention {
    /// `?page=1&per_page=10` (1-based) with a `{ data, total }` envelope
    pub fn data_total_envelope() -> Self {
        Self {
            page: PageLocator::Page {
                param: "page".into(),
                base: 1,
            },
            size_param: "per_page".into(),
            sort_param: Some("sort_by".into()),
            order_param: Some("order".into()),
            items_field: Some("data".into()),
            total: TotalSource::Field {
                name: "total".into(),
            },
        }
    }

    /// `?_page=1&_limit=10` (1-based), bare array body, total in `X-Total-Count`
    pub fn placeholder_api() -> Self {
        Self {
            page: PageLocator::Page {
                param: "_page".into(),
                base: 1,
            },
            size_param: "_limit".into(),
            sort_param: Some("_sort".into()),
            order_param: Some("_order".into()),
            items_field: None,
            total: TotalSource::Header {
                name: "X-Total-Count".into(),
            },
        }
    }

    /// `?offset=100&limit=50&sort_by=..&order=..` with `{ items, total }`
    pub fn limit_offset() -> Self {
        Self {
            page: PageLocator::Offset {
                param: "offset".into(),
            },
            size_param: "limit".into(),
            sort_param: Some("sort_by".into()),
            order_param: Some("order".into()),
            items_field: Some("items".into()),
            total: TotalSource::Field {
                name: "total".into(),
            },
        }
    }

    /// Параметры запроса для страницы (без URL-кодирования)
    pub fn query_pairs(&self, request: &PageRequest) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(4);

        match &self.page {
            PageLocator::Page { param, base } => {
                let page = request.page_index.saturating_add(*base);
                pairs.push((param.clone(), page.to_string()));
            }
            PageLocator::Offset { param } => {
                pairs.push((param.clone(), request.offset().to_string()));
            }
        }
        pairs.push((self.size_param.clone(), request.page_size.to_string()));

        if let Some(key) = request.sort.primary() {
            if let Some(sort_param) = &self.sort_param {
                pairs.push((sort_param.clone(), key.field.clone()));
                if let Some(order_param) = &self.order_param {
                    pairs.push((order_param.clone(), key.direction.as_str().to_string()));
                }
            }
        }

        pairs
    }

    /// Name of the response header carrying the total, if this endpoint uses one
    pub fn total_header(&self) -> Option<&str> {
        match &self.total {
            TotalSource::Header { name } => Some(name),
            TotalSource::Field { .. } => None,
        }
    }

    /// Разбор тела ответа в `PageResult`.
    ///
    /// `header_total`: значение заголовка из `total_header()`, если он есть.
    /// Любое отсутствующее или неверно типизированное поле даёт `FetchError::Malformed`.
    pub fn parse_page<T: DeserializeOwned>(
        &self,
        body: &str,
        header_total: Option<&str>,
    ) -> Result<PageResult<T>, FetchError> {
        let mut value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| FetchError::Malformed(format!("invalid JSON: {}", e)))?;

        let total_count = match &self.total {
            TotalSource::Field { name } => value
                .get(name)
                .and_then(|v| v.as_u64())
                .ok_or_else(|| FetchError::Malformed(format!("missing field `{}`", name)))?
                as usize,
            TotalSource::Header { name } => header_total
                .and_then(|v| v.trim().parse::<usize>().ok())
                .ok_or_else(|| FetchError::Malformed(format!("missing header `{}`", name)))?,
        };

        let items_value = match &self.items_field {
            Some(field) => value
                .get_mut(field)
                .map(serde_json::Value::take)
                .ok_or_else(|| FetchError::Malformed(format!("missing field `{}`", field)))?,
            None => value,
        };

        if !items_value.is_array() {
            return Err(FetchError::Malformed("items are not an array".into()));
        }

        let items: Vec<T> = serde_json::from_value(items_value)
            .map_err(|e| FetchError::Malformed(format!("invalid item: {}", e)))?;

        Ok(PageResult::new(items, total_count))
    }
}
