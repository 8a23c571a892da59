use axum::{
    extract::Query,
    http::{HeaderName, StatusCode},
    response::IntoResponse,
    Json,
};
use contracts::domain::a002_post::Post;
use serde::Deserialize;

use crate::domain::a002_post;
use crate::shared::config;
use crate::shared::list_query::ListQuery;

/// Заголовок с общим количеством записей (формат placeholder API)
pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

#[derive(Deserialize)]
pub struct PostListParams {
    #[serde(rename = "_page")]
    pub page: Option<usize>,
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
    #[serde(rename = "_sort")]
    pub sort: Option<String>,
    #[serde(rename = "_order")]
    pub order: Option<String>,
}

/// GET /api/posts
///
/// Тело: голый массив, total уходит в `X-Total-Count`.
pub async fn list_paginated(
    Query(params): Query<PostListParams>,
) -> Result<impl IntoResponse, StatusCode> {
    let query = ListQuery::from_page_params::<Post>(
        params.page,
        params.limit,
        params.sort.as_deref(),
        params.order.as_deref(),
        &config::paging(),
    )
    .map_err(|e| {
        tracing::warn!("Rejected post list query: {}", e);
        StatusCode::BAD_REQUEST
    })?;

    match a002_post::service::list_paginated(&query).await {
        Ok((items, total)) => Ok(([(TOTAL_COUNT_HEADER, total.to_string())], Json(items))),
        Err(e) => {
            tracing::error!("Failed to list posts: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
