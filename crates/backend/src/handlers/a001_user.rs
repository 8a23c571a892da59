use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_user::{UpdateUserDto, User};
use contracts::shared::paging::page_count;
use serde::{Deserialize, Serialize};

use crate::domain::a001_user;
use crate::shared::config;
use crate::shared::list_query::ListQuery;

#[derive(Deserialize)]
pub struct UserListParams {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Конверт ответа: страницы с 1, строки в `data`
#[derive(Serialize)]
pub struct UserPageResponse {
    pub data: Vec<User>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

/// GET /api/users
pub async fn list_paginated(
    Query(params): Query<UserListParams>,
) -> Result<Json<UserPageResponse>, StatusCode> {
    let query = ListQuery::from_page_params::<User>(
        params.page,
        params.per_page,
        params.sort_by.as_deref(),
        params.order.as_deref(),
        &config::paging(),
    )
    .map_err(|e| {
        tracing::warn!("Rejected user list query: {}", e);
        StatusCode::BAD_REQUEST
    })?;

    match a001_user::service::list_paginated(&query).await {
        Ok((data, total)) => Ok(Json(UserPageResponse {
            data,
            total,
            page: query.page(),
            per_page: query.limit,
            total_pages: page_count(total, query.limit),
        })),
        Err(e) => {
            tracing::error!("Failed to list users: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/users/:id
pub async fn get_by_id(Path(id): Path<u64>) -> Result<Json<User>, StatusCode> {
    match a001_user::service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// PUT /api/users/:id
pub async fn update(
    Path(id): Path<u64>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<Json<User>, StatusCode> {
    if let Err(e) = dto.validate() {
        tracing::warn!("Rejected update for user {}: {}", id, e);
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    match a001_user::service::update(id, dto).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to update user {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/users/:id
pub async fn delete(Path(id): Path<u64>) -> Result<(), StatusCode> {
    match a001_user::service::delete(id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete user {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_field_names() {
        let response = UserPageResponse {
            data: vec![],
            total: 25,
            page: 3,
            per_page: 10,
            total_pages: page_count(25, 10),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["total"], 25);
        assert_eq!(json["total_pages"], 3);
        assert!(json["data"].as_array().unwrap().is_empty());
    }
}
