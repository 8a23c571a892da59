use axum::{
    routing::get,
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Users: 1-based page/per_page, конверт { data, total }
        .route("/api/users", get(handlers::a001_user::list_paginated))
        .route(
            "/api/users/:id",
            get(handlers::a001_user::get_by_id)
                .put(handlers::a001_user::update)
                .delete(handlers::a001_user::delete),
        )
        // A002 Posts: _page/_limit, массив + X-Total-Count
        .route("/api/posts", get(handlers::a002_post::list_paginated))
}
