use contracts::domain::a002_post::Post;

use crate::shared::data::store::get_store;
use crate::shared::list_query::{page_of, ListQuery};

/// Страница постов и общее количество
pub async fn list_paginated(query: &ListQuery) -> anyhow::Result<(Vec<Post>, usize)> {
    let store = get_store()?;
    let posts = store.posts()?;
    Ok(page_of(&posts, query))
}
