use super::repository;
use contracts::domain::a001_user::{UpdateUserDto, User};

use crate::shared::list_query::{page_of, ListQuery};

/// Страница пользователей и общее количество
pub async fn list_paginated(query: &ListQuery) -> anyhow::Result<(Vec<User>, usize)> {
    let users = repository::list_all()?;
    Ok(page_of(&users, query))
}

pub async fn get_by_id(id: u64) -> anyhow::Result<Option<User>> {
    Ok(repository::get_by_id(id)?)
}

/// Обновление пользователя
pub async fn update(id: u64, dto: UpdateUserDto) -> anyhow::Result<Option<User>> {
    let updated = repository::update(id, &dto)?;
    if updated.is_some() {
        tracing::info!("User {} updated", id);
    }
    Ok(updated)
}

pub async fn delete(id: u64) -> anyhow::Result<bool> {
    let removed = repository::delete(id)?;
    if removed {
        tracing::info!("User {} deleted", id);
    }
    Ok(removed)
}
