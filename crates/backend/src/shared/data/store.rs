use contracts::domain::a001_user::User;
use contracts::domain::a002_post::Post;
use once_cell::sync::OnceCell;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use super::seed;
use crate::shared::config::SeedConfig;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store is not initialized")]
    NotInitialized,

    #[error("store lock poisoned")]
    Poisoned,
}

/// In-memory хранилище демо-коллекций. Живёт до остановки процесса.
#[derive(Debug, Default)]
pub struct Store {
    users: RwLock<Vec<User>>,
    posts: RwLock<Vec<Post>>,
}

static STORE: OnceCell<Store> = OnceCell::new();

impl Store {
    pub fn seeded(config: &SeedConfig) -> Self {
        Self {
            users: RwLock::new(seed::users(config.users)),
            posts: RwLock::new(seed::posts(config.posts, config.users)),
        }
    }

    pub fn users(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, StoreError> {
        self.users.read().map_err(|_| StoreError::Poisoned)
    }

    pub fn users_mut(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, StoreError> {
        self.users.write().map_err(|_| StoreError::Poisoned)
    }

    pub fn posts(&self) -> Result<RwLockReadGuard<'_, Vec<Post>>, StoreError> {
        self.posts.read().map_err(|_| StoreError::Poisoned)
    }
}

pub fn initialize_store(config: &SeedConfig) -> anyhow::Result<()> {
    STORE
        .set(Store::seeded(config))
        .map_err(|_| anyhow::anyhow!("store already initialized"))?;
    tracing::info!(
        "Seeded demo store: {} users, {} posts",
        config.users,
        config.posts
    );
    Ok(())
}

pub fn get_store() -> Result<&'static Store, StoreError> {
    STORE.get().ok_or(StoreError::NotInitialized)
}
