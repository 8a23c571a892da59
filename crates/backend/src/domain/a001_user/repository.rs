use contracts::domain::a001_user::{UpdateUserDto, User};

use crate::shared::data::store::{get_store, StoreError};

pub fn list_all() -> Result<Vec<User>, StoreError> {
    Ok(get_store()?.users()?.clone())
}

pub fn get_by_id(id: u64) -> Result<Option<User>, StoreError> {
    Ok(get_store()?.users()?.iter().find(|u| u.id == id).cloned())
}

/// Returns the updated record, `None` if no user has this id
pub fn update(id: u64, dto: &UpdateUserDto) -> Result<Option<User>, StoreError> {
    let mut users = get_store()?.users_mut()?;
    let Some(user) = users.iter_mut().find(|u| u.id == id) else {
        return Ok(None);
    };
    user.email = dto.email.trim().to_string();
    user.first_name = dto.first_name.trim().to_string();
    user.last_name = dto.last_name.trim().to_string();
    Ok(Some(user.clone()))
}

pub fn delete(id: u64) -> Result<bool, StoreError> {
    let mut users = get_store()?.users_mut()?;
    let before = users.len();
    users.retain(|u| u.id != id);
    Ok(users.len() != before)
}
