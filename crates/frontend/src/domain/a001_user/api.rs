use crate::shared::api_utils::api_url;
use contracts::domain::a001_user::{UpdateUserDto, User};
use gloo_net::http::Request;

pub const USERS_PATH: &str = "/api/users";

pub async fn update_user(id: u64, dto: &UpdateUserDto) -> Result<User, String> {
    let url = api_url(&format!("{}/{}", USERS_PATH, id));

    let response = Request::put(&url)
        .json(dto)
        .map_err(|e| format!("Failed to serialize: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to update: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    response
        .json::<User>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_user(id: u64) -> Result<(), String> {
    let url = api_url(&format!("{}/{}", USERS_PATH, id));

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to delete: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    Ok(())
}
