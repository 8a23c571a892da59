use serde::{Deserialize, Serialize};

/// Пользователь демо-коллекции `/api/users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Ссылка на аватар; у части записей отсутствует
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// DTO для `PUT /api/users/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UpdateUserDto {
    pub fn from_user(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }

    /// Validate before sending to the server
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("First name must not be empty".into());
        }
        if self.last_name.trim().is_empty() {
            return Err("Last name must not be empty".into());
        }
        if !self.email.contains('@') {
            return Err("Email must contain '@'".into());
        }
        Ok(())
    }
}
