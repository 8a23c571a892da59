use serde::{Deserialize, Serialize};

/// Запись демо-коллекции `/api/posts` (формат placeholder API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}
