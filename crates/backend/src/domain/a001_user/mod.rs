pub mod repository;
pub mod service;

use contracts::domain::a001_user::User;
use std::cmp::Ordering;

use crate::shared::list_query::Sortable;

impl Sortable for User {
    const SORT_FIELDS: &'static [&'static str] = &["id", "email", "first_name", "last_name"];

    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "email" => self.email.to_lowercase().cmp(&other.email.to_lowercase()),
            "first_name" => self.first_name.cmp(&other.first_name),
            "last_name" => self.last_name.cmp(&other.last_name),
            _ => self.id.cmp(&other.id),
        }
        .then_with(|| self.id.cmp(&other.id))
    }
}
