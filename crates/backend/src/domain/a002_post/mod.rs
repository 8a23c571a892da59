pub mod service;

use contracts::domain::a002_post::Post;
use std::cmp::Ordering;

use crate::shared::list_query::Sortable;

impl Sortable for Post {
    const SORT_FIELDS: &'static [&'static str] = &["id", "userId", "title"];

    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "userId" => self.user_id.cmp(&other.user_id),
            "title" => self.title.cmp(&other.title),
            _ => self.id.cmp(&other.id),
        }
        .then_with(|| self.id.cmp(&other.id))
    }
}
