use crate::shared::collection::RestCollection;
use crate::shared::components::paged_table::PagedTable;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a002_post::Post;
use contracts::shared::paging::{Column, EndpointConvention, ViewerConfig};
use leptos::prelude::*;

pub const POSTS_PATH: &str = "/api/posts";

pub fn post_columns() -> Vec<Column<Post>> {
    vec![
        Column::new("id", "ID", |p: &Post| p.id.to_string()).align_right(),
        Column::new("userId", "User", |p: &Post| p.user_id.to_string()).align_right(),
        Column::new("title", "Title", |p: &Post| p.title.clone()),
        Column::new("body", "Body", |p: &Post| p.body.clone()).not_sortable(),
    ]
}

/// Посты: placeholder-API соглашение (`_page`/`_limit`, total в `X-Total-Count`)
#[component]
#[allow(non_snake_case)]
pub fn PostList() -> impl IntoView {
    view! {
        <PageFrame page_id="a002_post--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Posts"</h1>
                </div>
            </div>

            <div class="page__content">
                <PagedTable
                    endpoint=RestCollection::new(POSTS_PATH, EndpointConvention::placeholder_api())
                    columns=post_columns()
                    config=ViewerConfig::default()
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_is_the_only_unsortable_column() {
        let unsortable: Vec<_> = post_columns()
            .iter()
            .filter(|c| !c.sortable)
            .map(|c| c.key)
            .collect();
        assert_eq!(unsortable, vec!["body"]);
    }
}
