//! Таблица с серверной пагинацией и сортировкой.
//!
//! Компонент владеет одним `PagedViewer` и выполняет его тикеты через
//! `CollectionEndpoint`. Ответы устаревших тикетов вьюер отбрасывает сам,
//! здесь они только логируются.
//!
//! ```rust,ignore
//! <PagedTable
//!     endpoint=RestCollection::new("/api/users", EndpointConvention::data_total_envelope())
//!     columns=user_columns()
//!     on_edit=Callback::new(move |user: User| editing.set(Some(user)))
//!     reload=reload_counter
//! />
//! ```

use crate::shared::icons::icon;
use contracts::shared::paging::{
    Align, CellKind, CollectionEndpoint, Column, FetchStatus, FetchTicket, PagedViewer,
    Resolution, ViewerConfig,
};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::pagination_controls::PaginationControls;
use super::table::SortableHeaderCell;

/// Что показывать в теле таблицы для текущего состояния вьюера
#[derive(Debug, Clone, PartialEq)]
pub enum BodyView<T> {
    Loading,
    Rows { items: Vec<T>, stale: bool },
    Failed(String),
}

pub fn body_view<T: Clone>(viewer: &PagedViewer<T>) -> BodyView<T> {
    match viewer.status() {
        FetchStatus::Idle => BodyView::Loading,
        FetchStatus::Loading {
            stale: Some(result),
            ..
        } => BodyView::Rows {
            items: result.items.clone(),
            stale: true,
        },
        FetchStatus::Loading { .. } => BodyView::Loading,
        FetchStatus::Ready { result, .. } => BodyView::Rows {
            items: result.items.clone(),
            stale: false,
        },
        FetchStatus::Failed { error, .. } => BodyView::Failed(error.user_message().to_string()),
    }
}

/// Текст индикатора загрузки; приглушённые старые строки его не заменяют
pub fn loading_text<T>(body: &BodyView<T>) -> Option<&'static str> {
    match body {
        BodyView::Loading | BodyView::Rows { stale: true, .. } => Some("Загрузка..."),
        _ => None,
    }
}

fn render_cell<T>(column: &Column<T>, item: &T) -> AnyView {
    let value = column.render(item);
    let content = match column.kind {
        CellKind::Image if value.is_empty() => {
            view! { <span class="paged-table__no-image">"—"</span> }.into_any()
        }
        CellKind::Image => {
            view! { <img class="paged-table__image" src=value alt=column.label /> }.into_any()
        }
        CellKind::Text => view! { <span>{value}</span> }.into_any(),
    };
    let style = match column.align {
        Align::Right => "text-align: right; font-variant-numeric: tabular-nums;",
        Align::Left => "",
    };

    view! {
        <TableCell>
            <TableCellLayout truncate=true>
                <div style=style>{content}</div>
            </TableCellLayout>
        </TableCell>
    }
    .into_any()
}

#[component]
pub fn PagedTable<T, E>(
    /// Источник страниц
    endpoint: E,
    /// Колонки в порядке отображения
    columns: Vec<Column<T>>,
    #[prop(optional)] config: Option<ViewerConfig>,
    /// Действие "редактировать" для строки
    #[prop(optional)]
    on_edit: Option<Callback<T>>,
    /// Действие "удалить" для строки
    #[prop(optional)]
    on_delete: Option<Callback<T>>,
    /// Счётчик перезагрузок: каждое изменение сбрасывает кэш и перезапрашивает страницу
    #[prop(optional, into)]
    reload: Option<Signal<u64>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    E: CollectionEndpoint<T> + Clone + Send + Sync + 'static,
{
    let config = config.unwrap_or_default();
    let page_size_options = config.page_size_options.clone();
    let has_actions = on_edit.is_some() || on_delete.is_some();
    let column_span = columns.len() + usize::from(has_actions);

    let viewer = RwSignal::new(PagedViewer::new(config, columns.clone()));
    let endpoint = StoredValue::new(endpoint);

    let run = move |ticket: Option<FetchTicket>| {
        let Some(ticket) = ticket else {
            return;
        };
        let endpoint = endpoint.get_value();
        spawn_local(async move {
            let mut ticket = ticket;
            loop {
                let outcome = endpoint.fetch_page(&ticket.request).await;
                if let Err(e) = &outcome {
                    log!("Page {} failed: {}", ticket.request.page_index, e);
                }
                match viewer.try_update(|v| v.resolve(ticket.generation, outcome)) {
                    Some(Resolution::Refetch(next)) => {
                        log!(
                            "Collection shrank, refetching page {}",
                            next.request.page_index
                        );
                        ticket = next;
                    }
                    Some(Resolution::Discarded) => {
                        log!("Discarded response of generation {}", ticket.generation);
                        break;
                    }
                    Some(Resolution::Applied) | None => break,
                }
            }
        });
    };

    run(viewer.try_update(|v| v.start()).flatten());

    if let Some(reload) = reload {
        Effect::new(move |prev: Option<u64>| {
            let current = reload.get();
            if prev.is_some_and(|p| p != current) {
                run(viewer.try_update(|v| v.invalidate()).flatten());
            }
            current
        });
    }

    let header_cells = columns
        .iter()
        .copied()
        .map(|column| {
            let align = match column.align {
                Align::Right => "right",
                Align::Left => "left",
            };
            if column.sortable {
                let key = column.key;
                view! {
                    <SortableHeaderCell
                        label=column.label
                        sort_field=key
                        direction=Signal::derive(move || viewer.with(|v| v.sort().direction_of(key)))
                        on_sort=Callback::new(move |field: String| {
                            run(viewer.try_update(|v| v.toggle_sort(&field)).flatten())
                        })
                        align=align
                    />
                }
                .into_any()
            } else {
                view! {
                    <TableHeaderCell resizable=false min_width=80.0>
                        {column.label}
                    </TableHeaderCell>
                }
                .into_any()
            }
        })
        .collect_view();

    let row_view = move |item: T| {
        let cells = columns
            .iter()
            .map(|column| render_cell(column, &item))
            .collect_view();
        let actions = has_actions.then(|| {
            let edit = on_edit.map(|callback| {
                let item = item.clone();
                view! {
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| callback.run(item.clone())
                    >
                        {icon("edit")}
                    </Button>
                }
            });
            let delete = on_delete.map(|callback| {
                let item = item.clone();
                view! {
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| callback.run(item.clone())
                    >
                        {icon("trash")}
                    </Button>
                }
            });
            view! {
                <TableCell>
                    <div class="paged-table__actions">{edit}{delete}</div>
                </TableCell>
            }
        });
        view! { <TableRow>{cells}{actions}</TableRow> }
    };

    view! {
        <div class="paged-table">
            <div class="paged-table__toolbar">
                <PaginationControls
                    controls=Signal::derive(move || viewer.with(|v| v.controls()))
                    page_size=Signal::derive(move || viewer.with(|v| v.page_size()))
                    on_page_change=Callback::new(move |page: usize| {
                        run(viewer.try_update(|v| v.set_page_index(page)).flatten())
                    })
                    on_page_size_change=Callback::new(move |size: usize| {
                        run(viewer.try_update(|v| v.set_page_size(size)).flatten())
                    })
                    page_size_options=page_size_options
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| run(viewer.try_update(|v| v.invalidate()).flatten())
                    disabled=Signal::derive(move || viewer.with(|v| v.is_loading()))
                >
                    {icon("refresh")}
                    " Обновить"
                </Button>
            </div>

            {move || {
                let body = viewer.with(body_view);
                if let Some(text) = loading_text(&body) {
                    return view! { <div class="paged-table__status">{text}</div> }.into_any();
                }
                match body {
                    BodyView::Failed(message) => view! {
                        <div class="alert alert--error">
                            <span>{message}</span>
                            <Button
                                appearance=ButtonAppearance::Primary
                                size=ButtonSize::Small
                                on_click=move |_| run(viewer.try_update(|v| v.retry()).flatten())
                            >
                                "Retry"
                            </Button>
                        </div>
                    }
                    .into_any(),
                    _ => ().into_any(),
                }
            }}

            <div class=move || {
                if viewer.with(|v| v.stale_rows().is_some()) {
                    "table-wrapper table-wrapper--stale"
                } else {
                    "table-wrapper"
                }
            }>
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header_cells}
                            {has_actions.then(|| view! {
                                <TableHeaderCell resizable=false min_width=90.0>"Actions"</TableHeaderCell>
                            })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || match viewer.with(body_view) {
                            BodyView::Rows { items, stale } if items.is_empty() && !stale => view! {
                                <tr>
                                    <td class="paged-table__empty" colspan=column_span>"Нет данных"</td>
                                </tr>
                            }
                            .into_any(),
                            BodyView::Rows { items, .. } => {
                                items.into_iter().map(row_view.clone()).collect_view().into_any()
                            }
                            _ => ().into_any(),
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::paging::{FetchError, PageResult};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u64,
    }

    fn viewer(keep_previous_data: bool) -> PagedViewer<Row> {
        PagedViewer::new(
            ViewerConfig {
                keep_previous_data,
                ..ViewerConfig::default()
            },
            vec![Column::new("id", "ID", |r: &Row| r.id.to_string())],
        )
    }

    fn page(ids: std::ops::RangeInclusive<u64>, total: usize) -> PageResult<Row> {
        PageResult::new(ids.map(|id| Row { id }).collect(), total)
    }

    #[test]
    fn test_body_follows_fetch_status() {
        let mut v = viewer(false);
        assert_eq!(body_view(&v), BodyView::Loading);

        let ticket = v.start().unwrap();
        assert_eq!(body_view(&v), BodyView::Loading);

        v.resolve(ticket.generation, Ok(page(1..=10, 25)));
        match body_view(&v) {
            BodyView::Rows { items, stale } => {
                assert_eq!(items.len(), 10);
                assert!(!stale);
            }
            other => panic!("unexpected body: {:?}", other),
        }

        let ticket = v.next_page().unwrap();
        v.resolve(
            ticket.generation,
            Err(FetchError::Transport("offline".into())),
        );
        assert_eq!(
            body_view(&v),
            BodyView::Failed("Failed to load data".to_string())
        );
    }

    #[test]
    fn test_stale_rows_shown_while_loading() {
        let mut v = viewer(true);
        let ticket = v.start().unwrap();
        v.resolve(ticket.generation, Ok(page(1..=10, 25)));

        v.next_page().unwrap();
        match body_view(&v) {
            BodyView::Rows { items, stale } => {
                assert!(stale);
                assert_eq!(items.first(), Some(&Row { id: 1 }));
            }
            other => panic!("unexpected body: {:?}", other),
        }
        assert_eq!(loading_text(&body_view(&v)), Some("Загрузка..."));
    }

    #[test]
    fn test_loading_text_hidden_once_ready() {
        let mut v = viewer(true);
        assert_eq!(loading_text(&body_view(&v)), Some("Загрузка..."));

        let ticket = v.start().unwrap();
        v.resolve(ticket.generation, Ok(page(1..=10, 25)));
        assert_eq!(loading_text(&body_view(&v)), None);
    }
}
