pub mod state;

use self::state::{create_state, UserDialog};
use crate::domain::a001_user::api::{delete_user, update_user, USERS_PATH};
use crate::shared::collection::RestCollection;
use crate::shared::components::paged_table::PagedTable;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a001_user::{UpdateUserDto, User};
use contracts::shared::paging::{Column, EndpointConvention, ViewerConfig};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("avatar", "Avatar", |u: &User| {
            u.avatar.clone().unwrap_or_default()
        })
        .image()
        .not_sortable(),
        Column::new("id", "ID", |u: &User| u.id.to_string()).align_right(),
        Column::new("first_name", "First name", |u: &User| u.first_name.clone()),
        Column::new("last_name", "Last name", |u: &User| u.last_name.clone()),
        Column::new("email", "Email", |u: &User| u.email.clone()),
    ]
}

fn users_config() -> ViewerConfig {
    ViewerConfig {
        default_page_size: 5,
        page_size_options: vec![5, 10, 20],
        keep_previous_data: true,
        ..ViewerConfig::default()
    }
}

/// Какой диалог открыт; ввод в форму его не меняет
#[derive(Clone, Debug, PartialEq)]
enum DialogKey {
    Closed,
    Edit(User),
    Delete(User),
}

#[component]
#[allow(non_snake_case)]
pub fn UserList() -> impl IntoView {
    let state = create_state();
    let reload = Signal::derive(move || state.with(|s| s.reload));

    let dialog = Memo::new(move |_| {
        state.with(|s| match &s.dialog {
            UserDialog::Closed => DialogKey::Closed,
            UserDialog::Edit { user, .. } => DialogKey::Edit(user.clone()),
            UserDialog::ConfirmDelete(user) => DialogKey::Delete(user.clone()),
        })
    });

    let close = Callback::new(move |_: ()| state.update(|s| s.close()));

    let save = move || {
        let Some((id, form)) = state.with_untracked(|s| match &s.dialog {
            UserDialog::Edit { user, form } => Some((user.id, form.clone())),
            _ => None,
        }) else {
            return;
        };
        if let Err(e) = form.validate() {
            state.update(|s| s.error = Some(e));
            return;
        }
        state.update(|s| s.saving = true);
        spawn_local(async move {
            match update_user(id, &form).await {
                Ok(user) => {
                    log!("Updated user {}", user.id);
                    state.update(|s| s.mutation_done());
                }
                Err(e) => {
                    log!("Failed to update user {}: {}", id, e);
                    state.update(|s| s.mutation_failed(e));
                }
            }
        });
    };

    let confirm_delete = move || {
        let Some(id) = state.with_untracked(|s| match &s.dialog {
            UserDialog::ConfirmDelete(user) => Some(user.id),
            _ => None,
        }) else {
            return;
        };
        state.update(|s| s.saving = true);
        spawn_local(async move {
            match delete_user(id).await {
                Ok(()) => {
                    log!("Deleted user {}", id);
                    state.update(|s| s.mutation_done());
                }
                Err(e) => {
                    log!("Failed to delete user {}: {}", id, e);
                    state.update(|s| s.mutation_failed(e));
                }
            }
        });
    };

    let form_field = move |label: &'static str,
                           get: fn(&UpdateUserDto) -> String,
                           set: fn(&mut UpdateUserDto, String)| {
        view! {
            <label class="form__field">
                <span class="form__label">{label}</span>
                <input
                    class="form__input"
                    prop:value=move || {
                        state.with(|s| match &s.dialog {
                            UserDialog::Edit { form, .. } => get(form),
                            _ => String::new(),
                        })
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| {
                            if let UserDialog::Edit { form, .. } = &mut s.dialog {
                                set(form, value);
                            }
                        });
                    }
                />
            </label>
        }
    };

    let saving = Signal::derive(move || state.with(|s| s.saving));
    let dialog_error = move || {
        state
            .with(|s| s.error.clone())
            .map(|err| view! { <div class="alert alert--error">{err}</div> })
    };

    view! {
        <PageFrame page_id="a001_user--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                </div>
            </div>

            <div class="page__content">
                <PagedTable
                    endpoint=RestCollection::new(USERS_PATH, EndpointConvention::data_total_envelope())
                    columns=user_columns()
                    config=users_config()
                    on_edit=Callback::new(move |user: User| state.update(|s| s.open_edit(user)))
                    on_delete=Callback::new(move |user: User| state.update(|s| s.open_delete(user)))
                    reload=reload
                />
            </div>

            {move || match dialog.get() {
                DialogKey::Closed => ().into_any(),
                DialogKey::Edit(user) => view! {
                    <Modal
                        title=format!("Edit {}", user.full_name())
                        description="Changes are saved to the demo server."
                        on_close=close
                    >
                        <div class="form">
                            {form_field("First name", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                            {form_field("Last name", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                            {form_field("Email", |f| f.email.clone(), |f, v| f.email = v)}
                        </div>
                        {dialog_error}
                        <div class="modal-actions">
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| close.run(())>
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| save()
                                disabled=saving
                            >
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </Button>
                        </div>
                    </Modal>
                }
                .into_any(),
                DialogKey::Delete(user) => view! {
                    <Modal
                        title="Delete user"
                        description=format!("{} <{}> will be removed.", user.full_name(), user.email)
                        on_close=close
                    >
                        {dialog_error}
                        <div class="modal-actions">
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| close.run(())>
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| confirm_delete()
                                disabled=saving
                            >
                                "Delete"
                            </Button>
                        </div>
                    </Modal>
                }
                .into_any(),
            }}
        </PageFrame>
    }
}
