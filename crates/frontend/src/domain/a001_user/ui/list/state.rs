use contracts::domain::a001_user::{UpdateUserDto, User};
use leptos::prelude::*;

/// Диалог, открытый поверх списка пользователей
#[derive(Clone, Debug, PartialEq)]
pub enum UserDialog {
    Closed,
    Edit { user: User, form: UpdateUserDto },
    ConfirmDelete(User),
}

#[derive(Clone, Debug)]
pub struct UserListState {
    pub dialog: UserDialog,
    pub saving: bool,
    pub error: Option<String>,
    /// Увеличивается после каждой успешной мутации
    pub reload: u64,
}

impl Default for UserListState {
    fn default() -> Self {
        Self {
            dialog: UserDialog::Closed,
            saving: false,
            error: None,
            reload: 0,
        }
    }
}

impl UserListState {
    pub fn open_edit(&mut self, user: User) {
        let form = UpdateUserDto::from_user(&user);
        self.dialog = UserDialog::Edit { user, form };
        self.error = None;
    }

    pub fn open_delete(&mut self, user: User) {
        self.dialog = UserDialog::ConfirmDelete(user);
        self.error = None;
    }

    pub fn close(&mut self) {
        self.dialog = UserDialog::Closed;
        self.saving = false;
        self.error = None;
    }

    /// Мутация прошла: закрыть диалог и перезагрузить таблицу
    pub fn mutation_done(&mut self) {
        self.close();
        self.reload += 1;
    }

    pub fn mutation_failed(&mut self, error: String) {
        self.saving = false;
        self.error = Some(error);
    }
}

pub fn create_state() -> RwSignal<UserListState> {
    RwSignal::new(UserListState::default())
}
