use crate::application::form::UserForm;
use crate::domain::{UserId, UserRecord};

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Login,
    Entry,
    Display,
}

impl AppView {
    pub const ALL: [AppView; 3] = [AppView::Login, AppView::Entry, AppView::Display];

    pub fn label(self) -> &'static str {
        match self {
            AppView::Login => "Login",
            AppView::Entry => "Entry",
            AppView::Display => "Display",
        }
    }

    /// Screens that need a successful login first.
    pub fn requires_login(self) -> bool {
        !matches!(self, AppView::Login)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub username: String,
    pub password: String,
}

/// Edit dialog bound to one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDialog {
    pub user_id: UserId,
    pub form: UserForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Idle,
    EditDialogOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Transient notification. `seq` changes every time a new toast replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub seq: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// All app state in one struct.
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: AppView,
    pub authenticated: bool,
    pub login: LoginState,
    pub entry_form: UserForm,
    /// Display-local copy of the table, replaced wholesale on every refresh.
    pub users: Vec<UserRecord>,
    pub edit_dialog: Option<EditDialog>,
    pub toast: Option<Toast>,
    pub(crate) next_toast_seq: u64,
}

impl AppState {
    pub fn display_mode(&self) -> DisplayMode {
        if self.edit_dialog.is_some() {
            DisplayMode::EditDialogOpen
        } else {
            DisplayMode::Idle
        }
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.push_toast(ToastKind::Info, message.into());
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.push_toast(ToastKind::Error, message.into());
    }

    fn push_toast(&mut self, kind: ToastKind, message: String) {
        self.next_toast_seq += 1;
        self.toast = Some(Toast {
            seq: self.next_toast_seq,
            kind,
            message,
        });
    }
}
