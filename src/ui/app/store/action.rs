use crate::application::form::UserField;
use crate::domain::{UserId, UserRecord};
use crate::ui::app::state::AppView;

use super::command::UserDataRefreshReason;

#[derive(Debug)]
pub enum Action {
    Navigation(NavigationAction),
    Login(LoginAction),
    Entry(EntryAction),
    Display(DisplayAction),
    Async(AsyncAction),
    DismissToast,
}

#[derive(Debug)]
pub enum NavigationAction {
    SwitchTo(AppView),
}

#[derive(Debug)]
pub enum LoginAction {
    SetUsername(String),
    SetPassword(String),
    Submit,
}

#[derive(Debug)]
pub enum EntryAction {
    SetField(UserField, String),
    Submit,
    ViewData,
}

#[derive(Debug)]
pub enum DisplayAction {
    Refresh,
    Edit(UserId),
    SetEditField(UserField, String),
    SaveEdit,
    CancelEdit,
    Delete(UserId),
}

/// Results reported back by the runtime after a command ran.
#[derive(Debug)]
pub enum AsyncAction {
    Authenticated(bool),
    UserInserted(Result<UserId, String>),
    UsersLoaded {
        reason: UserDataRefreshReason,
        result: Result<Vec<UserRecord>, String>,
    },
    UserUpdated(Result<(), String>),
    UserDeleted(Result<bool, String>),
}
