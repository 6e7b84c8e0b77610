use super::super::super::UserManagerApp;
use super::super::action::{Action, AsyncAction};
use super::super::command::UserDataRefreshReason;
use crate::domain::{UserDraft, UserId};

pub fn insert_user(app: &mut UserManagerApp, draft: UserDraft) {
    let result = app.user_repo.insert(&draft).map_err(|e| e.to_string());
    if let Ok(id) = &result {
        log::info!("added user {} ({})", id, draft.national_id);
    }

    app.dispatch(Action::Async(AsyncAction::UserInserted(result)));
}

pub fn refresh_users(app: &mut UserManagerApp, reason: UserDataRefreshReason) {
    let result = app.user_repo.list_all().map_err(|e| e.to_string());

    app.dispatch(Action::Async(AsyncAction::UsersLoaded { reason, result }));
}

pub fn update_user(app: &mut UserManagerApp, id: UserId, draft: UserDraft) {
    let result = app.user_repo.update(id, &draft).map_err(|e| e.to_string());
    if result.is_ok() {
        log::info!("updated user {}", id);
    }

    app.dispatch(Action::Async(AsyncAction::UserUpdated(result)));
}

pub fn delete_user(app: &mut UserManagerApp, id: UserId) {
    let result = app.user_repo.delete(id).map_err(|e| e.to_string());
    match &result {
        Ok(true) => log::info!("deleted user {}", id),
        Ok(false) => log::debug!("delete of missing user {} was a no-op", id),
        Err(_) => {}
    }

    app.dispatch(Action::Async(AsyncAction::UserDeleted(result)));
}
