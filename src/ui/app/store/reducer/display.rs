use super::super::super::state::{AppState, EditDialog};
use super::super::action::DisplayAction;
use super::super::command::{Command, UserDataRefreshReason};
use crate::application::form::UserForm;
use crate::domain::UserRecord;

pub fn reduce(state: &mut AppState, action: DisplayAction) -> Vec<Command> {
    match action {
        DisplayAction::Refresh => vec![Command::RefreshUsers {
            reason: UserDataRefreshReason::Manual,
        }],
        DisplayAction::Edit(user_id) => {
            if let Some(dialog) = &state.edit_dialog {
                log::debug!(
                    "ignoring edit of {} while {} is being edited",
                    user_id,
                    dialog.user_id
                );
                return Vec::new();
            }
            let Some(form) = state
                .users
                .iter()
                .find(|u| u.id == user_id)
                .map(UserForm::from_record)
            else {
                state.notify_error(format!("Error: User {user_id} is no longer listed"));
                return Vec::new();
            };
            state.edit_dialog = Some(EditDialog { user_id, form });
            Vec::new()
        }
        DisplayAction::SetEditField(field, value) => {
            if let Some(dialog) = state.edit_dialog.as_mut() {
                dialog.form.set(field, value);
            }
            Vec::new()
        }
        DisplayAction::SaveEdit => {
            let Some(dialog) = &state.edit_dialog else {
                return Vec::new();
            };
            let id = dialog.user_id;
            match dialog.form.to_draft() {
                Ok(draft) => vec![Command::UpdateUser { id, draft }],
                Err(err) => {
                    state.notify_error(format!("Error: {err}"));
                    Vec::new()
                }
            }
        }
        DisplayAction::CancelEdit => {
            state.edit_dialog = None;
            Vec::new()
        }
        DisplayAction::Delete(id) => vec![Command::DeleteUser { id }],
    }
}

/// Replace the rendered rows with a fresh snapshot.
pub fn apply_users(state: &mut AppState, users: Vec<UserRecord>) {
    state.users = users;
}
