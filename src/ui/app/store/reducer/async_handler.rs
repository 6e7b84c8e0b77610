use super::super::super::state::AppState;
use super::super::action::AsyncAction;
use super::super::command::{Command, UserDataRefreshReason};
use super::display::apply_users;
use super::session::apply_authentication;

pub fn reduce(state: &mut AppState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::Authenticated(accepted) => apply_authentication(state, accepted),
        AsyncAction::UserInserted(result) => {
            match result {
                Ok(_) => {
                    state.entry_form.clear();
                    state.notify("User added successfully!");
                }
                Err(err) => state.notify_error(format!("Error: {err}")),
            }
            Vec::new()
        }
        AsyncAction::UsersLoaded { reason, result } => {
            match result {
                Ok(users) => {
                    log::debug!("loaded {} users ({:?})", users.len(), reason);
                    apply_users(state, users);
                }
                Err(err) => state.notify_error(format!("Error: {err}")),
            }
            Vec::new()
        }
        AsyncAction::UserUpdated(result) => match result {
            Ok(()) => {
                state.edit_dialog = None;
                state.notify("User updated successfully!");
                vec![Command::RefreshUsers {
                    reason: UserDataRefreshReason::AfterUpdate,
                }]
            }
            Err(err) => {
                state.notify_error(format!("Error: {err}"));
                Vec::new()
            }
        },
        AsyncAction::UserDeleted(result) => {
            match result {
                Ok(_) => state.notify("User deleted successfully!"),
                Err(err) => state.notify_error(format!("Error: {err}")),
            }
            vec![Command::RefreshUsers {
                reason: UserDataRefreshReason::AfterDelete,
            }]
        }
    }
}
