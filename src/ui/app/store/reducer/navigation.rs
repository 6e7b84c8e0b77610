use super::super::super::state::{AppState, AppView};
use super::super::action::NavigationAction;
use super::super::command::{Command, UserDataRefreshReason};

pub fn reduce(state: &mut AppState, action: NavigationAction) -> Vec<Command> {
    match action {
        NavigationAction::SwitchTo(view) => switch_to(state, view),
    }
}

pub fn switch_to(state: &mut AppState, view: AppView) -> Vec<Command> {
    if view.requires_login() && !state.authenticated {
        state.notify_error("Please log in first");
        return Vec::new();
    }

    state.edit_dialog = None;
    state.current_view = view;

    match view {
        AppView::Login => {
            // Returning to the login screen locks the session again.
            state.authenticated = false;
            state.login.password.clear();
            Vec::new()
        }
        AppView::Entry => Vec::new(),
        AppView::Display => vec![Command::RefreshUsers {
            reason: UserDataRefreshReason::Navigation,
        }],
    }
}
