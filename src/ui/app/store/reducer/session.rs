use super::super::super::state::{AppState, AppView};
use super::super::action::LoginAction;
use super::super::command::Command;

pub fn reduce(state: &mut AppState, action: LoginAction) -> Vec<Command> {
    match action {
        LoginAction::SetUsername(username) => {
            state.login.username = username;
            Vec::new()
        }
        LoginAction::SetPassword(password) => {
            state.login.password = password;
            Vec::new()
        }
        LoginAction::Submit => vec![Command::Authenticate {
            username: state.login.username.clone(),
            password: state.login.password.clone(),
        }],
    }
}

pub fn apply_authentication(state: &mut AppState, accepted: bool) -> Vec<Command> {
    if accepted {
        state.authenticated = true;
        state.login.password.clear();
        state.current_view = AppView::Entry;
    } else {
        state.authenticated = false;
        state.notify_error("Invalid credentials!");
    }
    Vec::new()
}
