use super::super::super::UserManagerApp;
use super::super::action::{Action, AsyncAction};

pub fn authenticate(app: &mut UserManagerApp, username: String, password: String) {
    let accepted = app.gate.authenticate(&username, &password);
    app.dispatch(Action::Async(AsyncAction::Authenticated(accepted)));
}
