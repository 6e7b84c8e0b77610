pub mod async_handler;
pub mod display;
pub mod entry;
pub mod navigation;
pub mod session;

use super::super::state::AppState;
use super::action::Action;
use super::command::Command;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Navigation(action) => navigation::reduce(state, action),
        Action::Login(action) => session::reduce(state, action),
        Action::Entry(action) => entry::reduce(state, action),
        Action::Display(action) => display::reduce(state, action),
        Action::Async(action) => async_handler::reduce(state, action),
        Action::DismissToast => {
            state.toast = None;
            Vec::new()
        }
    }
}
