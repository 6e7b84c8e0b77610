use super::super::super::state::{AppState, AppView};
use super::super::action::EntryAction;
use super::super::command::Command;
use super::navigation::switch_to;

pub fn reduce(state: &mut AppState, action: EntryAction) -> Vec<Command> {
    match action {
        EntryAction::SetField(field, value) => {
            state.entry_form.set(field, value);
            Vec::new()
        }
        EntryAction::Submit => match state.entry_form.to_draft() {
            Ok(draft) => vec![Command::InsertUser { draft }],
            Err(err) => {
                state.notify_error(format!("Error: {err}"));
                Vec::new()
            }
        },
        EntryAction::ViewData => switch_to(state, AppView::Display),
    }
}
