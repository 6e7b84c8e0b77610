pub mod session;
pub mod users;

#[cfg(test)]
mod tests;

use super::super::UserManagerApp;
use super::command::Command;

pub fn run(app: &mut UserManagerApp, command: Command) {
    match command {
        Command::Authenticate { username, password } => {
            session::authenticate(app, username, password)
        }
        Command::InsertUser { draft } => users::insert_user(app, draft),
        Command::RefreshUsers { reason } => users::refresh_users(app, reason),
        Command::UpdateUser { id, draft } => users::update_user(app, id, draft),
        Command::DeleteUser { id } => users::delete_user(app, id),
    }
}
