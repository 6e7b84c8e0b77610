//! Application state and UI logic for the user registry.
//!
//! This module contains the egui application state, the reducer-style store,
//! and the root `eframe::App` implementation.

mod header;
mod init;
mod overlay;
mod root;
mod state;
mod store;
mod update;

pub use root::UserManagerApp;
pub use state::{AppState, AppView, DisplayMode, EditDialog, LoginState, Toast, ToastKind};
pub use store::{
    Action, AsyncAction, Command, DisplayAction, EntryAction, LoginAction, NavigationAction,
    UserDataRefreshReason,
};
