//! One module per screen. Each renders from `AppState` and only mutates it through `dispatch`.

pub mod display;
pub mod entry;
pub mod login;
