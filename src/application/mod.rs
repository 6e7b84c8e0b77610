//! Application layer: use-case logic that sits between the UI store and the record store.

pub mod auth;
pub mod form;
