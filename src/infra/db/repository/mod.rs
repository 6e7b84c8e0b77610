//! Repository implementations for data access.
//!
//! Each repository wraps the shared connection and exposes typed operations;
//! callers never see SQL.

mod user;

pub use user::UserRepository;

use parking_lot::Mutex;
use rusqlite::Connection;
use std::sync::Arc;

pub type DbConn = Arc<Mutex<Connection>>;
