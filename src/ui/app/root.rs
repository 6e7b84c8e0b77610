//! Root egui app struct.

use std::sync::Arc;
use std::time::Instant;

use crate::application::auth::AccessGate;
use crate::infra::db::{Database, UserRepository};

use super::state::AppState;

/// Root egui application for the user registry.
pub struct UserManagerApp {
    pub state: AppState,

    pub user_repo: Arc<UserRepository>,
    pub gate: Arc<AccessGate>,

    /// Sequence number of the toast on screen and when it first appeared.
    pub(crate) toast_shown_at: Option<(u64, Instant)>,
}

impl UserManagerApp {
    pub fn new(db: &Database, gate: AccessGate) -> Self {
        Self {
            state: AppState::default(),
            user_repo: Arc::new(db.user_repo()),
            gate: Arc::new(gate),
            toast_shown_at: None,
        }
    }

    #[cfg(test)]
    pub fn new_for_test() -> Self {
        let db = Database::open_in_memory().expect("in-memory database");
        Self::new(&db, AccessGate::default())
    }
}
