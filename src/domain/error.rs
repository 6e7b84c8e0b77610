//! Domain error types for the user registry.
//!
//! Every failure a user-facing operation can produce maps onto one of these
//! variants. The UI layer flattens them into a single notification; the CLI
//! propagates them through `anyhow`.

use thiserror::Error;

use super::UserId;

/// Errors raised by form coercion and by the record store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    /// A field failed type coercion. Raised before the store is reached.
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// A write would give two records the same national ID.
    #[error("National ID {0} is already registered")]
    UniquenessViolation(String),

    #[error("User {0} not found")]
    NotFound(UserId),

    /// The backing store could not be reached or failed for a reason other
    /// than a uniqueness conflict.
    #[error("User store unavailable: {0}")]
    StoreUnavailable(String),
}

impl UserError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        UserError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Whether the failure happened before anything reached the store.
    pub fn is_client_side(&self) -> bool {
        matches!(self, UserError::InvalidInput { .. })
    }
}
