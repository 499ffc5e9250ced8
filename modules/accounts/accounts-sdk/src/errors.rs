//! Public error types for the `accounts` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `AccountsApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountsError {
    /// No account with this id is visible to the caller.
    #[error("Account not found: {id}")]
    NotFound { id: String },

    /// The operation is refused for this caller.
    #[error("{message}")]
    Forbidden { message: String },

    /// Submitted data is invalid for this caller.
    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    /// An internal error occurred.
    #[error("Internal error")]
    Internal,
}

impl AccountsError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
