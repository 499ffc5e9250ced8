use accounts_sdk::AccountsError;
use thiserror::Error;

/// Message returned when a write carries someone else's account id.
pub const IDENTIFIER_MISMATCH_MESSAGE: &str = "Username and account id do not match.";

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Account not found: {id}")]
    NotFound { id: String },

    #[error("{message}")]
    Forbidden { message: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Anonymous self-registration hit an existing account.
    #[must_use]
    pub fn already_exists(id: &str) -> Self {
        Self::forbidden(format!("User '{id}' already exists"))
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn identifier_mismatch() -> Self {
        Self::validation("data", IDENTIFIER_MISMATCH_MESSAGE)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for AccountsError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { id } => AccountsError::not_found(id),
            DomainError::Forbidden { message } => AccountsError::forbidden(message),
            DomainError::Validation { field, message } => AccountsError::validation(field, message),
            DomainError::Database { .. } => AccountsError::internal(),
        }
    }
}
