use modkit_errors::{Problem, ValidationViolation, finalize};

use crate::domain::error::DomainError;
use crate::errors::ErrorCode;

/// Map domain error to RFC 9457 Problem using the accounts error catalog.
///
/// Forbidden and validation messages reach the caller unmodified; storage
/// failures are logged and replaced by a generic detail.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let problem = match e {
        DomainError::NotFound { id } => {
            ErrorCode::NOT_FOUND.as_problem(format!("Account '{id}' not found"))
        }
        DomainError::Forbidden { message } => {
            tracing::warn!(error = ?e, "Access forbidden");
            ErrorCode::FORBIDDEN.as_problem(message.clone())
        }
        DomainError::Validation { field, message } => ErrorCode::INVALID
            .as_problem(message.clone())
            .with_violation(ValidationViolation::new(field.clone(), message.clone())),
        DomainError::Database { .. } => {
            tracing::error!(error = ?e, "Database error occurred");
            ErrorCode::INTERNAL.as_problem("An internal database error occurred")
        }
    };

    finalize(problem, instance, trace_id)
}

/// Implement From<DomainError> for Problem so `?` works in handlers
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/")
    }
}
