//! Application error kinds shared by every domain action.
//!
//! Actions return `Result<T, AppError>`; the HTTP layer turns each kind into a
//! stable status code (see `server::error`).

use thiserror::Error;
use validator::ValidationErrors;

use super::auth::AuthError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Not authenticated")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Not permitted: {0}")]
    Forbidden(String),

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        fields: Option<ValidationErrors>,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Validation failure without per-field detail (malformed body, bad path)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            fields: None,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation {
            message: "Request payload failed validation".to_string(),
            fields: Some(errors),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::AuthenticationRequired | AuthError::InvalidToken => Self::Unauthorized,
            AuthError::PermissionDenied(reason) => Self::Forbidden(reason),
            AuthError::InternalError(e) => Self::Internal(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_collapse_to_unauthorized() {
        assert!(matches!(
            AppError::from(AuthError::InvalidToken),
            AppError::Unauthorized
        ));
        assert!(matches!(
            AppError::from(AuthError::AuthenticationRequired),
            AppError::Unauthorized
        ));
    }

    #[test]
    fn test_permission_denied_becomes_forbidden() {
        let err = AppError::from(AuthError::PermissionDenied("not assigned".to_string()));
        assert!(matches!(err, AppError::Forbidden(ref reason) if reason == "not assigned"));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(AppError::NotFound("Lead").to_string(), "Lead not found");
    }
}
