use thiserror::Error;

/// Authentication and authorization errors for the leads API
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
