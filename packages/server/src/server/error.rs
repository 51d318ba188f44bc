//! HTTP mapping for application errors

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::common::AppError;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicateEmail => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error while handling request");
                "Internal server error".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!(error = ?e, "Internal error while handling request");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let mut error = serde_json::json!({
            "code": status.as_u16(),
            "message": message,
        });
        if let AppError::Validation {
            fields: Some(fields),
            ..
        } = &self
        {
            error["fields"] = serde_json::to_value(fields).unwrap_or_default();
        }

        let mut response = (status, Json(serde_json::json!({ "error": error }))).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}
