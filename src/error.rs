//! Application error taxonomy and HTTP response mapping.
//!
//! Every request-path failure is expressed as an [`AppError`] and rendered as
//! a JSON envelope: `{"error": {"code", "message", "details"}}`. Startup
//! failures (configuration, bind, migrations) go through `anyhow` instead and
//! never reach this type.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Request-path error kinds.
///
/// `NotFound` is a logical outcome, not a crash: lookups, updates and deletes
/// against an unknown `short_id` travel through `Option` in the store and are
/// only turned into this error at the HTTP boundary. `Conflict` is reserved
/// for `short_id` uniqueness violations so callers can tell it apart from
/// `NotFound`. `Database` covers every other persistence failure as a
/// distinct transient kind; it is logged at the conversion site and never
/// swallowed.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    AllocationExhausted { message: String, details: Value },
    #[error("{message}")]
    Database { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn allocation_exhausted(attempts: usize) -> Self {
        Self::AllocationExhausted {
            message: "Failed to allocate a unique short id".to_string(),
            details: json!({ "attempts": attempts }),
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            Self::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            Self::AllocationExhausted { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "allocation_exhausted")
            }
            Self::Database { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
        }
    }

    fn into_parts(self) -> (String, Value) {
        match self {
            Self::Validation { message, details }
            | Self::NotFound { message, details }
            | Self::Conflict { message, details }
            | Self::AllocationExhausted { message, details }
            | Self::Database { message, details } => (message, details),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let (message, details) = self.into_parts();

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Translates sqlx failures in representation, not in kind.
///
/// A unique-constraint violation on `urls.short_id` is the only conflict this
/// schema can produce, so any unique violation maps to [`AppError::Conflict`].
/// Everything else is surfaced as [`AppError::Database`] after logging.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return Self::Conflict {
                message: "Unique constraint violation".to_string(),
                details: json!({ "constraint": db.constraint() }),
            };
        }

        tracing::error!(error = %e, "database error");
        Self::Database {
            message: "Database error".to_string(),
            details: json!({}),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        Self::Validation {
            message: "Request validation failed".to_string(),
            details,
        }
    }
}
