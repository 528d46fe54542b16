//! HTTP error responses.
//!
//! Every failure leaves a handler as `{"error": CODE, "message": text}` with
//! the status from [`AppError::status_code`]. Server-side messages are
//! logged and replaced with a generic one.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hipoteca_core::identity::DniError;
use hipoteca_db::repositories::{ClientError, MortgageError};
use hipoteca_shared::AppError;
use serde::Serialize;
use tracing::error;

/// Error returned by handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl ApiError {
    /// Shorthand for a 422 validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self(AppError::Validation(message.into()))
    }

    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if self.0.is_client_error() {
            self.0.message().to_string()
        } else {
            error!(error = %self.0, "Request failed");
            "An error occurred".to_string()
        };

        let body = ErrorBody {
            error: self.0.error_code(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DniError> for ApiError {
    fn from(err: DniError) -> Self {
        Self(err.into())
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        Self(err.into())
    }
}

impl From<MortgageError> for ApiError {
    fn from(err: MortgageError) -> Self {
        Self(err.into())
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self(AppError::Database(err.to_string()))
    }
}
