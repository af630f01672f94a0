use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::CoreError;
use folio_store::StoreError;

use crate::response::Envelope;

/// Application-level error type for API handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for file
/// access. Implements [`IntoResponse`] to produce a failure envelope.
///
/// Record-level outcomes (missing parameter, unknown id) keep HTTP 200 and
/// are reported only through `success: false`; file and JSON failures are
/// 500s.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reading or writing a collection file.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status the error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(err) | AppError::Store(StoreError::Rejected(err)) => core_status(err),
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "API action failed");
        } else {
            tracing::debug!(reason = %self, "API action rejected");
        }
        Envelope::failure(self.to_string()).with_status(status)
    }
}
