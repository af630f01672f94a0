//! The `{ success, data?, message? }` envelope every API action returns.
//!
//! Use [`Envelope`] instead of ad-hoc `serde_json::json!` so that the
//! success flag and optional fields are always serialized the same way.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Content type of every envelope response.
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Standard response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Envelope::data(projects))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    /// Success carrying a payload.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Success carrying a payload and a human-readable note.
    pub fn data_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl Envelope<()> {
    /// Success with only a note.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Failure with a note.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl<T: Serialize> Envelope<T> {
    /// Serialize with an explicit status code.
    pub fn with_status(self, status: StatusCode) -> Response {
        match serde_json::to_vec(&self) {
            Ok(body) => (
                status,
                [(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
                body,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize response envelope");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
                    r#"{"success":false,"message":"response serialization failed"}"#,
                )
                    .into_response()
            }
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    /// Envelopes go out as 200; failure is signalled by `success: false`.
    fn into_response(self) -> Response {
        self.with_status(StatusCode::OK)
    }
}
