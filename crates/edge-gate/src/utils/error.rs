use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Inline page returned for a rejected login.
pub const LOGIN_FAILED_HTML: &str = "<h1>Login fehlgeschlagen</h1><a href=\"/login\">Zurück</a>";

#[derive(Error, Debug)]
pub enum GateError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        match self {
            // Validation failure, bukan server error: tidak di-log sebagai error
            GateError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, Html(LOGIN_FAILED_HTML)).into_response()
            }
            GateError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}
