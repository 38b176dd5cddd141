use axum::{http::StatusCode, response::{IntoResponse, Response}};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::failure;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The `Authorization` header is present but is not a bearer token.
    #[error("Authorization header is not a bearer token")]
    MalformedHeader,

    /// The bearer token failed signature or expiry validation.
    #[error("Bearer token is invalid or expired: {0}")]
    InvalidToken(String),

    /// The token is valid but its subject no longer maps to an account.
    #[error("Token subject {0} does not match any account")]
    UnknownSubject(String),

    /// The operation needs an authenticated caller but the request was anonymous.
    #[error("Operation requires an authenticated caller")]
    Unauthenticated,
}

/// Converts authentication errors into `401 Unauthorized` failure envelopes.
///
/// The detail is logged at debug level while the client only sees a generic message,
/// so a caller cannot probe which part of the token was rejected.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::Unauthenticated => "Please login to continue",
            _ => "Invalid or expired token",
        };

        failure(StatusCode::UNAUTHORIZED, message)
    }
}
