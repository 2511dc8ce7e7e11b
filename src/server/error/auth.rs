use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::pilotes::PilotesError;

/// Failures of the bearer token check.
///
/// Every variant is reported to the caller as `UNAUTHORIZED`; the specific reason is
/// only logged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    /// The request has no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// The token is not a three-part compact JWS or a part failed to decode.
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// The token header names an algorithm other than HS512.
    #[error("Unsupported token algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The HMAC signature does not match the token content.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// The token expiry lies in the past.
    #[error("Token expired at {0}")]
    TokenExpired(i64),

    /// The token is valid but lacks a required authority.
    ///
    /// # Fields
    /// - Token subject
    /// - Missing authority
    #[error("User {0} lacks the {1} authority")]
    MissingAuthority(String, String),
}

/// Converts authentication errors into `UNAUTHORIZED` responses.
///
/// The reason is logged at debug level and never returned to the client.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        PilotesError::Unauthorized.into_response()
    }
}
