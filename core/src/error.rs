//! Error types for the posts client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because a 404 on update or delete
//! means the local copy is stale. All other non-2xx responses land in
//! `HttpError` with the raw status code and body for the diagnostic log.
//! The sync layer never branches on the variant: every failure collapses
//! into one logged path.

use thiserror::Error;

/// Errors produced while building, executing or parsing a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 404; the requested post does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}
