//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the item addressed by id can
//! disappear between the list fetch and the write. All other unexpected
//! responses land in `UnexpectedStatus` with the raw status code and body.
//! Decode failures are always surfaced; an unreadable list is never treated
//! as an empty one.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods, transports and `TodoApi`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS,
    /// timeout, broken body stream).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server returned 404 for the addressed todo.
    #[error("todo not found (HTTP 404)")]
    NotFound,

    /// The server answered with a status other than the one the operation
    /// requires.
    #[error("unexpected status code: {status}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
