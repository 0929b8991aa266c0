//! Error types for the client and the controller.
//!
//! # Design
//! Two layers. [`ApiError`] is what a single remote call can produce:
//! non-2xx status, transport failure, or a body that would not (de)serialize.
//! All non-2xx statuses land in one `Http` variant — callers do not
//! distinguish by status code. [`SyncError`] is the controller's last-error
//! value, one variant per remote operation, wrapping the causing `ApiError`.

use thiserror::Error;

/// Errors produced by a single remote call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status. Raw status and body are kept
    /// for the error banner and logs.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never completed: connect, DNS, or I/O failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

/// Which remote operation a [`SyncError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncErrorKind {
    FetchFailed,
    AddFailed,
    UpdateFailed,
    DeleteFailed,
}

/// The controller's last-error value.
///
/// Each variant corresponds 1:1 to one of the four remote operations
/// failing. Stored on the controller until the next successful operation
/// supersedes it or the caller dismisses it.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to load todos: {0}")]
    FetchFailed(#[source] ApiError),

    #[error("failed to add todo: {0}")]
    AddFailed(#[source] ApiError),

    #[error("failed to update todo: {0}")]
    UpdateFailed(#[source] ApiError),

    #[error("failed to delete todo: {0}")]
    DeleteFailed(#[source] ApiError),
}

impl SyncError {
    pub fn kind(&self) -> SyncErrorKind {
        match self {
            SyncError::FetchFailed(_) => SyncErrorKind::FetchFailed,
            SyncError::AddFailed(_) => SyncErrorKind::AddFailed,
            SyncError::UpdateFailed(_) => SyncErrorKind::UpdateFailed,
            SyncError::DeleteFailed(_) => SyncErrorKind::DeleteFailed,
        }
    }
}
