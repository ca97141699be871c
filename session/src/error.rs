//! Session error types.

use thiserror::Error;

/// Session errors.
///
/// Invalid actions are never errors; these cover configuration and
/// documents handed to the session from outside.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Schema could not be built.
    #[error("schema error: {0}")]
    Schema(#[from] nexus_registry::SchemaError),

    /// An action or state document could not be read or written.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
