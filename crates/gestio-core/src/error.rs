//! Error types for Gestio core primitives.

use thiserror::Error;

/// Errors that can occur while decoding core data.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown capability: {0}")]
    UnknownCapability(String),

    #[error("duplicate module {module} in record for user {user}")]
    DuplicateModule { user: String, module: String },

    #[error("malformed record: {0}")]
    MalformedRecord(String),
}
